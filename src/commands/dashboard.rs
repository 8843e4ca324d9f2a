use super::authenticated_client;
use crate::{
    analytics::summary::PerformanceSummary,
    config::Config,
    models::{
        trade::Trade,
        trade_stats::{DailyPl, TradeStats},
    },
};
use anyhow::Result;
use std::fmt::{Display, Formatter};

/// Trades shown under "Recent Trades".
const RECENT_TRADES: usize = 10;

pub async fn run(config: &Config) -> Result<()> {
    let (trades, stats) = authenticated_client(config)?.fetch_dashboard().await?;

    tracing::debug!(trades = trades.len(), "Fetched dashboard data");

    println!("{}", Dashboard::new(&stats, &trades));

    Ok(())
}

/// Stats header, P/L curve, recent trades and the analytics summary.
pub struct Dashboard<'a> {
    stats: &'a TradeStats,
    trades: &'a [Trade],
}

impl<'a> Dashboard<'a> {
    pub fn new(stats: &'a TradeStats, trades: &'a [Trade]) -> Self {
        Self { stats, trades }
    }

    pub fn open_positions(&self) -> usize {
        self.trades.iter().filter(|t| t.is_open()).count()
    }
}

impl Display for Dashboard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats;
        let sign = if stats.is_profitable() { "+" } else { "" };

        writeln!(f, "P/L Curve  {:.1}% Win Rate", stats.win_rate)?;
        writeln!(
            f,
            "Net Profit {}{:.2} USD   Wins {}   Losses {}   Open {}",
            sign,
            stats.total_profit,
            stats.winning_trades,
            stats.losing_trades,
            self.open_positions()
        )?;
        writeln!(f)?;

        let curve = DailyPl::cumulative(&stats.daily_pl);
        if curve.is_empty() {
            writeln!(f, "  No closed trades yet.")?;
        }
        for day in &curve {
            writeln!(f, "  {}  {:>10.2}", day.date, day.total)?;
        }

        writeln!(f)?;
        writeln!(f, "Recent Trades")?;
        if self.trades.is_empty() {
            writeln!(f, "  No trades yet.")?;
        }
        for trade in self.trades.iter().take(RECENT_TRADES) {
            writeln!(f, "  {}", trade)?;
        }

        writeln!(f)?;
        write!(f, "{}", PerformanceSummary::new(stats, self.trades))
    }
}
