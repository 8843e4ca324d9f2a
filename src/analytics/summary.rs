use super::{
    emotions::{best_emotion, EmotionSummary},
    pairs::{top_pairs, PairCount},
    risk_reward::format_average_ratio,
};
use crate::{
    models::{trade::Trade, trade_stats::TradeStats},
    utils::constants::{MONTHLY_TRADE_GOAL, NO_DATA},
};
use std::fmt::{Display, Formatter};

/// Everything the analytics report shows, derived from one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub win_rate: f64,
    pub total_profit: f64,
    pub average_risk_reward: String,
    pub best_emotion: Option<EmotionSummary>,
    pub top_pairs: Vec<PairCount>,
    pub goal_progress: f64,
}

impl PerformanceSummary {
    /// Headline numbers come from `stats`, the rest from the trade list.
    pub fn new(stats: &TradeStats, trades: &[Trade]) -> Self {
        Self {
            total_trades: stats.total_trades,
            winning_trades: stats.winning_trades,
            win_rate: stats.win_rate,
            total_profit: stats.total_profit,
            average_risk_reward: format_average_ratio(trades),
            best_emotion: best_emotion(trades),
            top_pairs: top_pairs(trades),
            goal_progress: monthly_goal_progress(stats.total_trades),
        }
    }

    pub fn from_trades(trades: &[Trade]) -> Self {
        Self::new(&TradeStats::from_trades(trades), trades)
    }

    pub fn best_emotion_label(&self) -> String {
        self.best_emotion
            .map(|e| e.emotion.to_string())
            .unwrap_or_else(|| NO_DATA.to_string())
    }
}

/// Percent of the monthly trade goal reached, capped at 100.
pub fn monthly_goal_progress(total_trades: usize) -> f64 {
    (total_trades as f64 / MONTHLY_TRADE_GOAL as f64 * 100.0).min(100.0)
}

impl Display for PerformanceSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.total_profit >= 0.0 { "+" } else { "" };

        writeln!(f, "Performance Analytics")?;
        writeln!(
            f,
            "  Win Rate      {:.1}% ({}/{} trades)",
            self.win_rate, self.winning_trades, self.total_trades
        )?;
        writeln!(f, "  Total P&L     {}{:.2} USD", sign, self.total_profit)?;
        writeln!(f, "  Avg R:R       {}", self.average_risk_reward)?;
        writeln!(f, "  Best Emotion  {}", self.best_emotion_label())?;

        match &self.best_emotion {
            Some(best) => writeln!(
                f,
                "                {} trades, {:.2} USD P&L",
                best.count, best.total_profit
            )?,
            None => writeln!(f, "                0 trades, 0.00 USD P&L")?,
        }

        writeln!(f)?;
        writeln!(f, "Top Pairs")?;
        if self.top_pairs.is_empty() {
            writeln!(f, "  {}", NO_DATA)?;
        }
        for (i, pair) in self.top_pairs.iter().enumerate() {
            writeln!(f, "  {}. {:<8} {} trades", i + 1, pair.pair, pair.count)?;
        }

        writeln!(f)?;
        write!(
            f,
            "Monthly goal  {}/{} trades ({:.0}%)",
            self.total_trades.min(MONTHLY_TRADE_GOAL),
            MONTHLY_TRADE_GOAL,
            self.goal_progress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analytics::test_trade, models::emotion::Emotion};

    #[test]
    fn empty_summary_is_neutral() {
        let summary = PerformanceSummary::from_trades(&[]);

        assert_eq!(summary.win_rate, 0.0);
        assert_eq!(summary.total_profit, 0.0);
        assert_eq!(summary.average_risk_reward, "0:0");
        assert_eq!(summary.best_emotion_label(), "No data");
        assert!(summary.top_pairs.is_empty());
        assert_eq!(summary.goal_progress, 0.0);
        assert!(summary.to_string().contains("No data"));
    }

    #[test]
    fn server_stats_drive_headline_numbers() {
        let stats = TradeStats {
            total_trades: 40,
            total_profit: -12.0,
            winning_trades: 10,
            losing_trades: 30,
            win_rate: 25.0,
            daily_pl: vec![],
        };
        let trades = vec![test_trade("EURUSD", Some(5.0), Some(Emotion::Patient))];

        let summary = PerformanceSummary::new(&stats, &trades);

        assert_eq!(summary.win_rate, 25.0);
        assert_eq!(summary.total_profit, -12.0);
        assert_eq!(summary.goal_progress, 100.0);
        assert_eq!(summary.best_emotion_label(), "Patient");
    }

    #[test]
    fn goal_progress_scales_then_caps() {
        assert_eq!(monthly_goal_progress(5), 25.0);
        assert_eq!(monthly_goal_progress(20), 100.0);
        assert_eq!(monthly_goal_progress(33), 100.0);
    }
}
