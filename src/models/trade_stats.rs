use crate::analytics::{daily::daily_pl, outcome::Outcomes};
use crate::models::trade::Trade;
use serde::{Deserialize, Serialize};

/// Net profit/loss for one calendar day, keyed `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPl {
    #[serde(rename = "_id")]
    pub date: String,
    pub total: f64,
}

impl DailyPl {
    /// Running total over a periodic series, i.e. the P/L curve.
    pub fn cumulative(series: &[DailyPl]) -> Vec<DailyPl> {
        series
            .iter()
            .scan(0.0, |running, day| {
                *running += day.total;
                Some(DailyPl {
                    date: day.date.clone(),
                    total: *running,
                })
            })
            .collect()
    }
}

/// Summary served by `GET /trades/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    pub total_trades: usize,
    pub total_profit: f64,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate: f64,
    #[serde(rename = "dailyPL", default)]
    pub daily_pl: Vec<DailyPl>,
}

impl TradeStats {
    /// Computes the same summary locally from a trade listing.
    pub fn from_trades(trades: &[Trade]) -> Self {
        let outcomes = Outcomes::tally(trades);

        Self {
            total_trades: outcomes.total,
            total_profit: outcomes.total_profit,
            winning_trades: outcomes.winning,
            losing_trades: outcomes.losing,
            win_rate: outcomes.win_rate(),
            daily_pl: daily_pl(trades),
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.total_profit >= 0.0
    }
}
