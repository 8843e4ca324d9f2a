use crate::models::trade::Trade;

/// Win/loss partition of a trade set.
///
/// A trade wins when its profit/loss is strictly positive. Everything else,
/// including trades that have not realized a result yet, counts as a loss,
/// so `winning + losing == total` for every input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Outcomes {
    pub total: usize,
    pub winning: usize,
    pub losing: usize,
    pub total_profit: f64,
}

impl Outcomes {
    pub fn tally(trades: &[Trade]) -> Self {
        trades.iter().fold(Self::default(), |mut acc, trade| {
            acc.total += 1;
            acc.total_profit += trade.profit_or_zero();

            if trade.is_win() {
                acc.winning += 1;
            } else {
                acc.losing += 1;
            }

            acc
        })
    }

    /// Percentage of winning trades, 0 for an empty set.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.winning as f64 / self.total as f64 * 100.0
    }
}

pub fn total_profit(trades: &[Trade]) -> f64 {
    trades.iter().map(Trade::profit_or_zero).sum()
}

pub fn win_rate(trades: &[Trade]) -> f64 {
    Outcomes::tally(trades).win_rate()
}
