use crate::{models::trade::Trade, utils::constants::PIP_MULTIPLIER};
use std::fmt::{Display, Formatter};

/// Shown wherever a ratio cannot be computed.
pub const UNDEFINED_RATIO: &str = "0:0";

/// Price distances of a planned trade from entry to its stop and target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskReward {
    pub risk: f64,
    pub reward: f64,
}

impl RiskReward {
    /// Returns `None` when any price is missing or the stop sits on the
    /// entry, so callers never see a NaN or infinite ratio.
    pub fn from_prices(
        entry: Option<f64>,
        stop_loss: Option<f64>,
        take_profit: Option<f64>,
    ) -> Option<Self> {
        let (entry, stop_loss, take_profit) = (entry?, stop_loss?, take_profit?);

        let risk = (entry - stop_loss).abs();
        let reward = (take_profit - entry).abs();

        if risk == 0.0 || !(reward / risk).is_finite() {
            return None;
        }

        Some(Self { risk, reward })
    }

    pub fn ratio(&self) -> f64 {
        self.reward / self.risk
    }

    pub fn risk_pips(&self) -> f64 {
        self.risk * PIP_MULTIPLIER
    }

    pub fn reward_pips(&self) -> f64 {
        self.reward * PIP_MULTIPLIER
    }
}

impl Display for RiskReward {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "1:{:.1}", self.ratio())
    }
}

/// Formats an optional ratio, falling back to `0:0`.
pub fn format_risk_reward(rr: Option<RiskReward>) -> String {
    match rr {
        Some(rr) => rr.to_string(),
        None => UNDEFINED_RATIO.to_string(),
    }
}

/// Mean reward/risk over the trades that carry a complete price plan.
pub fn average_ratio(trades: &[Trade]) -> Option<f64> {
    let ratios: Vec<f64> = trades
        .iter()
        .filter_map(|t| t.risk_reward())
        .map(|rr| rr.ratio())
        .collect();

    if ratios.is_empty() {
        return None;
    }

    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

pub fn format_average_ratio(trades: &[Trade]) -> String {
    match average_ratio(trades) {
        Some(ratio) => format!("1:{:.1}", ratio),
        None => UNDEFINED_RATIO.to_string(),
    }
}
