use crate::analytics::risk_reward::RiskReward;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use super::emotion::Emotion;

/// Opaque identifier assigned by the journal API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(pub String);

impl Display for TradeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TradeId {
    fn from(id: &str) -> Self {
        TradeId(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    Long,
    Short,
}

impl Display for TradeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::Long => write!(f, "Long"),
            TradeType::Short => write!(f, "Short"),
        }
    }
}

impl FromStr for TradeType {
    type Err = anyhow::Error;

    /// Accepts the direction names as well as the BUY/SELL button labels.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Ok(TradeType::Long),
            "short" | "sell" => Ok(TradeType::Short),
            _ => Err(anyhow::anyhow!("Unknown trade direction '{}'.", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeStatus {
    Open,
    Closed,
    Pending,
}

impl Display for TradeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeStatus::Open => write!(f, "Open"),
            TradeStatus::Closed => write!(f, "Closed"),
            TradeStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A single journal entry as returned by `GET /trades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TradeId>,
    pub pair: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub lot_size: f64,
    pub entry_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_loss: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    pub status: TradeStatus,
    pub trade_date: DateTime<Utc>,
}

impl Trade {
    /// Realized profit/loss, with an unrealized trade counting as zero.
    pub fn profit_or_zero(&self) -> f64 {
        self.profit_loss.unwrap_or(0.0)
    }

    pub fn is_win(&self) -> bool {
        self.profit_or_zero() > 0.0
    }

    pub fn is_open(&self) -> bool {
        self.status == TradeStatus::Open
    }

    pub fn risk_reward(&self) -> Option<RiskReward> {
        RiskReward::from_prices(Some(self.entry_price), self.stop_loss, self.take_profit)
    }

    /// UTC calendar day the trade was placed on, used for daily P&L buckets.
    pub fn trade_day(&self) -> NaiveDate {
        self.trade_date.date_naive()
    }
}

impl Display for Trade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let id = self
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        let result = match self.profit_loss {
            Some(pl) if pl >= 0.0 => format!("+{:.2} USD", pl),
            Some(pl) => format!("{:.2} USD", pl),
            None => "OPEN".to_string(),
        };

        write!(
            f,
            "{:<26} {} {:<8} {:<5} {:>6} @ {:<9} {:<7} {}",
            id,
            self.trade_date.format("%Y-%m-%d"),
            self.pair,
            self.trade_type,
            self.lot_size,
            self.entry_price,
            self.status,
            result
        )
    }
}
