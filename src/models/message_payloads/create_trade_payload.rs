use crate::models::{emotion::Emotion, trade::TradeType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of `POST /trades`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTradePayload {
    pub pair: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub lot_size: f64,
    pub entry_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    pub risk_reward: String,
    pub trade_date: DateTime<Utc>,
}
