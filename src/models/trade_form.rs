use crate::{
    models::{
        emotion::Emotion, message_payloads::create_trade_payload::CreateTradePayload,
        trade::TradeType, trade_builder::TradeBuilder,
    },
    utils::constants::{CURRENCY_PAIRS, DEFAULT_LOT_SIZE, DEFAULT_PAIR},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TradeFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("unknown direction '{0}', expected Long or Short")]
    UnknownDirection(String),
    #[error("unknown emotion '{0}'")]
    UnknownEmotion(String),
    #[error("{0}")]
    Incomplete(String),
}

/// Raw inputs of the new-trade form, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeForm {
    pub pair: String,
    pub direction: String,
    pub lot_size: String,
    pub entry_price: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub notes: String,
    pub emotion: String,
}

impl Default for TradeForm {
    fn default() -> Self {
        Self {
            pair: DEFAULT_PAIR.to_string(),
            direction: TradeType::Long.to_string(),
            lot_size: DEFAULT_LOT_SIZE.to_string(),
            entry_price: String::new(),
            stop_loss: String::new(),
            take_profit: String::new(),
            notes: String::new(),
            emotion: Emotion::Patient.as_str().to_string(),
        }
    }
}

impl TradeForm {
    /// Validates every field and produces the create-trade request.
    ///
    /// Stop-loss, take-profit, notes and emotion may be left blank. Numeric
    /// fields must parse and be strictly positive.
    pub fn parse(&self) -> Result<CreateTradePayload, TradeFormError> {
        if self.pair.trim().is_empty() {
            return Err(TradeFormError::MissingField("pair"));
        }
        if !is_listed_pair(&self.pair) {
            tracing::warn!(pair = %self.pair.trim(), "Pair is not one of the listed currency pairs");
        }

        let trade_type: TradeType = self
            .direction
            .parse()
            .map_err(|_| TradeFormError::UnknownDirection(self.direction.clone()))?;

        let lot_size = required_number("lot size", &self.lot_size)?;
        let entry_price = required_number("entry price", &self.entry_price)?;
        let stop_loss = optional_number("stop loss", &self.stop_loss)?;
        let take_profit = optional_number("take profit", &self.take_profit)?;

        let mut builder = TradeBuilder::new()
            .pair(&self.pair)
            .trade_type(trade_type)
            .lot_size(lot_size)
            .entry_price(entry_price)
            .notes(&self.notes);

        if let Some(stop_loss) = stop_loss {
            builder = builder.stop_loss(stop_loss);
        }
        if let Some(take_profit) = take_profit {
            builder = builder.take_profit(take_profit);
        }
        if !self.emotion.trim().is_empty() {
            let emotion: Emotion = self
                .emotion
                .parse()
                .map_err(|_| TradeFormError::UnknownEmotion(self.emotion.clone()))?;
            builder = builder.emotion(emotion);
        }

        builder
            .build()
            .map_err(|e| TradeFormError::Incomplete(e.to_string()))
    }
}

/// Whether `pair` is one of the currency pairs the form offers.
pub fn is_listed_pair(pair: &str) -> bool {
    let pair = pair.trim().to_uppercase();

    CURRENCY_PAIRS.iter().any(|listed| *listed == pair)
}

fn required_number(field: &'static str, raw: &str) -> Result<f64, TradeFormError> {
    optional_number(field, raw)?.ok_or(TradeFormError::MissingField(field))
}

fn optional_number(field: &'static str, raw: &str) -> Result<Option<f64>, TradeFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let value: f64 = raw.parse().map_err(|_| TradeFormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(TradeFormError::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(TradeFormError::NotPositive { field, value });
    }

    Ok(Some(value))
}
