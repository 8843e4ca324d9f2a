use crate::{
    analytics::risk_reward::{format_risk_reward, RiskReward},
    models::{
        emotion::Emotion, message_payloads::create_trade_payload::CreateTradePayload,
        trade::TradeType,
    },
};
use anyhow::{anyhow, Result};
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct TradeBuilder {
    pub pair: Option<String>,
    pub trade_type: Option<TradeType>,
    pub lot_size: Option<f64>,
    pub entry_price: Option<f64>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub notes: Option<String>,
    pub emotion: Option<Emotion>,
}

impl TradeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(mut self, pair: &str) -> Self {
        self.pair = Some(pair.to_string());
        self
    }

    pub fn trade_type(mut self, trade_type: TradeType) -> Self {
        self.trade_type = Some(trade_type);
        self
    }

    pub fn lot_size(mut self, lot_size: f64) -> Self {
        self.lot_size = Some(lot_size);
        self
    }

    pub fn entry_price(mut self, entry_price: f64) -> Self {
        self.entry_price = Some(entry_price);
        self
    }

    pub fn stop_loss(mut self, stop_loss: f64) -> Self {
        self.stop_loss = Some(stop_loss);
        self
    }

    pub fn take_profit(mut self, take_profit: f64) -> Self {
        self.take_profit = Some(take_profit);
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = Some(emotion);
        self
    }

    pub fn build(&self) -> Result<CreateTradePayload> {
        let pair = self
            .pair
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or(anyhow!("Pair is required to build Trade."))?;
        let trade_type = self
            .trade_type
            .ok_or(anyhow!("Trade type is required to build Trade."))?;
        let lot_size = self
            .lot_size
            .ok_or(anyhow!("Lot size is required to build Trade."))?;
        let entry_price = self
            .entry_price
            .ok_or(anyhow!("Entry price is required to build Trade."))?;

        if lot_size <= 0.0 {
            return Err(anyhow!("Lot size must be positive, got {}.", lot_size));
        }

        let risk_reward =
            RiskReward::from_prices(Some(entry_price), self.stop_loss, self.take_profit);

        let trade = CreateTradePayload {
            pair: pair.trim().to_uppercase(),
            trade_type,
            lot_size,
            entry_price,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
            notes: self.notes.clone().filter(|n| !n.trim().is_empty()),
            emotion: self.emotion,
            risk_reward: format_risk_reward(risk_reward),
            trade_date: Utc::now(),
        };

        Ok(trade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_payload_with_risk_reward() {
        let payload = TradeBuilder::new()
            .pair("eurusd")
            .trade_type(TradeType::Long)
            .lot_size(0.1)
            .entry_price(1.0850)
            .stop_loss(1.0800)
            .take_profit(1.0950)
            .emotion(Emotion::Patient)
            .build()
            .unwrap();

        assert_eq!(payload.pair, "EURUSD");
        assert_eq!(payload.risk_reward, "1:2.0");
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn missing_prices_give_sentinel_ratio() {
        let payload = TradeBuilder::new()
            .pair("GBPUSD")
            .trade_type(TradeType::Short)
            .lot_size(1.0)
            .entry_price(1.27)
            .build()
            .unwrap();

        assert_eq!(payload.risk_reward, "0:0");
    }

    #[test]
    fn requires_core_fields() {
        let err = TradeBuilder::new().pair("EURUSD").build().unwrap_err();
        assert!(err.to_string().contains("Trade type"));

        let err = TradeBuilder::new()
            .pair("EURUSD")
            .trade_type(TradeType::Long)
            .lot_size(0.0)
            .entry_price(1.1)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Lot size"));
    }
}
