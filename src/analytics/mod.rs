//! Derived performance metrics over a set of journal trades.
//!
//! Everything here is a pure function of its input. Empty inputs produce
//! neutral values (0, `0:0`, no best emotion) instead of NaN or errors.

pub mod daily;
pub mod emotions;
pub mod outcome;
pub mod pairs;
pub mod risk_reward;
pub mod summary;

#[cfg(test)]
pub(crate) fn test_trade(
    pair: &str,
    profit_loss: Option<f64>,
    emotion: Option<crate::models::emotion::Emotion>,
) -> crate::models::trade::Trade {
    use crate::models::trade::{Trade, TradeStatus, TradeType};
    use chrono::{TimeZone, Utc};

    Trade {
        id: None,
        pair: pair.to_string(),
        trade_type: TradeType::Long,
        lot_size: 0.1,
        entry_price: 1.0850,
        exit_price: None,
        stop_loss: None,
        take_profit: None,
        profit_loss,
        notes: None,
        emotion,
        status: if profit_loss.is_some() {
            TradeStatus::Closed
        } else {
            TradeStatus::Open
        },
        trade_date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    }
}
