use crate::models::trade::TradeStatus;
use serde::Serialize;

/// Body of `PUT /trades/:id`. The API derives profit/loss from the exit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseTradePayload {
    pub exit_price: f64,
    pub status: TradeStatus,
}

impl CloseTradePayload {
    pub fn new(exit_price: f64) -> Self {
        Self {
            exit_price,
            status: TradeStatus::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_trade_closed() {
        let body = serde_json::to_value(CloseTradePayload::new(1.0912)).unwrap();

        assert_eq!(body, serde_json::json!({ "exit_price": 1.0912, "status": "Closed" }));
    }
}
