pub mod close_trade_payload;
pub mod create_trade_payload;
