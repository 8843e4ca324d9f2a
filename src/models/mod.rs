pub mod auth;
pub mod emotion;
pub mod message_payloads;
pub mod session;
pub mod trade;
pub mod trade_builder;
pub mod trade_form;
pub mod trade_stats;
