//! Trading journal client.
//!
//! Logs trades against a remote journal API and derives performance
//! metrics (win rate, P&L, best emotional state, top pairs, risk:reward)
//! from the trade history.

pub mod analytics;
pub mod api;
pub mod commands;
pub mod config;
pub mod logger;
pub mod models;
pub mod utils;
