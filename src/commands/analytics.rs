use super::authenticated_client;
use crate::{
    analytics::{risk_reward::RiskReward, summary::PerformanceSummary},
    config::Config,
};
use anyhow::Result;

pub async fn run(config: &Config) -> Result<()> {
    let (trades, stats) = authenticated_client(config)?.fetch_dashboard().await?;

    println!("{}", PerformanceSummary::new(&stats, &trades));

    Ok(())
}

/// Offline calculator for a planned trade.
pub fn risk_reward(entry: f64, stop_loss: f64, take_profit: f64) -> Result<()> {
    match RiskReward::from_prices(Some(entry), Some(stop_loss), Some(take_profit)) {
        Some(rr) => {
            println!("Risk    {:.1} pips", rr.risk_pips());
            println!("Reward  {:.1} pips", rr.reward_pips());
            println!("R:R     {}", rr);
        }
        None => {
            tracing::warn!(entry, stop_loss, "Stop loss equals entry, ratio undefined");
            println!("R:R     0:0");
        }
    }

    Ok(())
}
