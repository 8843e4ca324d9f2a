use super::authenticated_client;
use crate::{
    analytics::risk_reward::RiskReward,
    config::Config,
    models::{trade::{Trade, TradeId}, trade_form::TradeForm},
};
use anyhow::{anyhow, Result};

pub async fn list(config: &Config) -> Result<()> {
    let trades = authenticated_client(config)?.get_trades().await?;

    println!("{}", render_trade_list(&trades));

    Ok(())
}

pub async fn new_trade(config: &Config, form: &TradeForm) -> Result<()> {
    let payload = form.parse()?;

    if let Some(rr) = RiskReward::from_prices(
        Some(payload.entry_price),
        payload.stop_loss,
        payload.take_profit,
    ) {
        println!(
            "Risk {:.1} pips, reward {:.1} pips, R:R {}",
            rr.risk_pips(),
            rr.reward_pips(),
            rr
        );
    }

    authenticated_client(config)?.create_trade(&payload).await?;
    println!(
        "Saved {} {} {} @ {}.",
        payload.trade_type, payload.lot_size, payload.pair, payload.entry_price
    );

    Ok(())
}

pub async fn close_trade(config: &Config, id: &str, exit_price: f64) -> Result<()> {
    if !exit_price.is_finite() || exit_price <= 0.0 {
        return Err(anyhow!("Exit price must be a positive number, got {}.", exit_price));
    }

    let id = TradeId::from(id);
    authenticated_client(config)?
        .close_trade(&id, exit_price)
        .await?;

    println!("Closed trade {} at {}.", id, exit_price);

    Ok(())
}

pub fn render_trade_list(trades: &[Trade]) -> String {
    if trades.is_empty() {
        return "No trades yet. Create your first trade with `trade-journal new-trade`."
            .to_string();
    }

    trades
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
