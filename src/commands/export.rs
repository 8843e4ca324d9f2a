use super::authenticated_client;
use crate::{config::Config, models::trade::Trade};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    trade_date: String,
    pair: &'a str,
    direction: String,
    lot_size: f64,
    entry_price: f64,
    exit_price: Option<f64>,
    stop_loss: Option<f64>,
    take_profit: Option<f64>,
    profit_loss: Option<f64>,
    status: String,
    emotion: Option<&'static str>,
    notes: Option<&'a str>,
}

impl<'a> From<&'a Trade> for ExportRow<'a> {
    fn from(trade: &'a Trade) -> Self {
        ExportRow {
            id: trade.id.as_ref().map(|id| id.0.as_str()).unwrap_or(""),
            trade_date: trade.trade_date.to_rfc3339(),
            pair: &trade.pair,
            direction: trade.trade_type.to_string(),
            lot_size: trade.lot_size,
            entry_price: trade.entry_price,
            exit_price: trade.exit_price,
            stop_loss: trade.stop_loss,
            take_profit: trade.take_profit,
            profit_loss: trade.profit_loss,
            status: trade.status.to_string(),
            emotion: trade.emotion.map(|e| e.as_str()),
            notes: trade.notes.as_deref(),
        }
    }
}

pub async fn run(config: &Config, output: &Path) -> Result<()> {
    let trades = authenticated_client(config)?.get_trades().await?;

    let file = File::create(output)
        .with_context(|| format!("Could not create {}", output.display()))?;
    write_trades(file, &trades)?;

    tracing::info!(path = %output.display(), trades = trades.len(), "Exported trades");
    println!("Exported {} trades to {}.", trades.len(), output.display());

    Ok(())
}

pub fn write_trades<W: Write>(writer: W, trades: &[Trade]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for trade in trades {
        wtr.serialize(ExportRow::from(trade))?;
    }

    wtr.flush()?;

    Ok(())
}
