//! One entry point per CLI subcommand.
//!
//! Reports go to stdout; diagnostics go through `tracing`.

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod export;
pub mod trades;

use crate::{api::journal_client::JournalClient, config::Config, models::session::Session};
use anyhow::{anyhow, Result};

/// Client carrying the stored session token, or an error asking the user
/// to log in first.
pub(crate) fn authenticated_client(config: &Config) -> Result<JournalClient> {
    let session = Session::load(&config.session_file)?;

    let token = session
        .token()
        .ok_or(anyhow!("Not logged in. Run `trade-journal login` first."))?;

    Ok(JournalClient::new(config)?.with_token(Some(token)))
}
