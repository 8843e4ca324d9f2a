use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::metadata::LevelFilter;
use trade_journal::{
    api::journal_client::ApiError,
    commands::{analytics, auth, dashboard, export, trades},
    config::Config,
    logger::init_tracing,
    models::trade_form::TradeForm,
    utils::constants::{DEFAULT_LOT_SIZE, DEFAULT_PAIR},
};

#[derive(Parser)]
#[clap(name = "trade-journal", version, about = "Log trades and review your performance")]
pub struct Opts {
    /// Print debug logs to stderr
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Request a password reset code by email
    ForgotPassword {
        #[clap(long)]
        email: String,
    },
    /// Set a new password using the emailed code
    ResetPassword {
        #[clap(long)]
        email: String,
        #[clap(long)]
        code: String,
        #[clap(long)]
        new_password: String,
        #[clap(long)]
        confirm_password: String,
    },
    /// List all trades
    Trades,
    /// Log a new trade
    NewTrade {
        #[clap(long, default_value = DEFAULT_PAIR)]
        pair: String,
        /// Long/Short (or Buy/Sell)
        #[clap(long, default_value = "Long")]
        direction: String,
        #[clap(long, default_value = DEFAULT_LOT_SIZE)]
        lot_size: String,
        #[clap(long)]
        entry: String,
        #[clap(long, default_value = "")]
        stop_loss: String,
        #[clap(long, default_value = "")]
        take_profit: String,
        #[clap(long, default_value = "")]
        notes: String,
        /// confident, nervous, greedy, patient, reckless or disciplined
        #[clap(long, default_value = "patient")]
        emotion: String,
    },
    /// Close an open trade at the given exit price
    CloseTrade {
        id: String,
        #[clap(long)]
        exit_price: f64,
    },
    /// Stats, P/L curve and recent trades
    Dashboard,
    /// Performance analytics
    Analytics,
    /// Risk:reward of a planned trade, computed offline
    RiskReward {
        #[clap(long)]
        entry: f64,
        #[clap(long)]
        stop_loss: f64,
        #[clap(long)]
        take_profit: f64,
    },
    /// Export all trades to CSV
    Export {
        #[clap(long, short, default_value = "trades.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let opts = Opts::parse();
    let dotenv = dotenv::dotenv();

    let level = if opts.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    if let Err(e) = init_tracing(level) {
        eprintln!("Unable to initialise logging: {e:#}");
    }

    if let Err(e) = dotenv {
        tracing::debug!("No .env file loaded: {e}");
    }

    if let Err(e) = run(opts.command, &Config::from_env()).await {
        tracing::debug!("{e:?}");
        eprintln!("Error: {e:#}");

        if e
            .downcast_ref::<ApiError>()
            .is_some_and(ApiError::is_unauthorized)
        {
            eprintln!("Your session is not valid. Run `trade-journal login` to sign in again.");
        }

        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Login { email, password } => auth::login(config, &email, &password).await,
        Command::Register {
            name,
            email,
            password,
        } => auth::register(config, &name, &email, &password).await,
        Command::Logout => auth::logout(config),
        Command::ForgotPassword { email } => auth::forgot_password(config, &email).await,
        Command::ResetPassword {
            email,
            code,
            new_password,
            confirm_password,
        } => auth::reset_password(config, &email, &code, &new_password, &confirm_password).await,
        Command::Trades => trades::list(config).await,
        Command::NewTrade {
            pair,
            direction,
            lot_size,
            entry,
            stop_loss,
            take_profit,
            notes,
            emotion,
        } => {
            let form = TradeForm {
                pair,
                direction,
                lot_size,
                entry_price: entry,
                stop_loss,
                take_profit,
                notes,
                emotion,
            };
            trades::new_trade(config, &form).await
        }
        Command::CloseTrade { id, exit_price } => trades::close_trade(config, &id, exit_price).await,
        Command::Dashboard => dashboard::run(config).await,
        Command::Analytics => analytics::run(config).await,
        Command::RiskReward {
            entry,
            stop_loss,
            take_profit,
        } => analytics::risk_reward(entry, stop_loss, take_profit),
        Command::Export { output } => export::run(config, &output).await,
    }
}
