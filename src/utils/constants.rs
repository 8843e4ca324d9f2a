pub const DEFAULT_PAIR: &str = "EURUSD";
pub const DEFAULT_LOT_SIZE: &str = "0.1";

pub const CURRENCY_PAIRS: [&str; 10] = [
    "EURUSD", "GBPUSD", "USDJPY", "AUDUSD", "USDCAD", "NZDUSD", "USDCHF", "EURJPY", "GBPJPY",
    "EURGBP",
];

/// Price distance to pips for four-decimal quoted pairs.
pub const PIP_MULTIPLIER: f64 = 10_000.0;

pub const TOP_PAIRS_LIMIT: usize = 3;

/// Trades per month the goal tracker counts toward.
pub const MONTHLY_TRADE_GOAL: usize = 20;

pub const NO_DATA: &str = "No data";

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SESSION_FILE: &str = ".trade_journal_session.json";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

pub const RESET_CODE_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;
