use anyhow::{Context, Result};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const RUST_LOG_ENV: &str = "RUST_LOG";

/// HTTP stack crates that are only interesting when they fail.
const QUIET_TARGETS: [&str; 2] = ["hyper=warn", "reqwest=warn"];

/// Installs the stderr subscriber. `RUST_LOG` directives refine `level`.
pub fn init_tracing(level: LevelFilter) -> Result<()> {
    if level == LevelFilter::OFF {
        return Ok(());
    }

    let extra = std::env::var(RUST_LOG_ENV).ok();
    let filter = journal_filter(level, extra.as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to init tracing")
}

fn journal_filter(level: LevelFilter, extra: Option<&str>) -> EnvFilter {
    let base = QUIET_TARGETS
        .iter()
        .filter_map(|d| d.parse::<Directive>().ok())
        .fold(EnvFilter::new("").add_directive(level.into()), |f, d| {
            f.add_directive(d)
        });

    extra
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .fold(base, |f, raw| match raw.parse::<Directive>() {
            Ok(d) => f.add_directive(d),
            Err(e) => {
                eprintln!("WARN ignoring {RUST_LOG_ENV} directive `{raw}`: {e}");
                f
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_directives_raise_verbosity() {
        let filter = journal_filter(LevelFilter::WARN, Some("trade_journal=debug, ,"));

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn bad_directives_are_skipped() {
        let filter = journal_filter(LevelFilter::INFO, Some("trade_journal=loud"));

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
