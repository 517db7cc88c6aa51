use std::io::{self, IsTerminal};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level for the given verbosity: warnings only by default, debug with `--verbose`
pub fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the level when set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = build_env_filter(level_for(verbose));
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    // External crates stay at warn
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,kot_scorer={}", level_str)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(false), Level::WARN);
        assert_eq!(level_for(true), Level::DEBUG);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
        tracing::debug!("logging initialised");
    }
}
