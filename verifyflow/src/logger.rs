// verifyflow/src/logger.rs
//! Logger initialisation for the verifyflow binary.
//!
//! Logs always go to stderr so that report output on stdout stays clean.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Filter used when neither a flag nor `RUST_LOG` says otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Maps the global flags to an explicit level. `None` defers to `RUST_LOG`.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

/// Initializes `env_logger`. Calling it twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)),
    };
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
