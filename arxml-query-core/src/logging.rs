//! Opt-in log setup
//!
//! The library only emits `tracing` events. Nothing is printed until the
//! caller installs a subscriber, e.g. with [`init`].

use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

/// How much diagnostic output to show when `RUST_LOG` is not set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn level(&self) -> Level {
        match self {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::INFO,
            Verbosity::Verbose => Level::DEBUG,
            Verbosity::Trace => Level::TRACE,
        }
    }
}

/// Build the env filter: `RUST_LOG` wins, otherwise the given verbosity
fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(verbosity.level()).into())
        .from_env_lossy()
}

/// Install a stderr fmt subscriber as the global default
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(verbosity: Verbosity) -> bool {
    fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::default().level(), Level::INFO);
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }

    #[test]
    fn test_second_init_is_tolerated() {
        init(Verbosity::Quiet);
        assert!(!init(Verbosity::Verbose));
    }
}
