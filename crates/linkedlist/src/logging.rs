//! Logging setup for the list crate and the `llist` binary.
//!
//! List operations emit `tracing` events under the `linkedlist` target:
//! `debug` when `remove` or `set_item` changes a node, `trace` for appends
//! and slice selections. The library never installs a subscriber itself.
//! `llist` does so through [`init_logging`], sending events to standard
//! error so that list renderings on standard output stay clean.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Target every event of this crate is recorded under.
const TARGET: &str = "linkedlist";

/// How much of the list's event stream to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above; list operations stay silent.
    #[default]
    Normal,
    /// Also show node removals and overwrites.
    Verbose,
    /// Also show every append and slice selection.
    Trace,
}

impl Verbosity {
    /// The most detailed level shown at this verbosity.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// The `EnvFilter` directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn directive(&self) -> String {
        format!("{TARGET}={}", self.to_level_filter())
    }
}

/// Install a stderr subscriber for the `llist` binary.
///
/// `RUST_LOG` overrides `verbosity` when set. Calling this again after a
/// subscriber is installed does nothing.
///
/// # Examples
///
/// ```no_run
/// use linkedlist::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Capture warnings in test output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
