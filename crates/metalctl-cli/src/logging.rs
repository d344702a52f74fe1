//! Diagnostic logging to stderr.
//!
//! Table output goes to stdout, so logs never mix with what scripts parse.
//! `RUST_LOG` takes precedence over `--log-level` and `--debug`.

use crate::args::LogLevel;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;

pub fn level_filter(level: LogLevel, debug: bool) -> LevelFilter {
    if debug && level < LogLevel::Debug {
        return LevelFilter::DEBUG;
    }
    match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init(level: LogLevel, debug: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter(level, debug).into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(
            Layer::default()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .try_init();
}
