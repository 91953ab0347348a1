use crate::config::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use colored::*;
use env_logger::{Builder, Env};
use log::{info, Level};
use std::io::Write;

/// Initialise env_logger. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };

    Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| match record.level() {
            Level::Debug | Level::Trace => writeln!(
                buf,
                "[{}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
}

/// Print a success message with a green checkmark
pub fn success(msg: &str) {
    info!("{} {}", "✓".green(), msg);
}

/// Print an info message with a blue info symbol
pub fn info(msg: &str) {
    info!("{} {}", "ℹ".blue(), msg);
}
