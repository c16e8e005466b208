//! Log output setup.
//!
//! The terminal is owned by the user interface while the games run, so log records never go to
//! the standard streams. They are only written when a log file is given on the command line.

use std::fs::OpenOptions;

use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Env, Target};

use crate::Config;

/// Installs the global logger described by `config`.
///
/// Records are appended to the configured log file, filtered by `RUST_LOG` and defaulting to the
/// `info` level. Without a log file this does nothing and every log macro becomes a no-op.
///
/// # Errors
///
/// Fails when the log file cannot be opened or when a global logger was already installed.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install the logger")?;

    Ok(())
}
