//! File logging.
//!
//! The terminal belongs to the game screen, so log lines go to the file named
//! by `MIXEL_LOG_PATH`. Without it no subscriber is installed and every
//! `tracing` call is a no-op.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber. Returns whether logging is enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!("install log subscriber: {err}"))?;

    tracing::info!(path = %path.display(), filter = %config.log_filter, "logging started");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_path_means_no_subscriber() {
        let config = Config::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_path: Some(dir.path().join("missing").join("mixel.log")),
            ..Config::default()
        };
        assert!(init(&config).is_err());
    }
}
