//! Tracing setup for the terminal runner.
//!
//! Stdout belongs to the table UI, so events go to the file named by
//! `CARD_TABLE_LOG_PATH`. With the variable unset no subscriber is installed.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_PATH_ENV: &str = "CARD_TABLE_LOG_PATH";

/// Install the file subscriber. Returns `false` when logging is disabled.
pub fn init_tracing() -> Result<bool> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,card_table_core=debug"));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(true)
}
