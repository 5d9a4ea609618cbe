//! Optional file-backed diagnostic sink.
//!
//! The game loop owns the terminal, so diagnostics go to a file instead of
//! stderr. The sink is opt-in: without a path the process runs with tracing
//! disabled and every trace call is a no-op.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file. Unset means no diagnostics.
pub const LOG_PATH_VAR: &str = "TERMTRIS_LOG";

/// Install a file-backed subscriber for the process lifetime.
///
/// Filtering follows `RUST_LOG` and defaults to `info`.
pub fn init_file_log(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Install the sink if the environment asks for one.
pub fn init_from_env() -> Result<()> {
    match std::env::var_os(LOG_PATH_VAR) {
        Some(path) => init_file_log(Path::new(&path)),
        None => Ok(()),
    }
}
