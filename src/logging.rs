//! File-backed tracing setup for the interactive session.
//!
//! The terminal is owned by the TUI, so logs never go to stdout/stderr;
//! tracing is only installed when a log file is configured.

use std::fs::{self, File};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::settings::ResolvedConfig;

/// Install the global tracing subscriber when a log file is configured.
pub(crate) fn init(config: &ResolvedConfig) -> Result<()> {
	let Some(path) = &config.log_file else {
		return Ok(());
	};

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = File::create(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter = EnvFilter::try_new(&config.log_filter)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Arc::new(file))
		.with_ansi(false)
		.init();

	Ok(())
}
