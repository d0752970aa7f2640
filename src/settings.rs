use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, File};
use postscout_core::SearchTimings;
use postscout_tui::UiLabels;
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	catalog: CatalogSection,
	search: SearchSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	debounce_ms: Option<u64>,
	latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	initial_category: Option<String>,
	prompt_title: Option<String>,
	placeholder: Option<String>,
	table_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	file: Option<PathBuf>,
	filter: Option<String>,
}

/// Fully resolved application configuration.
pub(crate) struct ResolvedConfig {
	pub(crate) catalog_path: Option<PathBuf>,
	pub(crate) timings: SearchTimings,
	pub(crate) theme: Option<String>,
	pub(crate) initial_query: String,
	pub(crate) initial_category: Option<String>,
	pub(crate) labels: UiLabels,
	pub(crate) log_file: Option<PathBuf>,
	pub(crate) log_filter: String,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.catalog_path {
			Some(path) => println!("  Catalog: {}", path.display()),
			None => println!("  Catalog: (builtin demo posts)"),
		}
		println!("  Debounce: {}ms", self.timings.debounce.as_millis());
		println!("  Search latency: {}ms", self.timings.latency.as_millis());
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		if let Some(category) = &self.initial_category {
			println!("  Initial category: {category}");
		}
		match &self.log_file {
			Some(path) => println!("  Log file: {} ({})", path.display(), self.log_filter),
			None => println!("  Log file: (disabled)"),
		}
	}
}

/// Resolve configuration from defaults, files, environment, and CLI flags.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("postscout")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".postscout.toml"));
		files.push(current_dir.join("postscout.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.posts.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(value) = cli.debounce_ms {
			self.search.debounce_ms = Some(value);
		}
		if let Some(value) = cli.latency_ms {
			self.search.latency_ms = Some(value);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(category) = cli.category.clone() {
			self.ui.initial_category = Some(category);
		}
		if let Some(title) = cli.prompt_title.clone() {
			self.ui.prompt_title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(title) = cli.table_title.clone() {
			self.ui.table_title = Some(title);
		}
		if let Some(path) = cli.log_file.clone() {
			self.log.file = Some(path);
		}
		if let Some(filter) = cli.log_filter.clone() {
			self.log.filter = Some(filter);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let debounce_ms = self.search.debounce_ms.unwrap_or(300);
		let latency_ms = self.search.latency_ms.unwrap_or(500);
		ensure!(debounce_ms <= 60_000, "debounce must be at most a minute");
		ensure!(latency_ms <= 60_000, "search latency must be at most a minute");
		let timings = SearchTimings {
			debounce: Duration::from_millis(debounce_ms),
			latency: Duration::from_millis(latency_ms),
		};

		if let Some(path) = &self.catalog.path {
			ensure!(
				path.as_os_str() != "",
				"catalog path must not be empty"
			);
		}

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.prompt_title {
			labels.prompt_title = title;
		}
		if let Some(placeholder) = self.ui.placeholder {
			labels.placeholder = placeholder;
		}
		if let Some(title) = self.ui.table_title {
			labels.table_title = title;
		}

		Ok(ResolvedConfig {
			catalog_path: self.catalog.path,
			timings,
			theme: self.ui.theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			initial_category: self.ui.initial_category,
			labels,
			log_file: self.log.file,
			log_filter: self.log.filter.unwrap_or_else(|| "info".to_string()),
		})
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write as _;

	use clap::Parser;

	use super::*;

	fn bare_cli() -> CliArgs {
		CliArgs::parse_from(["postscout", "--no-config"])
	}

	#[test]
	fn defaults_resolve_to_the_reference_timings() {
		let resolved = RawConfig::default().resolve().expect("resolve");
		assert_eq!(resolved.timings.debounce, Duration::from_millis(300));
		assert_eq!(resolved.timings.latency, Duration::from_millis(500));
		assert!(resolved.catalog_path.is_none());
		assert_eq!(resolved.log_filter, "info");
	}

	#[test]
	fn cli_flags_override_file_settings() {
		let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("temp file");
		writeln!(file, "[search]\ndebounce_ms = 100\n\n[ui]\ntheme = \"mono\"")
			.expect("write");

		let mut cli = bare_cli();
		cli.config = vec![file.path().to_path_buf()];
		cli.theme = Some("light".to_string());

		let resolved = load(&cli).expect("load");
		// File value survives where the CLI is silent; CLI wins elsewhere.
		assert_eq!(resolved.timings.debounce, Duration::from_millis(100));
		assert_eq!(resolved.theme.as_deref(), Some("light"));
	}

	#[test]
	fn oversized_debounce_is_rejected() {
		let mut cli = bare_cli();
		cli.debounce_ms = Some(120_000);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn labels_pick_up_ui_overrides() {
		let mut cli = bare_cli();
		cli.prompt_title = Some("Docs".to_string());
		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.labels.prompt_title, "Docs");
		assert_eq!(resolved.labels.placeholder, "Search posts...");
	}
}
