use std::sync::Arc;

use anyhow::{Context, Result, bail, ensure};
use postscout_core::{PickOutcome, PostCatalog};
use postscout_tui::{App, theme_by_name};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search session.
pub(crate) struct SearchWorkflow {
	app: App<'static>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = Arc::new(load_catalog(&config)?);
		ensure!(!catalog.is_empty(), "post catalog is empty");

		let mut app = App::new(catalog, config.timings).with_labels(config.labels);

		if let Some(name) = &config.theme {
			let Some(theme) = theme_by_name(name) else {
				bail!("unknown theme '{name}'");
			};
			app = app.with_theme(theme);
		}
		if !config.initial_query.is_empty() {
			app = app.with_initial_query(config.initial_query);
		}
		if let Some(category) = &config.initial_category {
			app = app.with_category(category);
		}

		Ok(Self { app })
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		postscout_tui::run(self.app)
	}
}

/// Load the configured catalog, falling back to the builtin demo posts.
pub(crate) fn load_catalog(config: &ResolvedConfig) -> Result<PostCatalog> {
	match &config.catalog_path {
		Some(path) => PostCatalog::from_json_file(path)
			.with_context(|| format!("failed to load post catalog from {}", path.display())),
		None => Ok(PostCatalog::builtin()),
	}
}
