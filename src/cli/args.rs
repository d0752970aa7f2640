use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

use crate::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("postscout {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "postscout",
	version,
	long_version = long_version(),
	about = "Interactive search over a blog post catalog",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `postscout` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "POSTSCOUT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "posts",
		value_name = "FILE",
		env = "POSTSCOUT_POSTS",
		help = "Load the post catalog from a JSON file (default: builtin demo posts)"
	)]
	pub(crate) posts: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search term (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'C',
		long = "category",
		value_name = "CATEGORY",
		help = "Start with a category filter (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period after the last input change before searching (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "latency-ms",
		value_name = "MS",
		help = "Simulated latency of each search execution (default: 500)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		short = 't',
		long = "prompt-title",
		value_name = "TEXT",
		help = "Override the prompt title (default: Blog Search)"
	)]
	pub(crate) prompt_title: Option<String>,
	#[arg(
		long = "placeholder",
		value_name = "TEXT",
		help = "Override the input placeholder (default: Search posts...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "table-title",
		value_name = "TEXT",
		help = "Override the results block title (default: Posts)"
	)]
	pub(crate) table_title: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		env = "POSTSCOUT_LOG_FILE",
		help = "Write tracing output to this file (default: disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-filter",
		value_name = "FILTER",
		env = "POSTSCOUT_LOG_FILTER",
		help = "Tracing filter directive (default: info)"
	)]
	pub(crate) log_filter: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-categories",
		help = "List catalog categories and exit (default: disabled)"
	)]
	pub(crate) list_categories: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
