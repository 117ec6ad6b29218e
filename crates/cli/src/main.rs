//! Vesta board inspector.
//!
//! Loads a public issue board through the issue store, applies filter
//! selections and prints counts per state, revealed filter candidates and
//! due dates.

mod fixture;
mod report;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use vesta_config::{Config, default_config_path};
use vesta_filters::{FilterDimension, FilterPanel, ReferenceSizes};
use vesta_primitives::Scope;
use vesta_store::{IssueStore, RefreshOutcome};

use crate::fixture::FileIssueService;

/// Board inspector command line arguments.
#[derive(Parser, Debug)]
#[command(name = "vesta")]
#[command(about = "Summarize a public issue board snapshot")]
struct Args {
	/// Board JSON in the public issues format
	#[arg(value_name = "PATH")]
	board: PathBuf,

	/// Workspace slug
	#[arg(short, long, default_value = "local")]
	workspace: String,

	/// Project id
	#[arg(short, long, default_value = "board")]
	project: String,

	/// Config file (defaults to the user config directory)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Filter selection as `dimension=value`, repeatable
	#[arg(short, long = "select", value_name = "DIM=VALUE")]
	selections: Vec<String>,

	/// Narrow filter candidates by text
	#[arg(short, long)]
	query: Option<String>,

	/// Reveal one more step of a filter section, repeatable
	#[arg(short, long, value_name = "DIM")]
	expand: Vec<FilterDimension>,

	/// Reference time for relative dates (defaults to the local clock)
	#[arg(long, value_name = "DATE")]
	now: Option<String>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = load_config(args.config.as_deref())?;
	setup_tracing(args.verbose, &config.log.filter);

	let scope = Scope::new(&args.workspace, &args.project)?;
	let now = match args.now.as_deref() {
		Some(raw) => vesta_datetime::parse_date_input(raw).with_context(|| format!("invalid --now date: {raw}"))?,
		None => chrono::Local::now().naive_local(),
	};

	let mut panel = FilterPanel::new(config.disclosure, FilterDimension::all());
	for selection in &args.selections {
		let (dimension, value) = parse_selection(selection)?;
		panel.applied.toggle(dimension, value);
	}

	let store = IssueStore::new(Arc::new(FileIssueService::new(&args.board)));
	let params = panel.applied.to_fetch_params();
	info!(%scope, board = %args.board.display(), filters = params.len(), "loading board");
	match store.refresh(&scope, &params).await {
		RefreshOutcome::Applied { issues, .. } => info!(issues, "board loaded"),
		RefreshOutcome::Failed { error, .. } => return Err(error).context(format!("loading {}", args.board.display())),
		RefreshOutcome::Superseded { .. } => bail!("board refresh was superseded"),
	}

	let snapshot = store.snapshot();
	panel.sync_totals(ReferenceSizes {
		states: snapshot.states().len(),
		labels: snapshot.labels().len(),
		members: snapshot.members().len(),
	});
	if let Some(query) = args.query {
		panel.set_query(query);
	}
	for dimension in args.expand {
		if !panel.disclosure.expand(dimension) {
			tracing::debug!(%dimension, "filter section already fully revealed");
		}
	}

	print!("{}", report::render_board(&scope, &snapshot, &panel, now));
	Ok(())
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
	match explicit {
		Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display())),
		None => match default_config_path() {
			Some(path) => Config::load_or_default(&path).with_context(|| format!("loading config {}", path.display())),
			None => Ok(Config::default()),
		},
	}
}

fn parse_selection(raw: &str) -> anyhow::Result<(FilterDimension, &str)> {
	let Some((dimension, value)) = raw.split_once('=') else {
		bail!("selection must look like dimension=value, got {raw:?}");
	};
	let dimension = dimension.trim().parse::<FilterDimension>().with_context(|| format!("unknown filter dimension {dimension:?}"))?;
	let value = value.trim();
	if value.is_empty() {
		bail!("selection {raw:?} has no value");
	}
	Ok((dimension, value))
}

fn setup_tracing(verbose: bool, configured: &str) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = || {
		EnvFilter::try_from_env("VESTA_LOG").unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("vesta=trace")
			} else {
				EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("vesta=info"))
			}
		})
	};

	// VESTA_LOG_DIR keeps stdout free for the report
	if let Some(log_dir) = std::env::var("VESTA_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("vesta.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).with_target(true);
			tracing_subscriber::registry().with(filter()).with(file_layer).init();
			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt().with_env_filter(filter()).with_writer(std::io::stderr).init();
}
