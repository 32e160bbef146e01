// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `folio`: search Open Library from the terminal.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, Subcommand};
use folio_browser::BrowserController;
use folio_config::{CliOverrides, DarkMode, FolioConfig, PathsConfig, PreferenceStore};
use folio_openlibrary::OpenLibraryClient;
use folio_tui::{App, Dispatcher};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Search Open Library from the terminal", version)]
struct Args {
	#[command(subcommand)]
	command: Option<Command>,

	/// Path to the config file (default: ~/.config/folio/config.toml)
	#[arg(long, env = "FOLIO_CONFIG")]
	config: Option<PathBuf>,

	/// Override the search endpoint
	#[arg(long, env = "FOLIO_SEARCH_URL")]
	search_url: Option<String>,

	/// Override the base URL for book detail records
	#[arg(long, env = "FOLIO_DETAIL_URL")]
	detail_url: Option<String>,

	/// Log filter directive, e.g. `debug` or `folio_openlibrary=trace`
	#[arg(long)]
	log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("folio {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	let (config, paths) = folio_config::load_config(CliOverrides {
		config_file: args.config,
		search_url: args.search_url,
		detail_base_url: args.detail_url,
		log_level: args.log_level,
	})?;

	init_tracing(&config, &paths)?;
	tracing::info!(
		search_url = %config.api.search_url,
		detail_base_url = %config.api.detail_base_url,
		"starting folio"
	);

	let mut client = OpenLibraryClient::new()
		.with_search_url(config.api.search_url.clone())
		.with_detail_base_url(config.api.detail_base_url.clone());
	if let Some(secs) = config.api.timeout_secs {
		client = client.with_timeout(Duration::from_secs(secs));
	}

	let preferences = PreferenceStore::new(paths.preferences_file());
	let dark_mode = preferences.load_dark_mode().unwrap_or_else(|e| {
		tracing::warn!(error = %e, "could not read preferences, using light mode");
		DarkMode::Disabled
	});

	let (tx, rx) = mpsc::unbounded_channel();
	let dispatcher = Dispatcher::new(BrowserController::new(client), tx, preferences);
	dispatcher.load_recommendations();

	let app = App::new(dark_mode);
	tokio::task::spawn_blocking(move || folio_tui::terminal::run(app, dispatcher, rx, TICK_RATE))
		.await??;

	tracing::info!("folio exited");
	Ok(())
}

/// Logs go to a file in the state directory; the terminal belongs to the UI.
fn init_tracing(config: &FolioConfig, paths: &PathsConfig) -> anyhow::Result<()> {
	fs::create_dir_all(&paths.state_dir)?;
	let log_file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(paths.log_file())?;

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(Mutex::new(log_file))
				.with_ansi(false),
		)
		.init();
	Ok(())
}
