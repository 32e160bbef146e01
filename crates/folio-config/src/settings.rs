// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The `config.toml` schema.

use std::path::{Path, PathBuf};

use folio_openlibrary::{DEFAULT_DETAIL_BASE_URL, DEFAULT_SEARCH_URL};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
	pub search_url: String,
	pub detail_base_url: String,
	/// Per-request timeout. Unset means requests may wait indefinitely.
	pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			search_url: DEFAULT_SEARCH_URL.to_string(),
			detail_base_url: DEFAULT_DETAIL_BASE_URL.to_string(),
			timeout_secs: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
	/// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: DEFAULT_LOG_LEVEL.to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
	pub api: ApiConfig,
	pub logging: LoggingConfig,
}

/// Values supplied on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub config_file: Option<PathBuf>,
	pub search_url: Option<String>,
	pub detail_base_url: Option<String>,
	pub log_level: Option<String>,
}

impl FolioConfig {
	/// Reads `path`, or returns defaults if it does not exist.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		if !path.exists() {
			tracing::debug!(path = %path.display(), "config file not found, using defaults");
			return Ok(Self::default());
		}

		let contents = std::fs::read_to_string(path)?;
		Self::parse(&contents, path)
	}

	pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
		toml::from_str(contents).map_err(|source| ConfigError::TomlParse {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn apply(&mut self, cli: CliOverrides) {
		if let Some(url) = cli.search_url {
			self.api.search_url = url;
		}
		if let Some(url) = cli.detail_base_url {
			self.api.detail_base_url = url;
		}
		if let Some(level) = cli.log_level {
			self.logging.level = level;
		}
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.api.search_url.trim().is_empty() {
			return Err(ConfigError::invalid_value("api.search_url", "must not be empty"));
		}
		if self.api.detail_base_url.trim().is_empty() {
			return Err(ConfigError::invalid_value(
				"api.detail_base_url",
				"must not be empty",
			));
		}
		if self.api.timeout_secs == Some(0) {
			return Err(ConfigError::invalid_value(
				"api.timeout_secs",
				"must be greater than zero",
			));
		}
		Ok(())
	}
}
