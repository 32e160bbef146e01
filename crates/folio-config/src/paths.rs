// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

const APP_DIR: &str = "folio";

/// Resolved per-user paths for Folio.
#[derive(Debug, Clone)]
pub struct PathsConfig {
	/// User config file: ~/.config/folio/config.toml
	pub user_config_file: PathBuf,
	/// State directory: ~/.local/state/folio/
	pub state_dir: PathBuf,
}

impl PathsConfig {
	pub fn preferences_file(&self) -> PathBuf {
		self.state_dir.join("preferences.json")
	}

	pub fn log_file(&self) -> PathBuf {
		self.state_dir.join("folio.log")
	}
}

/// Resolve config and state directories for the current user.
///
/// Platforms without a dedicated state directory fall back to the local
/// data directory.
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let config_home = dirs::config_dir().ok_or(ConfigError::HomeDirNotFound)?;
	let state_home = dirs::state_dir()
		.or_else(dirs::data_local_dir)
		.ok_or(ConfigError::HomeDirNotFound)?;

	tracing::debug!(
		config_home = %config_home.display(),
		state_home = %state_home.display(),
		"resolved XDG paths"
	);

	Ok(PathsConfig {
		user_config_file: config_home.join(APP_DIR).join("config.toml"),
		state_dir: state_home.join(APP_DIR),
	})
}
