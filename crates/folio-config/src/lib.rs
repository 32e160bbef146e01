// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for Folio.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - TOML configuration file parsing with CLI overrides
//! - The persisted dark-mode preference

pub mod error;
pub mod paths;
pub mod preferences;
pub mod settings;

pub use error::ConfigError;
pub use paths::PathsConfig;
pub use preferences::{DarkMode, PreferenceStore, DARK_MODE_KEY};
pub use settings::{ApiConfig, CliOverrides, FolioConfig, LoggingConfig};

/// Load configuration from the default user config file, then apply CLI
/// overrides. A missing file yields defaults.
pub fn load_config(cli: CliOverrides) -> Result<(FolioConfig, PathsConfig), ConfigError> {
	let paths = paths::resolve_xdg_paths()?;
	let config_file = cli
		.config_file
		.clone()
		.unwrap_or_else(|| paths.user_config_file.clone());

	let mut config = FolioConfig::load(&config_file)?;
	config.apply(cli);
	config.validate()?;

	Ok((config, paths))
}
