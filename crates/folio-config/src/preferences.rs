// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persisted UI preferences.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::ConfigError;

/// Key the dark-mode flag is stored under.
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DarkMode {
	Enabled,
	#[default]
	Disabled,
}

impl DarkMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			DarkMode::Enabled => "enabled",
			DarkMode::Disabled => "disabled",
		}
	}

	pub fn from_stored(value: &str) -> Option<Self> {
		match value {
			"enabled" => Some(DarkMode::Enabled),
			"disabled" => Some(DarkMode::Disabled),
			_ => None,
		}
	}

	pub fn is_enabled(&self) -> bool {
		matches!(self, DarkMode::Enabled)
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			DarkMode::Enabled => DarkMode::Disabled,
			DarkMode::Disabled => DarkMode::Enabled,
		}
	}
}

/// Small JSON key/value file holding UI preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
	path: PathBuf,
}

impl PreferenceStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Reads the dark-mode flag. Missing or unrecognised values mean disabled.
	pub fn load_dark_mode(&self) -> Result<DarkMode, ConfigError> {
		let entries = self.read()?;
		let mode = match entries.get(DARK_MODE_KEY) {
			Some(Value::String(s)) => DarkMode::from_stored(s).unwrap_or_else(|| {
				warn!(value = %s, "ignoring unrecognised dark mode preference");
				DarkMode::Disabled
			}),
			_ => DarkMode::Disabled,
		};
		debug!(mode = mode.as_str(), "loaded dark mode preference");
		Ok(mode)
	}

	/// Writes the dark-mode flag, keeping any other stored keys.
	///
	/// An unparseable file is replaced rather than blocking the save.
	pub fn save_dark_mode(&self, mode: DarkMode) -> Result<(), ConfigError> {
		let mut entries = match self.read() {
			Ok(entries) => entries,
			Err(ConfigError::Preferences { path, source }) => {
				warn!(path = %path.display(), error = %source, "replacing unreadable preferences file");
				Map::new()
			}
			Err(e) => return Err(e),
		};
		entries.insert(
			DARK_MODE_KEY.to_string(),
			Value::String(mode.as_str().to_string()),
		);
		self.write(&entries)?;
		debug!(mode = mode.as_str(), path = %self.path.display(), "saved dark mode preference");
		Ok(())
	}

	fn read(&self) -> Result<Map<String, Value>, ConfigError> {
		if !self.path.exists() {
			return Ok(Map::new());
		}
		let contents = std::fs::read_to_string(&self.path)?;
		serde_json::from_str(&contents).map_err(|source| ConfigError::Preferences {
			path: self.path.clone(),
			source,
		})
	}

	fn write(&self, entries: &Map<String, Value>) -> Result<(), ConfigError> {
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		let json = serde_json::to_string_pretty(entries).map_err(|source| {
			ConfigError::Preferences {
				path: self.path.clone(),
				source,
			}
		})?;

		let tmp_path = self.path.with_extension("json.tmp");
		std::fs::write(&tmp_path, json)?;
		std::fs::rename(&tmp_path, &self.path)?;
		Ok(())
	}
}
