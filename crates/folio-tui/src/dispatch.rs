// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runs UI commands off the render loop.
//!
//! Fetches are spawned as tokio tasks, each with its own [`ChannelPresenter`].
//! Overlapping fetches are not cancelled; their updates are applied in the
//! order they arrive.

use folio_browser::{BookSource, BrowserController};
use folio_config::{DarkMode, PreferenceStore};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::Command;
use crate::presenter::{ChannelPresenter, ViewUpdate};

pub struct Dispatcher<S> {
	controller: BrowserController<S>,
	tx: UnboundedSender<ViewUpdate>,
	preferences: PreferenceStore,
}

impl<S: BookSource + 'static> Dispatcher<S> {
	pub fn new(
		controller: BrowserController<S>,
		tx: UnboundedSender<ViewUpdate>,
		preferences: PreferenceStore,
	) -> Self {
		Self {
			controller,
			tx,
			preferences,
		}
	}

	/// Executes `command`. Network work returns the spawned task's handle.
	pub fn dispatch(&self, command: Command) -> Option<JoinHandle<()>> {
		match command {
			Command::Fetch { filters, page } => {
				let controller = self.controller.clone();
				let mut presenter = ChannelPresenter::new(self.tx.clone());
				Some(tokio::spawn(async move {
					// Errors already reached the presenter.
					let _ = controller.fetch_page(&filters, page, &mut presenter).await;
				}))
			}
			Command::OpenDetail(identifier) => {
				let controller = self.controller.clone();
				let mut presenter = ChannelPresenter::new(self.tx.clone());
				Some(tokio::spawn(async move {
					let _ = controller.open_detail(&identifier, &mut presenter).await;
				}))
			}
			Command::SaveDarkMode(mode) => {
				self.save_dark_mode(mode);
				None
			}
		}
	}

	/// Starts the one-off recommendations fetch.
	pub fn load_recommendations(&self) -> JoinHandle<()> {
		let controller = self.controller.clone();
		let mut presenter = ChannelPresenter::new(self.tx.clone());
		tokio::spawn(async move {
			controller.load_recommendations(&mut presenter).await;
		})
	}

	fn save_dark_mode(&self, mode: DarkMode) {
		match self.preferences.save_dark_mode(mode) {
			Ok(()) => debug!(mode = mode.as_str(), "saved dark mode preference"),
			Err(e) => warn!(
				error = %e,
				path = %self.preferences.path().display(),
				"failed to save dark mode preference"
			),
		}
	}
}
