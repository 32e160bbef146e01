// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use folio_browser::{DetailView, PageLinks, Presenter, RecommendationCard, ResultsView};
use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

/// A change to apply to the on-screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
	Loading(bool),
	ClearError,
	Error(String),
	Results(ResultsView),
	Pagination(Option<PageLinks>),
	Detail(DetailView),
	Recommendations(Vec<RecommendationCard>),
}

/// Presenter used by background fetches; the UI loop drains the channel
/// and applies updates in arrival order.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
	tx: UnboundedSender<ViewUpdate>,
}

impl ChannelPresenter {
	pub fn new(tx: UnboundedSender<ViewUpdate>) -> Self {
		Self { tx }
	}

	fn send(&self, update: ViewUpdate) {
		if self.tx.send(update).is_err() {
			trace!("UI loop gone, dropping view update");
		}
	}
}

impl Presenter for ChannelPresenter {
	fn set_loading(&mut self, loading: bool) {
		self.send(ViewUpdate::Loading(loading));
	}

	fn clear_error(&mut self) {
		self.send(ViewUpdate::ClearError);
	}

	fn present_error(&mut self, message: &str) {
		self.send(ViewUpdate::Error(message.to_string()));
	}

	fn present_results(&mut self, view: &ResultsView) {
		self.send(ViewUpdate::Results(view.clone()));
	}

	fn present_pagination(&mut self, links: Option<&PageLinks>) {
		self.send(ViewUpdate::Pagination(links.cloned()));
	}

	fn present_detail(&mut self, detail: &DetailView) {
		self.send(ViewUpdate::Detail(detail.clone()));
	}

	fn present_recommendations(&mut self, cards: &[RecommendationCard]) {
		self.send(ViewUpdate::Recommendations(cards.to_vec()));
	}
}
