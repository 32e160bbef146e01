// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use crate::detail::DetailView;
use crate::pagination::PageLinks;
use crate::recommendations::RecommendationCard;
use crate::render::ResultsView;

/// Display surface driven by [`crate::BrowserController`].
///
/// Implementations replace what they show on every call; none of these
/// methods are expected to diff against earlier state.
pub trait Presenter: Send {
	fn set_loading(&mut self, loading: bool);

	fn clear_error(&mut self);

	/// Shows a message in the shared error area.
	fn present_error(&mut self, message: &str);

	fn present_results(&mut self, view: &ResultsView);

	/// `None` removes the pagination controls entirely.
	fn present_pagination(&mut self, links: Option<&PageLinks>);

	fn present_detail(&mut self, detail: &DetailView);

	fn present_recommendations(&mut self, cards: &[RecommendationCard]);
}
