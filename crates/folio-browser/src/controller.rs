// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Orchestration of search, page navigation, detail and recommendations.
//!
//! The controller holds no mutable state. The page counter lives with the
//! caller as a [`PaginationState`] and is passed in and handed back by each
//! navigation method, so the UI loop remains its single writer.

use std::sync::Arc;

use folio_openlibrary::{
	OpenLibraryError, SearchFilters, ValidationRejected, RECOMMENDED_LIMIT, RESULTS_PER_PAGE,
};
use tracing::{debug, error, info, warn};

use crate::detail::DetailView;
use crate::form::SearchForm;
use crate::pagination::{compute_page_links, PageAction, PaginationState};
use crate::presenter::Presenter;
use crate::recommendations;
use crate::render::ResultsView;
use crate::source::BookSource;

/// Shown in the error area when a search page cannot be loaded.
pub const SEARCH_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
/// Shown in the error area when the detail overlay cannot be populated.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch book details. Please try again.";

/// Validates a new submission. A successful plan always starts on page 1.
pub fn plan_submit(form: &SearchForm) -> Result<(SearchFilters, PaginationState), ValidationRejected> {
	let filters = form.filters().inspect_err(|_| {
		debug!("search submission rejected: empty query");
	})?;
	Ok((filters, PaginationState::first()))
}

/// Re-reads the live form and applies `action` to `state`.
pub fn plan_navigation(
	form: &SearchForm,
	state: PaginationState,
	action: PageAction,
) -> Result<(SearchFilters, PaginationState), ValidationRejected> {
	let filters = form.filters().inspect_err(|_| {
		debug!(?action, "page navigation rejected: empty query");
	})?;
	let next = state.apply(action);
	debug!(
		?action,
		from = state.current_page(),
		to = next.current_page(),
		"page navigation"
	);
	Ok((filters, next))
}

pub struct BrowserController<S> {
	source: Arc<S>,
}

impl<S> Clone for BrowserController<S> {
	fn clone(&self) -> Self {
		Self {
			source: Arc::clone(&self.source),
		}
	}
}

impl<S: BookSource> BrowserController<S> {
	pub fn new(source: S) -> Self {
		Self::from_arc(Arc::new(source))
	}

	pub fn from_arc(source: Arc<S>) -> Self {
		Self { source }
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Submits a new search and renders its first page.
	pub async fn submit<P: Presenter>(
		&self,
		form: &SearchForm,
		presenter: &mut P,
	) -> Result<PaginationState, ValidationRejected> {
		let (filters, state) = plan_submit(form)?;
		info!(query = %filters.query, "submitting search");
		// Failures are already surfaced through the presenter.
		let _ = self.fetch_page(&filters, state.current_page(), presenter).await;
		Ok(state)
	}

	/// Moves to another page of the current search.
	pub async fn navigate<P: Presenter>(
		&self,
		form: &SearchForm,
		state: PaginationState,
		action: PageAction,
		presenter: &mut P,
	) -> Result<PaginationState, ValidationRejected> {
		let (filters, next) = plan_navigation(form, state, action)?;
		let _ = self.fetch_page(&filters, next.current_page(), presenter).await;
		Ok(next)
	}

	/// Fetches and renders one page, including its pagination controls.
	///
	/// The loading indicator is hidden again on every path.
	pub async fn fetch_page<P: Presenter>(
		&self,
		filters: &SearchFilters,
		page: u32,
		presenter: &mut P,
	) -> Result<(), OpenLibraryError> {
		presenter.set_loading(true);
		presenter.clear_error();

		let result = self.source.search(filters, page).await;
		match &result {
			Ok(search_page) => {
				let view = ResultsView::from_page(search_page);
				let links = if view.is_empty() {
					None
				} else {
					compute_page_links(
						search_page.total_found,
						search_page.page_number,
						RESULTS_PER_PAGE,
					)
				};
				presenter.present_results(&view);
				presenter.present_pagination(links.as_ref());
			}
			Err(e) => {
				error!(error = %e, page, "Error fetching results");
				presenter.present_error(SEARCH_ERROR_MESSAGE);
			}
		}

		presenter.set_loading(false);
		result.map(|_| ())
	}

	/// Loads a hit's full record into the detail overlay.
	///
	/// On failure the overlay stays closed and the shared error area
	/// carries the message instead.
	pub async fn open_detail<P: Presenter>(
		&self,
		identifier: &str,
		presenter: &mut P,
	) -> Result<(), OpenLibraryError> {
		presenter.set_loading(true);

		let result = self.source.fetch_detail(identifier).await;
		match &result {
			Ok(detail) => presenter.present_detail(&DetailView::from(detail)),
			Err(e) => {
				error!(error = %e, identifier, "Error fetching book details");
				presenter.present_error(DETAIL_ERROR_MESSAGE);
			}
		}

		presenter.set_loading(false);
		result.map(|_| ())
	}

	/// Loads the fixed recommendations grid. Failures are only logged.
	pub async fn load_recommendations<P: Presenter>(&self, presenter: &mut P) {
		match self.source.fetch_recommended(RECOMMENDED_LIMIT).await {
			Ok(items) => {
				debug!(count = items.len(), "rendering recommendations");
				presenter.present_recommendations(&recommendations::cards(&items));
			}
			Err(e) => {
				warn!(error = %e, "Error fetching recommended books");
			}
		}
	}
}
