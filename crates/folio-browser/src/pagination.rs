// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page-link derivation and the page counter.

use serde::{Deserialize, Serialize};

/// Maximum number of consecutive page numbers shown at once.
const WINDOW_SIZE: u32 = 5;
/// How many pages before the current one the window tries to include.
const WINDOW_LEAD: u32 = 2;

/// Pagination controls for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
	pub show_prev: bool,
	pub show_next: bool,
	pub page_numbers: Vec<u32>,
	/// Page rendered as active. Equal to the current page, which may fall
	/// outside `page_numbers` if the result count shrank.
	pub active: u32,
	pub total_pages: u32,
}

impl PageLinks {
	pub fn is_active(&self, page: u32) -> bool {
		page == self.active
	}
}

/// Computes the controls for `current_page` of `total_found` hits.
///
/// Returns `None` when everything fits on a single page, in which case no
/// controls are shown at all.
pub fn compute_page_links(
	total_found: u64,
	current_page: u32,
	results_per_page: u32,
) -> Option<PageLinks> {
	if results_per_page == 0 {
		return None;
	}

	let total_pages = total_found.div_ceil(u64::from(results_per_page));
	if total_pages <= 1 {
		return None;
	}
	let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);

	let current_page = current_page.max(1);
	let start_page = current_page.saturating_sub(WINDOW_LEAD).max(1);
	let end_page = start_page.saturating_add(WINDOW_SIZE - 1).min(total_pages);

	Some(PageLinks {
		show_prev: current_page > 1,
		show_next: current_page < total_pages,
		page_numbers: (start_page..=end_page).collect(),
		active: current_page,
		total_pages,
	})
}

/// A navigation request from the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageAction {
	Prev,
	Next,
	Goto(u32),
}

/// The only state carried between requests: which page is current.
///
/// Values are threaded through navigation explicitly; [`Self::apply`]
/// returns the next state instead of mutating shared storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
	current_page: u32,
}

impl PaginationState {
	/// State for a freshly submitted search.
	pub fn first() -> Self {
		Self { current_page: 1 }
	}

	pub fn current_page(&self) -> u32 {
		self.current_page
	}

	#[must_use]
	pub fn apply(self, action: PageAction) -> Self {
		let current_page = match action {
			PageAction::Prev => self.current_page.saturating_sub(1).max(1),
			PageAction::Next => self.current_page.saturating_add(1),
			PageAction::Goto(page) => page.max(1),
		};
		Self { current_page }
	}
}

impl Default for PaginationState {
	fn default() -> Self {
		Self::first()
	}
}
