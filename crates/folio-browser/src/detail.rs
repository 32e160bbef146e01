// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Detail overlay contents and its open/closed state.

use folio_openlibrary::BookDetail;
use serde::{Deserialize, Serialize};

use crate::render::{join_or_unknown, year_or_unknown, UNKNOWN};

/// Fully resolved text for every line of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailView {
	pub title: String,
	pub authors: String,
	pub first_published: String,
	pub subjects: String,
	pub description: String,
	pub page_count: String,
	pub publishers: String,
}

impl From<&BookDetail> for DetailView {
	fn from(detail: &BookDetail) -> Self {
		Self {
			title: detail
				.title
				.clone()
				.filter(|t| !t.is_empty())
				.unwrap_or_else(|| UNKNOWN.to_string()),
			authors: join_or_unknown(&detail.authors),
			first_published: year_or_unknown(detail.first_publish_year),
			subjects: join_or_unknown(&detail.subjects),
			description: detail
				.description
				.clone()
				.unwrap_or_else(|| UNKNOWN.to_string()),
			page_count: detail
				.page_count
				.map(|n| n.to_string())
				.unwrap_or_else(|| UNKNOWN.to_string()),
			publishers: join_or_unknown(&detail.publishers),
		}
	}
}

impl DetailView {
	/// Labelled lines in display order, title excluded.
	pub fn fields(&self) -> [(&'static str, &str); 6] {
		[
			("Author", self.authors.as_str()),
			("First Published", self.first_published.as_str()),
			("Subjects", self.subjects.as_str()),
			("Description", self.description.as_str()),
			("Number of Pages", self.page_count.as_str()),
			("Publisher", self.publishers.as_str()),
		]
	}
}

/// What the user did while the overlay was up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
	/// The explicit close control.
	CloseControl,
	/// An activation landing outside the overlay's content bounds.
	OutsideContent,
	/// An activation inside the content; never closes.
	InsideContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
	#[default]
	Closed,
	Open(DetailView),
}

impl ModalState {
	pub fn open(&mut self, view: DetailView) {
		*self = ModalState::Open(view);
	}

	/// Returns true if the trigger closed an open overlay.
	pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
		if !self.is_open() {
			return false;
		}
		match trigger {
			DismissTrigger::CloseControl | DismissTrigger::OutsideContent => {
				*self = ModalState::Closed;
				true
			}
			DismissTrigger::InsideContent => false,
		}
	}

	pub fn is_open(&self) -> bool {
		matches!(self, ModalState::Open(_))
	}

	pub fn view(&self) -> Option<&DetailView> {
		match self {
			ModalState::Open(view) => Some(view),
			ModalState::Closed => None,
		}
	}
}
