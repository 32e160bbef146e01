// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use folio_openlibrary::{normalize, SearchFilters, ValidationRejected};
use serde::{Deserialize, Serialize};

/// Live contents of the search form, exactly as typed.
///
/// Filters are derived from this on every submission and every page change,
/// so edits made while browsing apply to the next page fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
	pub query: String,
	pub author: String,
	pub subject: String,
	pub language: String,
}

impl SearchForm {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}

	pub fn author(mut self, author: impl Into<String>) -> Self {
		self.author = author.into();
		self
	}

	pub fn subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = subject.into();
		self
	}

	pub fn language(mut self, language: impl Into<String>) -> Self {
		self.language = language.into();
		self
	}

	pub fn filters(&self) -> Result<SearchFilters, ValidationRejected> {
		normalize(&self.query, &self.author, &self.subject, &self.language)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_sets_fields() {
		let form = SearchForm::new("dune").author("herbert").language("eng");
		let filters = form.filters().unwrap();
		assert_eq!(filters.author.as_deref(), Some("herbert"));
		assert_eq!(filters.subject, None);
		assert_eq!(filters.language.as_deref(), Some("eng"));
	}

	#[test]
	fn blank_form_is_rejected() {
		assert_eq!(SearchForm::default().filters(), Err(ValidationRejected));
	}
}
