// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shaping search hits into display records.

use folio_openlibrary::{ResultItem, SearchPage};
use serde::{Deserialize, Serialize};

/// Placeholder for any field the API left out.
pub const UNKNOWN: &str = "Unknown";

pub(crate) fn join_or_unknown(values: &[String]) -> String {
	if values.is_empty() {
		UNKNOWN.to_string()
	} else {
		values.join(", ")
	}
}

pub(crate) fn year_or_unknown(year: Option<i32>) -> String {
	year.map(|y| y.to_string()).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Compact summary of one hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
	pub title: String,
	pub authors: String,
	pub first_published: String,
}

impl From<&ResultItem> for DisplayRecord {
	fn from(item: &ResultItem) -> Self {
		Self {
			title: item.title.clone(),
			authors: join_or_unknown(&item.authors),
			first_published: year_or_unknown(item.first_publish_year),
		}
	}
}

/// A rendered hit paired with the key its activation resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
	pub identifier: String,
	pub record: DisplayRecord,
}

/// Everything the results surface shows for one page. Replaces the previous
/// view wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsView {
	NoResults,
	Hits { page_number: u32, rows: Vec<ResultRow> },
}

impl ResultsView {
	pub fn from_page(page: &SearchPage) -> Self {
		if page.items.is_empty() {
			return ResultsView::NoResults;
		}

		ResultsView::Hits {
			page_number: page.page_number,
			rows: page
				.items
				.iter()
				.map(|item| ResultRow {
					identifier: item.identifier.clone(),
					record: DisplayRecord::from(item),
				})
				.collect(),
		}
	}

	pub fn rows(&self) -> &[ResultRow] {
		match self {
			ResultsView::NoResults => &[],
			ResultsView::Hits { rows, .. } => rows,
		}
	}

	pub fn len(&self) -> usize {
		self.rows().len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows().is_empty()
	}

	/// Resolves an activated row back to its identifier.
	/// Hits that came back without a key have nothing to look up.
	pub fn identifier_at(&self, index: usize) -> Option<&str> {
		self.rows()
			.get(index)
			.map(|row| row.identifier.as_str())
			.filter(|id| !id.is_empty())
	}
}
