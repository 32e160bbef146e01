// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response types for the Open Library API.

use serde::{Deserialize, Serialize};

/// Number of hits a page nominally holds. Pagination math uses this value.
pub const RESULTS_PER_PAGE: u32 = 10;

/// Trailing `limit` sent on every search request. Because it comes last in
/// the query string it is the limit the API actually honours.
pub const HARD_RESULT_CAP: u32 = 50;

/// Validated search input, rebuilt from the form on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
	pub query: String,
	pub author: Option<String>,
	pub subject: Option<String>,
	pub language: Option<String>,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
	/// Opaque key (e.g. `/works/OL45804W`) used for the detail lookup.
	pub identifier: String,
	pub title: String,
	pub authors: Vec<String>,
	pub first_publish_year: Option<i32>,
}

/// One page of search hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
	pub items: Vec<ResultItem>,
	pub total_found: u64,
	pub page_number: u32,
}

/// Full record of a single work, as shown in the detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
	pub title: Option<String>,
	pub authors: Vec<String>,
	pub first_publish_year: Option<i32>,
	pub subjects: Vec<String>,
	pub description: Option<String>,
	pub page_count: Option<u32>,
	pub publishers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchApiResponse {
	#[serde(default)]
	pub docs: Vec<SearchDoc>,
	#[serde(rename = "numFound", default)]
	pub num_found: u64,
}

// Every field is optional so one malformed hit cannot sink the page.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchDoc {
	pub key: Option<String>,
	pub title: Option<String>,
	pub author_name: Option<Vec<String>>,
	pub first_publish_year: Option<i32>,
}

impl From<SearchDoc> for ResultItem {
	fn from(doc: SearchDoc) -> Self {
		ResultItem {
			// An empty identifier is never offered for detail lookup.
			identifier: doc.key.unwrap_or_default(),
			title: doc.title.unwrap_or_default(),
			authors: doc.author_name.unwrap_or_default(),
			first_publish_year: doc.first_publish_year,
		}
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailApiResponse {
	pub title: Option<String>,
	pub authors: Option<Vec<NamedEntry>>,
	pub first_publish_year: Option<i32>,
	pub subjects: Option<Vec<String>>,
	pub description: Option<Description>,
	pub number_of_pages: Option<u32>,
	pub publishers: Option<Vec<NamedEntry>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedEntry {
	pub name: Option<String>,
}

/// Open Library serves descriptions either as plain text or as a typed
/// `{ "type": "/type/text", "value": "..." }` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Description {
	Text(String),
	Structured { value: String },
}

impl Description {
	pub fn into_text(self) -> String {
		match self {
			Description::Text(text) => text,
			Description::Structured { value } => value,
		}
	}
}

fn names(entries: Option<Vec<NamedEntry>>) -> Vec<String> {
	entries
		.unwrap_or_default()
		.into_iter()
		.filter_map(|entry| entry.name)
		.collect()
}

impl From<DetailApiResponse> for BookDetail {
	fn from(raw: DetailApiResponse) -> Self {
		BookDetail {
			title: raw.title,
			authors: names(raw.authors),
			first_publish_year: raw.first_publish_year,
			subjects: raw.subjects.unwrap_or_default(),
			description: raw.description.map(Description::into_text),
			page_count: raw.number_of_pages,
			publishers: names(raw.publishers),
		}
	}
}
