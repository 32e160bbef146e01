// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Normalisation of raw form input and construction of search parameters.

use crate::error::ValidationRejected;
use crate::types::{SearchFilters, HARD_RESULT_CAP, RESULTS_PER_PAGE};

/// Trims every field and rejects an empty query.
///
/// Optional filters that are empty after trimming become `None` so they are
/// left out of the request instead of being sent as empty parameters.
pub fn normalize(
	raw_query: &str,
	raw_author: &str,
	raw_subject: &str,
	raw_language: &str,
) -> Result<SearchFilters, ValidationRejected> {
	let query = raw_query.trim();
	if query.is_empty() {
		return Err(ValidationRejected);
	}

	Ok(SearchFilters {
		query: query.to_string(),
		author: optional(raw_author),
		subject: optional(raw_subject),
		language: optional(raw_language),
	})
}

fn optional(raw: &str) -> Option<String> {
	let trimmed = raw.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Zero-based offset of the first hit on `page` (pages start at 1).
pub fn offset_for_page(page: u32) -> u64 {
	u64::from(page.max(1) - 1) * u64::from(RESULTS_PER_PAGE)
}

/// Ordered query parameters for a search request.
///
/// `limit` appears twice: first as the nominal page size, then, after the
/// filters, as the hard cap. Under standard query-string semantics the
/// second value wins.
pub fn search_query_pairs(filters: &SearchFilters, page: u32) -> Vec<(&'static str, String)> {
	let mut pairs = vec![
		("q", filters.query.clone()),
		("limit", RESULTS_PER_PAGE.to_string()),
		("offset", offset_for_page(page).to_string()),
	];

	if let Some(author) = &filters.author {
		pairs.push(("author", author.clone()));
	}
	if let Some(subject) = &filters.subject {
		pairs.push(("subject", subject.clone()));
	}
	if let Some(language) = &filters.language {
		pairs.push(("language", language.clone()));
	}

	pairs.push(("limit", HARD_RESULT_CAP.to_string()));
	pairs
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn empty_query_is_rejected() {
		assert_eq!(normalize("", "a", "b", "c"), Err(ValidationRejected));
		assert_eq!(normalize("   \t ", "", "", ""), Err(ValidationRejected));
	}

	#[test]
	fn fields_are_trimmed_and_empty_filters_dropped() {
		let filters = normalize("  dune ", " Herbert ", "  ", "eng").unwrap();
		assert_eq!(filters.query, "dune");
		assert_eq!(filters.author.as_deref(), Some("Herbert"));
		assert_eq!(filters.subject, None);
		assert_eq!(filters.language.as_deref(), Some("eng"));
	}

	#[test]
	fn offsets_follow_page_size() {
		assert_eq!(offset_for_page(1), 0);
		assert_eq!(offset_for_page(2), 10);
		assert_eq!(offset_for_page(10), 90);
		assert_eq!(offset_for_page(0), 0);
	}

	#[test]
	fn pairs_without_filters() {
		let filters = normalize("dune", "", "", "").unwrap();
		let pairs = search_query_pairs(&filters, 3);
		assert_eq!(
			pairs,
			vec![
				("q", "dune".to_string()),
				("limit", "10".to_string()),
				("offset", "20".to_string()),
				("limit", "50".to_string()),
			]
		);
	}

	#[test]
	fn hard_cap_limit_trails_the_filters() {
		let filters = normalize("dune", "herbert", "sf", "eng").unwrap();
		let pairs = search_query_pairs(&filters, 1);
		let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
		assert_eq!(
			keys,
			vec!["q", "limit", "offset", "author", "subject", "language", "limit"]
		);
		assert_eq!(pairs.last().unwrap().1, HARD_RESULT_CAP.to_string());
	}

	proptest! {
		#[test]
		fn whitespace_only_queries_never_pass(ws in "[ \t\n]{0,8}") {
			prop_assert_eq!(normalize(&ws, "x", "y", "z"), Err(ValidationRejected));
		}

		#[test]
		fn accepted_queries_have_no_outer_whitespace(q in "[ ]{0,3}[a-z]{1,10}[ ]{0,3}") {
			let filters = normalize(&q, "", "", "").unwrap();
			prop_assert_eq!(filters.query.as_str(), q.trim());
		}
	}
}
