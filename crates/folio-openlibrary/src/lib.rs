// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Open Library API client for Folio.
//!
//! This crate provides a typed Rust client for the Open Library search and
//! work-detail endpoints, plus the normalisation step that turns raw form
//! input into a [`SearchFilters`] value.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{
	OpenLibraryClient, DEFAULT_DETAIL_BASE_URL, DEFAULT_SEARCH_URL, RECOMMENDED_LIMIT,
	RECOMMENDED_TERM,
};
pub use error::{OpenLibraryError, ValidationRejected};
pub use query::{normalize, offset_for_page, search_query_pairs};
pub use types::{
	BookDetail, ResultItem, SearchFilters, SearchPage, HARD_RESULT_CAP, RESULTS_PER_PAGE,
};
