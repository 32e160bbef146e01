// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Open Library API client implementation.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, trace};

use crate::error::OpenLibraryError;
use crate::query::search_query_pairs;
use crate::types::{
	BookDetail, DetailApiResponse, ResultItem, SearchApiResponse, SearchFilters, SearchPage,
};

pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";
pub const DEFAULT_DETAIL_BASE_URL: &str = "https://openlibrary.org";

/// Fixed term used for the startup recommendations.
pub const RECOMMENDED_TERM: &str = "best";
/// Number of recommendations fetched at startup.
pub const RECOMMENDED_LIMIT: u32 = 12;

/// Client for the Open Library search and work-detail endpoints.
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
	http_client: Client,
	search_url: String,
	detail_base_url: String,
}

impl OpenLibraryClient {
	/// Creates a client pointed at the public Open Library endpoints.
	///
	/// No request timeout is configured; see [`Self::with_timeout`].
	pub fn new() -> Self {
		Self {
			http_client: folio_common_http::new_client(),
			search_url: DEFAULT_SEARCH_URL.to_string(),
			detail_base_url: DEFAULT_DETAIL_BASE_URL.to_string(),
		}
	}

	/// Sets a custom search endpoint (useful for testing).
	pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
		self.search_url = search_url.into();
		self
	}

	/// Sets a custom base for detail lookups (useful for testing).
	pub fn with_detail_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.detail_base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	/// Rebuilds the HTTP client with a per-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.http_client = folio_common_http::new_client_with_timeout(timeout);
		self
	}

	/// Fetches one page of hits for `filters`.
	#[instrument(skip(self, filters), fields(query = %filters.query))]
	pub async fn search(
		&self,
		filters: &SearchFilters,
		page: u32,
	) -> Result<SearchPage, OpenLibraryError> {
		let page = page.max(1);
		let pairs = search_query_pairs(filters, page);

		debug!(url = %self.search_url, "Sending search request to Open Library");
		trace!(params = ?pairs, "Search parameters");

		let response = self.send(self.http_client.get(&self.search_url).query(&pairs)).await?;
		let body: SearchApiResponse = decode(response).await?;

		let items: Vec<ResultItem> = body.docs.into_iter().map(ResultItem::from).collect();

		debug!(
			result_count = items.len(),
			total_found = body.num_found,
			"Search completed successfully"
		);

		Ok(SearchPage {
			items,
			total_found: body.num_found,
			page_number: page,
		})
	}

	/// Fetches the full record for a hit's identifier.
	///
	/// The identifier is used as a path segment as-is; identifiers returned by
	/// [`Self::search`] already start with `/`.
	#[instrument(skip(self))]
	pub async fn fetch_detail(&self, identifier: &str) -> Result<BookDetail, OpenLibraryError> {
		let url = self.detail_url(identifier);
		debug!(url = %url, "Fetching work detail");

		self.fetch_detail_inner(&url)
			.await
			.map(BookDetail::from)
			.map_err(|e| OpenLibraryError::detail(identifier, e))
	}

	async fn fetch_detail_inner(&self, url: &str) -> Result<DetailApiResponse, OpenLibraryError> {
		let response = self.send(self.http_client.get(url)).await?;
		decode(response).await
	}

	/// Fetches the fixed recommendation query.
	#[instrument(skip(self))]
	pub async fn fetch_recommended(&self, limit: u32) -> Result<Vec<ResultItem>, OpenLibraryError> {
		let params = [("q", RECOMMENDED_TERM.to_string()), ("limit", limit.to_string())];

		let response = self.send(self.http_client.get(&self.search_url).query(&params)).await?;
		let body: SearchApiResponse = decode(response).await?;

		debug!(result_count = body.docs.len(), "Recommendations loaded");
		Ok(body.docs.into_iter().map(ResultItem::from).collect())
	}

	pub fn search_url(&self) -> &str {
		&self.search_url
	}

	pub fn detail_url(&self, identifier: &str) -> String {
		format!("{}{}.json", self.detail_base_url, identifier)
	}

	async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, OpenLibraryError> {
		let response = request.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("Request timed out");
			} else {
				error!(error = %e, "Network error during Open Library request");
			}
			OpenLibraryError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from Open Library");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			error!(status = status_code, body = %body, "Open Library API error");
			return Err(OpenLibraryError::RequestFailed {
				status: status_code,
				message: body,
			});
		}

		Ok(response)
	}
}

impl Default for OpenLibraryClient {
	fn default() -> Self {
		Self::new()
	}
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, OpenLibraryError> {
	let body = response.text().await.map_err(|e| {
		error!(error = %e, "Failed to read response body");
		OpenLibraryError::Network(e)
	})?;

	trace!(body = %body, "Response body");

	serde_json::from_str(&body).map_err(|e| {
		error!(error = %e, "Failed to parse Open Library response");
		OpenLibraryError::InvalidResponse(format!("JSON parse error: {e}"))
	})
}
