// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use folio_openlibrary::{
	BookDetail, OpenLibraryClient, OpenLibraryError, ResultItem, SearchFilters, SearchPage,
};

/// Where the controller gets its records from.
#[async_trait]
pub trait BookSource: Send + Sync {
	async fn search(&self, filters: &SearchFilters, page: u32) -> Result<SearchPage, OpenLibraryError>;

	async fn fetch_detail(&self, identifier: &str) -> Result<BookDetail, OpenLibraryError>;

	async fn fetch_recommended(&self, limit: u32) -> Result<Vec<ResultItem>, OpenLibraryError>;
}

#[async_trait]
impl BookSource for OpenLibraryClient {
	async fn search(&self, filters: &SearchFilters, page: u32) -> Result<SearchPage, OpenLibraryError> {
		OpenLibraryClient::search(self, filters, page).await
	}

	async fn fetch_detail(&self, identifier: &str) -> Result<BookDetail, OpenLibraryError> {
		OpenLibraryClient::fetch_detail(self, identifier).await
	}

	async fn fetch_recommended(&self, limit: u32) -> Result<Vec<ResultItem>, OpenLibraryError> {
		OpenLibraryClient::fetch_recommended(self, limit).await
	}
}
