// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory doubles for the source and presenter seams.

use std::sync::Mutex;

use async_trait::async_trait;
use folio_openlibrary::{
	offset_for_page, BookDetail, OpenLibraryError, ResultItem, SearchFilters, SearchPage,
	RESULTS_PER_PAGE,
};

use crate::detail::DetailView;
use crate::pagination::PageLinks;
use crate::presenter::Presenter;
use crate::recommendations::RecommendationCard;
use crate::render::ResultsView;
use crate::source::BookSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
	Search {
		query: String,
		author: Option<String>,
		page: u32,
	},
	Detail(String),
	Recommended(u32),
}

#[derive(Default)]
pub struct FakeSource {
	total_found: u64,
	serve_items: bool,
	fail_status: Option<u16>,
	detail: Option<BookDetail>,
	recommended: Option<usize>,
	calls: Mutex<Vec<SourceCall>>,
}

impl FakeSource {
	pub fn with_total(total_found: u64) -> Self {
		Self {
			total_found,
			serve_items: true,
			..Default::default()
		}
	}

	pub fn empty_with_total(total_found: u64) -> Self {
		Self {
			total_found,
			serve_items: false,
			..Default::default()
		}
	}

	pub fn failing(status: u16) -> Self {
		Self {
			fail_status: Some(status),
			..Default::default()
		}
	}

	pub fn detail(mut self, detail: BookDetail) -> Self {
		self.detail = Some(detail);
		self
	}

	pub fn recommended(mut self, count: usize) -> Self {
		self.recommended = Some(count);
		self
	}

	pub fn calls(&self) -> Vec<SourceCall> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, call: SourceCall) {
		self.calls.lock().unwrap().push(call);
	}

	fn failure(&self) -> Option<OpenLibraryError> {
		self.fail_status.map(|status| OpenLibraryError::RequestFailed {
			status,
			message: "injected".to_string(),
		})
	}
}

fn item(n: u64) -> ResultItem {
	ResultItem {
		identifier: format!("/works/OL{n}W"),
		title: format!("Book {n}"),
		authors: vec![format!("Author {n}")],
		first_publish_year: Some(1900 + (n % 100) as i32),
	}
}

#[async_trait]
impl BookSource for FakeSource {
	async fn search(&self, filters: &SearchFilters, page: u32) -> Result<SearchPage, OpenLibraryError> {
		self.record(SourceCall::Search {
			query: filters.query.clone(),
			author: filters.author.clone(),
			page,
		});
		if let Some(err) = self.failure() {
			return Err(err);
		}

		let items = if self.serve_items {
			let start = offset_for_page(page);
			let end = (start + u64::from(RESULTS_PER_PAGE)).min(self.total_found);
			(start..end).map(item).collect()
		} else {
			Vec::new()
		};

		Ok(SearchPage {
			items,
			total_found: self.total_found,
			page_number: page,
		})
	}

	async fn fetch_detail(&self, identifier: &str) -> Result<BookDetail, OpenLibraryError> {
		self.record(SourceCall::Detail(identifier.to_string()));
		if let Some(err) = self.failure() {
			return Err(err);
		}
		self.detail.clone().ok_or(OpenLibraryError::RequestFailed {
			status: 404,
			message: "not found".to_string(),
		})
	}

	async fn fetch_recommended(&self, limit: u32) -> Result<Vec<ResultItem>, OpenLibraryError> {
		self.record(SourceCall::Recommended(limit));
		if let Some(err) = self.failure() {
			return Err(err);
		}
		match self.recommended {
			Some(count) => Ok((0..count as u64).map(item).collect()),
			None => Err(OpenLibraryError::RequestFailed {
				status: 404,
				message: "not found".to_string(),
			}),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
	Loading(bool),
	ClearError,
	Error(String),
	Results(ResultsView),
	Pagination(Option<PageLinks>),
	Detail(DetailView),
	Recommendations(Vec<RecommendationCard>),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
	pub events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
	pub fn loading(&self) -> Option<bool> {
		self.events.iter().rev().find_map(|e| match e {
			PresenterEvent::Loading(v) => Some(*v),
			_ => None,
		})
	}

	pub fn error(&self) -> Option<&str> {
		self.events.iter().rev().find_map(|e| match e {
			PresenterEvent::Error(msg) => Some(msg.as_str()),
			_ => None,
		})
	}

	pub fn results(&self) -> Option<&ResultsView> {
		self.events.iter().rev().find_map(|e| match e {
			PresenterEvent::Results(view) => Some(view),
			_ => None,
		})
	}

	/// Outer `None`: never presented. Inner `None`: controls cleared.
	pub fn pagination(&self) -> Option<Option<&PageLinks>> {
		self.events.iter().rev().find_map(|e| match e {
			PresenterEvent::Pagination(links) => Some(links.as_ref()),
			_ => None,
		})
	}

	pub fn detail(&self) -> Option<&DetailView> {
		self.events.iter().rev().find_map(|e| match e {
			PresenterEvent::Detail(view) => Some(view),
			_ => None,
		})
	}

	pub fn recommendations(&self) -> Option<&[RecommendationCard]> {
		self.events.iter().rev().find_map(|e| match e {
			PresenterEvent::Recommendations(cards) => Some(cards.as_slice()),
			_ => None,
		})
	}
}

impl Presenter for RecordingPresenter {
	fn set_loading(&mut self, loading: bool) {
		self.events.push(PresenterEvent::Loading(loading));
	}

	fn clear_error(&mut self) {
		self.events.push(PresenterEvent::ClearError);
	}

	fn present_error(&mut self, message: &str) {
		self.events.push(PresenterEvent::Error(message.to_string()));
	}

	fn present_results(&mut self, view: &ResultsView) {
		self.events.push(PresenterEvent::Results(view.clone()));
	}

	fn present_pagination(&mut self, links: Option<&PageLinks>) {
		self.events.push(PresenterEvent::Pagination(links.cloned()));
	}

	fn present_detail(&mut self, detail: &DetailView) {
		self.events.push(PresenterEvent::Detail(detail.clone()));
	}

	fn present_recommendations(&mut self, cards: &[RecommendationCard]) {
		self.events
			.push(PresenterEvent::Recommendations(cards.to_vec()));
	}
}
