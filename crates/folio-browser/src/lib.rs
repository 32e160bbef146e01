// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search session logic for Folio, independent of any display surface.
//!
//! - [`pagination`] derives visible page links and threads the page counter
//!   through navigation actions as an explicit value.
//! - [`render`], [`detail`] and [`recommendations`] shape API records into
//!   display records.
//! - [`controller::BrowserController`] ties a [`source::BookSource`] to a
//!   [`presenter::Presenter`].

pub mod controller;
pub mod detail;
pub mod form;
pub mod pagination;
pub mod presenter;
pub mod recommendations;
pub mod render;
pub mod source;

#[cfg(test)]
mod testing;

pub use controller::{
	plan_navigation, plan_submit, BrowserController, DETAIL_ERROR_MESSAGE, SEARCH_ERROR_MESSAGE,
};
pub use detail::{DetailView, DismissTrigger, ModalState};
pub use form::SearchForm;
pub use pagination::{compute_page_links, PageAction, PageLinks, PaginationState};
pub use presenter::Presenter;
pub use recommendations::RecommendationCard;
pub use render::{DisplayRecord, ResultRow, ResultsView, UNKNOWN};
pub use source::BookSource;
