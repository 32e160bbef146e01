// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Open Library client.

use thiserror::Error;

/// Errors that can occur when talking to Open Library.
#[derive(Debug, Error)]
pub enum OpenLibraryError {
	/// The endpoint answered with a non-success status.
	#[error("Open Library request failed: {status} - {message}")]
	RequestFailed { status: u16, message: String },

	/// Transport-level failure (DNS, refused connection, timeout, offline).
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Body could not be decoded into the expected shape.
	#[error("Invalid response from Open Library: {0}")]
	InvalidResponse(String),

	/// Any failure while fetching a single work for the detail view.
	#[error("Failed to fetch details for {identifier}: {source}")]
	DetailFetchFailed {
		identifier: String,
		#[source]
		source: Box<OpenLibraryError>,
	},
}

impl OpenLibraryError {
	/// Returns true when the failure happened below HTTP (no status received).
	pub fn is_network(&self) -> bool {
		match self {
			OpenLibraryError::Network(_) => true,
			OpenLibraryError::DetailFetchFailed { source, .. } => source.is_network(),
			_ => false,
		}
	}

	/// The HTTP status that caused the failure, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			OpenLibraryError::RequestFailed { status, .. } => Some(*status),
			OpenLibraryError::DetailFetchFailed { source, .. } => source.status(),
			_ => None,
		}
	}

	pub(crate) fn detail(identifier: &str, source: OpenLibraryError) -> Self {
		OpenLibraryError::DetailFetchFailed {
			identifier: identifier.to_string(),
			source: Box::new(source),
		}
	}
}

/// The search form was submitted without a usable query.
///
/// No request is issued and nothing is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search query is empty")]
pub struct ValidationRejected;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detail_failure_exposes_inner_status() {
		let err = OpenLibraryError::detail(
			"/works/OL1W",
			OpenLibraryError::RequestFailed {
				status: 404,
				message: "not found".to_string(),
			},
		);
		assert_eq!(err.status(), Some(404));
		assert!(!err.is_network());
		assert!(err.to_string().contains("/works/OL1W"));
	}

	#[test]
	fn invalid_response_has_no_status() {
		let err = OpenLibraryError::InvalidResponse("bad json".to_string());
		assert_eq!(err.status(), None);
		assert!(!err.is_network());
	}
}
