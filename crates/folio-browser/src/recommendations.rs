// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use folio_openlibrary::ResultItem;
use serde::{Deserialize, Serialize};

use crate::render::{join_or_unknown, year_or_unknown};

/// One tile of the startup recommendations grid. Not selectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCard {
	pub title: String,
	pub authors: String,
	pub first_published: String,
}

impl From<&ResultItem> for RecommendationCard {
	fn from(item: &ResultItem) -> Self {
		Self {
			title: item.title.clone(),
			authors: join_or_unknown(&item.authors),
			first_published: year_or_unknown(item.first_publish_year),
		}
	}
}

pub fn cards(items: &[ResultItem]) -> Vec<RecommendationCard> {
	items.iter().map(RecommendationCard::from).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render::UNKNOWN;

	#[test]
	fn cards_keep_order_and_placeholders() {
		let items = vec![
			ResultItem {
				identifier: "/works/A".to_string(),
				title: "A".to_string(),
				authors: vec![],
				first_publish_year: Some(1999),
			},
			ResultItem {
				identifier: "/works/B".to_string(),
				title: "B".to_string(),
				authors: vec!["Someone".to_string()],
				first_publish_year: None,
			},
		];
		let cards = cards(&items);
		assert_eq!(cards[0].title, "A");
		assert_eq!(cards[0].authors, UNKNOWN);
		assert_eq!(cards[1].first_published, UNKNOWN);
	}
}
