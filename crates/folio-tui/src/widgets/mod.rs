// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod input;
pub mod spinner;

pub use input::InputField;
pub use spinner::{Spinner, SpinnerState};

use unicode_width::UnicodeWidthStr;

/// Shortens `s` to `max_width` columns, marking the cut with an ellipsis.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
	if UnicodeWidthStr::width(s) <= max_width {
		return s.to_string();
	}
	if max_width == 0 {
		return String::new();
	}

	let mut result = String::new();
	let mut current_width = 0;
	let target_width = max_width - 1;

	for c in s.chars() {
		let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
		if current_width + char_width > target_width {
			break;
		}
		result.push(c);
		current_width += char_width;
	}
	result.push('…');
	result
}
