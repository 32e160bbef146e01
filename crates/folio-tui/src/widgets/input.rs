// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Single-line editable text with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
	content: String,
	cursor: usize,
}

impl InputField {
	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn insert_char(&mut self, c: char) {
		let idx = self.byte_index();
		self.content.insert(idx, c);
		self.cursor += 1;
	}

	pub fn delete_char(&mut self) {
		if self.cursor == 0 {
			return;
		}
		self.cursor -= 1;
		let idx = self.byte_index();
		self.content.remove(idx);
	}

	pub fn move_cursor_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_cursor_right(&mut self) {
		self.cursor = (self.cursor + 1).min(self.content.chars().count());
	}

	pub fn move_cursor_start(&mut self) {
		self.cursor = 0;
	}

	pub fn move_cursor_end(&mut self) {
		self.cursor = self.content.chars().count();
	}

	fn byte_index(&self) -> usize {
		self.content
			.char_indices()
			.nth(self.cursor)
			.map(|(i, _)| i)
			.unwrap_or(self.content.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	impl InputField {
		fn with_content(content: &str) -> Self {
			Self {
				content: content.to_string(),
				cursor: content.chars().count(),
			}
		}
	}

	#[test]
	fn editing_in_the_middle() {
		let mut field = InputField::with_content("dne");
		field.move_cursor_left();
		field.move_cursor_left();
		field.insert_char('u');
		assert_eq!(field.content(), "dune");
		assert_eq!(field.cursor(), 2);
	}

	#[test]
	fn backspace_handles_multibyte() {
		let mut field = InputField::with_content("café");
		field.delete_char();
		assert_eq!(field.content(), "caf");
		field.move_cursor_start();
		field.delete_char();
		assert_eq!(field.content(), "caf");
	}

	#[test]
	fn cursor_is_bounded() {
		let mut field = InputField::with_content("ab");
		field.move_cursor_right();
		assert_eq!(field.cursor(), 2);
		field.move_cursor_start();
		field.move_cursor_left();
		assert_eq!(field.cursor(), 0);
	}
}
