// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::Style,
	text::{Line, Span},
	widgets::{StatefulWidget, Widget},
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Default, Clone)]
pub struct SpinnerState {
	frame: usize,
}

impl SpinnerState {
	pub fn tick(&mut self) {
		self.frame = (self.frame + 1) % FRAMES.len();
	}

	pub fn frame(&self) -> usize {
		self.frame
	}
}

#[derive(Debug, Clone, Default)]
pub struct Spinner {
	label: Option<String>,
	text_style: Style,
}

impl Spinner {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn text_style(mut self, style: Style) -> Self {
		self.text_style = style;
		self
	}
}

impl StatefulWidget for Spinner {
	type State = SpinnerState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		let mut spans = vec![Span::styled(FRAMES[state.frame], self.text_style)];
		if let Some(label) = self.label {
			spans.push(Span::raw(" "));
			spans.push(Span::styled(label, self.text_style));
		}
		Line::from(spans).render(area, buf);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tick_wraps_around() {
		let mut state = SpinnerState::default();
		for _ in 0..FRAMES.len() {
			state.tick();
		}
		assert_eq!(state.frame(), 0);
	}

	#[test]
	fn renders_frame_and_label() {
		let area = Rect::new(0, 0, 20, 1);
		let mut buf = Buffer::empty(area);
		let mut state = SpinnerState::default();
		Spinner::new().label("Loading...").render(area, &mut buf, &mut state);

		let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
		assert!(line.starts_with(FRAMES[0]));
		assert!(line.contains("Loading..."));
	}
}
