// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use folio_tui::App;
use ratatui::{backend::TestBackend, Terminal};

pub struct TestHarness {
	terminal: Terminal<TestBackend>,
}

impl TestHarness {
	pub fn new(width: u16, height: u16) -> Self {
		let backend = TestBackend::new(width, height);
		let terminal = Terminal::new(backend).expect("failed to create terminal");
		Self { terminal }
	}

	pub fn render(&mut self, app: &mut App) {
		self.terminal
			.draw(|frame| app.render(frame))
			.expect("failed to draw");
	}

	pub fn buffer_lines(&self) -> Vec<String> {
		let buffer = self.terminal.backend().buffer();
		let area = buffer.area;
		let mut lines = Vec::new();

		for y in area.y..area.y + area.height {
			let mut line = String::new();
			for x in area.x..area.x + area.width {
				line.push_str(buffer[(x, y)].symbol());
			}
			lines.push(line);
		}

		lines
	}

	pub fn find_text(&self, needle: &str) -> Option<(usize, usize)> {
		self.buffer_lines()
			.iter()
			.enumerate()
			.find_map(|(row, line)| line.find(needle).map(|col| (row, col)))
	}
}
