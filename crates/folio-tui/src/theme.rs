// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use folio_config::DarkMode;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyles {
	pub normal: Style,
	pub bold: Style,
	pub muted: Style,
	pub error: Style,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyles {
	pub normal: Style,
	pub focused: Style,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub background: Style,
	pub text: TextStyles,
	pub borders: BorderStyles,
	pub selected: Style,
	pub active_page: Style,
}

impl Theme {
	pub fn dark() -> Self {
		Self {
			background: Style::default().bg(Color::Black).fg(Color::Gray),
			text: TextStyles {
				normal: Style::default().fg(Color::Gray),
				bold: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
				muted: Style::default().fg(Color::DarkGray),
				error: Style::default().fg(Color::LightRed),
			},
			borders: BorderStyles {
				normal: Style::default().fg(Color::DarkGray),
				focused: Style::default().fg(Color::Cyan),
			},
			selected: Style::default().add_modifier(Modifier::REVERSED),
			active_page: Style::default()
				.fg(Color::Black)
				.bg(Color::Cyan)
				.add_modifier(Modifier::BOLD),
		}
	}

	pub fn light() -> Self {
		Self {
			background: Style::default().bg(Color::White).fg(Color::Black),
			text: TextStyles {
				normal: Style::default().fg(Color::Black),
				bold: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
				muted: Style::default().fg(Color::DarkGray),
				error: Style::default().fg(Color::Red),
			},
			borders: BorderStyles {
				normal: Style::default().fg(Color::Gray),
				focused: Style::default().fg(Color::Blue),
			},
			selected: Style::default().add_modifier(Modifier::REVERSED),
			active_page: Style::default()
				.fg(Color::White)
				.bg(Color::Blue)
				.add_modifier(Modifier::BOLD),
		}
	}

	pub fn for_mode(mode: DarkMode) -> Self {
		if mode.is_enabled() {
			Self::dark()
		} else {
			Self::light()
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}
