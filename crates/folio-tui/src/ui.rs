// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Frame layout: header, search form, error line, results beside
//! recommendations, pagination bar, status bar and the detail overlay.

use folio_browser::{DetailView, PageAction, ResultsView};
use ratatui::{
	layout::{Constraint, Direction, Layout, Position, Rect},
	style::Modifier,
	text::{Line, Span},
	widgets::{Block, Borders, Clear, Paragraph, Wrap},
	Frame,
};

use crate::app::{App, Focus};
use crate::theme::Theme;
use crate::widgets::{truncate_with_ellipsis, Spinner};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 4;
const CLOSE_GLYPH: &str = "[×]";

pub fn render(app: &mut App, frame: &mut Frame) {
	let area = frame.area();
	let theme = app.theme;
	frame.render_widget(Block::default().style(theme.background), area);

	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Min(4),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.split(area);

	render_header(app, frame, rows[0]);
	render_form(app, frame, rows[1]);
	frame.render_widget(
		Paragraph::new(Span::styled(app.error.as_str(), theme.text.error)),
		rows[2],
	);

	let body = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
		.split(rows[3]);
	render_results(app, frame, body[0]);
	render_recommendations(app, frame, body[1]);

	render_pagination(app, frame, rows[4]);
	render_status(&theme, frame, rows[5]);

	match app.modal.view().cloned() {
		Some(view) => render_modal(app, frame, &view),
		None => {
			app.modal_bounds = None;
			app.close_control = None;
		}
	}
}

fn render_header(app: &mut App, frame: &mut Frame, area: Rect) {
	let theme = app.theme;
	let mode = if app.dark_mode.is_enabled() { "dark" } else { "light" };
	let title = Line::from(vec![
		Span::styled("Folio", theme.text.bold),
		Span::styled(format!("  {mode} mode"), theme.text.muted),
	]);
	frame.render_widget(Paragraph::new(title), area);

	if app.is_loading() {
		let width = 12.min(area.width);
		let spinner_area = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
		frame.render_stateful_widget(
			Spinner::new().label("Loading").text_style(theme.text.muted),
			spinner_area,
			&mut app.spinner,
		);
	}
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
	let theme = &app.theme;
	let cells = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Percentage(40),
			Constraint::Percentage(20),
			Constraint::Percentage(20),
			Constraint::Percentage(20),
		])
		.split(area);

	let labels = [Focus::Query, Focus::Author, Focus::Subject, Focus::Language];
	for (idx, focus) in labels.into_iter().enumerate() {
		let focused = app.focus == focus;
		let block = Block::default()
			.borders(Borders::ALL)
			.title(focus.label())
			.border_style(if focused {
				theme.borders.focused
			} else {
				theme.borders.normal
			});
		let inner = block.inner(cells[idx]);
		let field = &app.fields[idx];
		frame.render_widget(
			Paragraph::new(Span::styled(field.content(), theme.text.normal)).block(block),
			cells[idx],
		);

		if focused && !app.modal.is_open() {
			let x = inner.x + (field.cursor() as u16).min(inner.width.saturating_sub(1));
			frame.set_cursor_position(Position::new(x, inner.y));
		}
	}
}

fn render_results(app: &App, frame: &mut Frame, area: Rect) {
	let theme = &app.theme;
	let title = match &app.results {
		Some(ResultsView::Hits { page_number, .. }) => format!("Results · page {page_number}"),
		_ => "Results".to_string(),
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.title(title)
		.border_style(if app.focus == Focus::Results {
			theme.borders.focused
		} else {
			theme.borders.normal
		});
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let rows = match &app.results {
		None => {
			let hint = Paragraph::new(Span::styled(
				"Type a query and press Enter to search.",
				theme.text.muted,
			));
			frame.render_widget(hint, inner);
			return;
		}
		Some(ResultsView::NoResults) => {
			frame.render_widget(
				Paragraph::new(Span::styled("No results found.", theme.text.normal)),
				inner,
			);
			return;
		}
		Some(view) => view.rows(),
	};

	// Each hit takes a title line and a byline.
	let visible = usize::from((inner.height / 2).max(1));
	let offset = app.selected.saturating_sub(visible - 1);
	let width = usize::from(inner.width);

	let mut lines = Vec::with_capacity(visible * 2);
	for (idx, row) in rows.iter().enumerate().skip(offset).take(visible) {
		let selected = idx == app.selected && app.focus == Focus::Results;
		let title_style = if selected {
			theme.text.bold.patch(theme.selected)
		} else {
			theme.text.bold
		};
		lines.push(Line::from(Span::styled(
			truncate_with_ellipsis(&row.record.title, width),
			title_style,
		)));
		let byline = format!(
			"  Author: {}  First Published: {}",
			row.record.authors, row.record.first_published
		);
		lines.push(Line::from(Span::styled(
			truncate_with_ellipsis(&byline, width),
			theme.text.muted,
		)));
	}
	frame.render_widget(Paragraph::new(lines), inner);
}

fn render_recommendations(app: &App, frame: &mut Frame, area: Rect) {
	let theme = &app.theme;
	let block = Block::default()
		.borders(Borders::ALL)
		.title("Recommended")
		.border_style(theme.borders.normal);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let columns = (inner.width / CARD_WIDTH).max(1);
	let card_width = inner.width / columns;
	let text_width = usize::from(card_width.saturating_sub(1));

	for (idx, card) in app.recommendations.iter().enumerate() {
		let idx = idx as u16;
		let col = idx % columns;
		let row = idx / columns;
		let y = inner.y + row * CARD_HEIGHT;
		if y + CARD_HEIGHT - 1 > inner.bottom() {
			break;
		}
		let card_area = Rect::new(inner.x + col * card_width, y, card_width, CARD_HEIGHT - 1);
		let lines = vec![
			Line::from(Span::styled(
				truncate_with_ellipsis(&card.title, text_width),
				theme.text.bold,
			)),
			Line::from(Span::styled(
				truncate_with_ellipsis(&format!("Author: {}", card.authors), text_width),
				theme.text.normal,
			)),
			Line::from(Span::styled(
				truncate_with_ellipsis(
					&format!("First Published: {}", card.first_published),
					text_width,
				),
				theme.text.muted,
			)),
		];
		frame.render_widget(Paragraph::new(lines), card_area);
	}
}

fn render_pagination(app: &App, frame: &mut Frame, area: Rect) {
	let theme = &app.theme;
	let Some(links) = &app.pagination else {
		frame.render_widget(Paragraph::new(""), area);
		return;
	};

	let focused = app.focus == Focus::Pagination;
	let mut spans = Vec::new();
	for (idx, target) in app.page_targets().into_iter().enumerate() {
		let (label, mut style) = match target {
			PageAction::Prev => ("Prev".to_string(), theme.text.normal),
			PageAction::Next => ("Next".to_string(), theme.text.normal),
			PageAction::Goto(n) if links.is_active(n) => (n.to_string(), theme.active_page),
			PageAction::Goto(n) => (n.to_string(), theme.text.normal),
		};
		if focused && idx == app.pagination_cursor {
			style = style.add_modifier(Modifier::UNDERLINED);
		}
		spans.push(Span::styled(format!(" {label} "), style));
		spans.push(Span::raw(" "));
	}
	spans.push(Span::styled(
		format!("of {}", links.total_pages),
		theme.text.muted,
	));
	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(theme: &Theme, frame: &mut Frame, area: Rect) {
	let help = "Enter search/open  Tab focus  Ctrl+N/P page  Ctrl+D theme  Esc close  Ctrl+C quit";
	frame.render_widget(
		Paragraph::new(Span::styled(help, theme.text.muted)),
		area,
	);
}

fn render_modal(app: &mut App, frame: &mut Frame, view: &DetailView) {
	let theme = app.theme;
	let area = centered_rect(70, 70, frame.area());
	frame.render_widget(Clear, area);

	let block = Block::default()
		.borders(Borders::ALL)
		.title(format!(" {} ", view.title))
		.border_style(theme.borders.focused)
		.style(theme.background);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let glyph_width = CLOSE_GLYPH.chars().count() as u16;
	let close = Rect::new(
		area.right().saturating_sub(glyph_width + 1),
		area.y,
		glyph_width.min(area.width),
		1,
	);
	frame.render_widget(
		Paragraph::new(Span::styled(CLOSE_GLYPH, theme.text.bold)),
		close,
	);

	let mut lines: Vec<Line> = view
		.fields()
		.into_iter()
		.map(|(label, value)| {
			Line::from(vec![
				Span::styled(format!("{label}: "), theme.text.bold),
				Span::styled(value.to_string(), theme.text.normal),
			])
		})
		.collect();
	lines.push(Line::default());
	lines.push(Line::from(Span::styled(
		"Esc or click outside to close",
		theme.text.muted,
	)));
	frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

	app.modal_bounds = Some(area);
	app.close_control = Some(close);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
	let vertical = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Percentage((100 - percent_y) / 2),
			Constraint::Percentage(percent_y),
			Constraint::Percentage((100 - percent_y) / 2),
		])
		.split(r);
	Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Percentage((100 - percent_x) / 2),
			Constraint::Percentage(percent_x),
			Constraint::Percentage((100 - percent_x) / 2),
		])
		.split(vertical[1])[1]
}
