// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio_browser::{
	plan_navigation, plan_submit, DismissTrigger, ModalState, PageAction, PageLinks,
	PaginationState, RecommendationCard, ResultsView, SearchForm,
};
use folio_config::DarkMode;
use folio_openlibrary::SearchFilters;
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use tracing::debug;

use crate::presenter::ViewUpdate;
use crate::theme::Theme;
use crate::ui;
use crate::widgets::{InputField, SpinnerState};

/// Side effects requested by the UI; executed by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Fetch { filters: SearchFilters, page: u32 },
	OpenDetail(String),
	SaveDarkMode(DarkMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Query,
	Author,
	Subject,
	Language,
	Results,
	Pagination,
}

impl Focus {
	const ORDER: [Focus; 6] = [
		Focus::Query,
		Focus::Author,
		Focus::Subject,
		Focus::Language,
		Focus::Results,
		Focus::Pagination,
	];

	fn position(self) -> usize {
		Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
	}

	pub fn next(self) -> Self {
		Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
	}

	pub fn prev(self) -> Self {
		Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
	}

	/// Index into the form fields, if this focus is one of them.
	pub fn field_index(self) -> Option<usize> {
		match self {
			Focus::Query => Some(0),
			Focus::Author => Some(1),
			Focus::Subject => Some(2),
			Focus::Language => Some(3),
			Focus::Results | Focus::Pagination => None,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Focus::Query => "Search",
			Focus::Author => "Author",
			Focus::Subject => "Subject",
			Focus::Language => "Language",
			Focus::Results => "Results",
			Focus::Pagination => "Pages",
		}
	}
}

pub struct App {
	pub fields: [InputField; 4],
	pub focus: Focus,
	pub page_state: PaginationState,
	/// `None` until the first search completes.
	pub results: Option<ResultsView>,
	pub selected: usize,
	pub pagination: Option<PageLinks>,
	pub pagination_cursor: usize,
	pub modal: ModalState,
	pub error: String,
	/// Fetches that have shown the loading indicator and not yet hidden it.
	in_flight: usize,
	pub spinner: SpinnerState,
	pub recommendations: Vec<RecommendationCard>,
	pub dark_mode: DarkMode,
	pub theme: Theme,
	pub(crate) modal_bounds: Option<Rect>,
	pub(crate) close_control: Option<Rect>,
	should_quit: bool,
}

impl App {
	pub fn new(dark_mode: DarkMode) -> Self {
		Self {
			fields: Default::default(),
			focus: Focus::Query,
			page_state: PaginationState::first(),
			results: None,
			selected: 0,
			pagination: None,
			pagination_cursor: 0,
			modal: ModalState::Closed,
			error: String::new(),
			in_flight: 0,
			spinner: SpinnerState::default(),
			recommendations: Vec::new(),
			dark_mode,
			theme: Theme::for_mode(dark_mode),
			modal_bounds: None,
			close_control: None,
			should_quit: false,
		}
	}

	/// Snapshot of the form as it reads right now.
	pub fn form(&self) -> SearchForm {
		SearchForm::new(self.fields[0].content())
			.author(self.fields[1].content())
			.subject(self.fields[2].content())
			.language(self.fields[3].content())
	}

	/// Activation targets of the pagination bar, left to right.
	pub fn page_targets(&self) -> Vec<PageAction> {
		let Some(links) = &self.pagination else {
			return Vec::new();
		};
		let mut targets = Vec::with_capacity(links.page_numbers.len() + 2);
		if links.show_prev {
			targets.push(PageAction::Prev);
		}
		targets.extend(links.page_numbers.iter().copied().map(PageAction::Goto));
		if links.show_next {
			targets.push(PageAction::Next);
		}
		targets
	}

	pub fn handle_key_event(&mut self, key: KeyEvent) -> Vec<Command> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

		if ctrl && key.code == KeyCode::Char('c') {
			self.should_quit = true;
			return Vec::new();
		}

		if self.modal.is_open() {
			if key.code == KeyCode::Esc {
				self.modal.dismiss(DismissTrigger::CloseControl);
			}
			return Vec::new();
		}

		if ctrl {
			return match key.code {
				KeyCode::Char('d') => self.toggle_dark_mode(),
				KeyCode::Char('n') if self.pagination.as_ref().is_some_and(|l| l.show_next) => {
					self.navigate(PageAction::Next)
				}
				KeyCode::Char('p') if self.pagination.as_ref().is_some_and(|l| l.show_prev) => {
					self.navigate(PageAction::Prev)
				}
				_ => Vec::new(),
			};
		}

		match key.code {
			KeyCode::Tab => {
				self.focus = self.focus.next();
				return Vec::new();
			}
			KeyCode::BackTab => {
				self.focus = self.focus.prev();
				return Vec::new();
			}
			_ => {}
		}

		if let Some(idx) = self.focus.field_index() {
			return self.handle_field_key(idx, key);
		}

		match self.focus {
			Focus::Results => self.handle_results_key(key),
			Focus::Pagination => self.handle_pagination_key(key),
			_ => Vec::new(),
		}
	}

	fn handle_field_key(&mut self, idx: usize, key: KeyEvent) -> Vec<Command> {
		if key.code == KeyCode::Enter {
			return self.submit();
		}
		let field = &mut self.fields[idx];
		match key.code {
			KeyCode::Char(c) => field.insert_char(c),
			KeyCode::Backspace => field.delete_char(),
			KeyCode::Left => field.move_cursor_left(),
			KeyCode::Right => field.move_cursor_right(),
			KeyCode::Home => field.move_cursor_start(),
			KeyCode::End => field.move_cursor_end(),
			_ => {}
		}
		Vec::new()
	}

	fn handle_results_key(&mut self, key: KeyEvent) -> Vec<Command> {
		let total = self.results.as_ref().map_or(0, ResultsView::len);
		match key.code {
			KeyCode::Up => self.selected = self.selected.saturating_sub(1),
			KeyCode::Down if total > 0 => self.selected = (self.selected + 1).min(total - 1),
			KeyCode::Enter => return self.activate_selected(),
			KeyCode::Char('q') => self.should_quit = true,
			_ => {}
		}
		Vec::new()
	}

	fn handle_pagination_key(&mut self, key: KeyEvent) -> Vec<Command> {
		let targets = self.page_targets();
		match key.code {
			KeyCode::Left => self.pagination_cursor = self.pagination_cursor.saturating_sub(1),
			KeyCode::Right if !targets.is_empty() => {
				self.pagination_cursor = (self.pagination_cursor + 1).min(targets.len() - 1)
			}
			KeyCode::Enter => {
				if let Some(action) = targets.get(self.pagination_cursor).copied() {
					return self.navigate(action);
				}
			}
			KeyCode::Char('q') => self.should_quit = true,
			_ => {}
		}
		Vec::new()
	}

	fn submit(&mut self) -> Vec<Command> {
		match plan_submit(&self.form()) {
			Ok((filters, state)) => {
				self.page_state = state;
				vec![Command::Fetch {
					filters,
					page: state.current_page(),
				}]
			}
			Err(_) => Vec::new(),
		}
	}

	fn navigate(&mut self, action: PageAction) -> Vec<Command> {
		match plan_navigation(&self.form(), self.page_state, action) {
			Ok((filters, next)) => {
				self.page_state = next;
				vec![Command::Fetch {
					filters,
					page: next.current_page(),
				}]
			}
			Err(_) => Vec::new(),
		}
	}

	fn activate_selected(&self) -> Vec<Command> {
		self.results
			.as_ref()
			.and_then(|view| view.identifier_at(self.selected))
			.map(|id| vec![Command::OpenDetail(id.to_string())])
			.unwrap_or_default()
	}

	fn toggle_dark_mode(&mut self) -> Vec<Command> {
		self.dark_mode = self.dark_mode.toggled();
		self.theme = Theme::for_mode(self.dark_mode);
		debug!(mode = self.dark_mode.as_str(), "toggled dark mode");
		vec![Command::SaveDarkMode(self.dark_mode)]
	}

	pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Vec<Command> {
		if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
			return Vec::new();
		}
		let pos = Position::new(mouse.column, mouse.row);

		if self.modal.is_open() {
			let trigger = if self.close_control.is_some_and(|r| r.contains(pos)) {
				DismissTrigger::CloseControl
			} else if self.modal_bounds.is_some_and(|r| r.contains(pos)) {
				DismissTrigger::InsideContent
			} else {
				DismissTrigger::OutsideContent
			};
			self.modal.dismiss(trigger);
		}
		Vec::new()
	}

	pub fn apply(&mut self, update: ViewUpdate) {
		match update {
			ViewUpdate::Loading(true) => self.in_flight += 1,
			ViewUpdate::Loading(false) => self.in_flight = self.in_flight.saturating_sub(1),
			ViewUpdate::ClearError => self.error.clear(),
			ViewUpdate::Error(message) => self.error = message,
			ViewUpdate::Results(view) => {
				self.results = Some(view);
				self.selected = 0;
			}
			ViewUpdate::Pagination(links) => {
				self.pagination = links;
				let active = self.pagination.as_ref().map(|l| l.active);
				self.pagination_cursor = self
					.page_targets()
					.iter()
					.position(|t| Some(*t) == active.map(PageAction::Goto))
					.unwrap_or(0);
			}
			ViewUpdate::Detail(view) => self.modal.open(view),
			ViewUpdate::Recommendations(cards) => self.recommendations = cards,
		}
	}

	pub fn is_loading(&self) -> bool {
		self.in_flight > 0
	}

	pub fn tick(&mut self) {
		if self.is_loading() {
			self.spinner.tick();
		}
	}

	pub fn render(&mut self, frame: &mut Frame) {
		ui::render(self, frame);
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use folio_browser::{DetailView, DisplayRecord, ResultRow};

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(c: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
	}

	fn type_text(app: &mut App, text: &str) {
		for c in text.chars() {
			app.handle_key_event(key(KeyCode::Char(c)));
		}
	}

	fn links(active: u32, total_pages: u32) -> PageLinks {
		folio_browser::compute_page_links(u64::from(total_pages) * 10, active, 10).unwrap()
	}

	fn hits(ids: &[&str]) -> ResultsView {
		ResultsView::Hits {
			page_number: 1,
			rows: ids
				.iter()
				.map(|id| ResultRow {
					identifier: id.to_string(),
					record: DisplayRecord {
						title: id.to_string(),
						authors: "A".to_string(),
						first_published: "2000".to_string(),
					},
				})
				.collect(),
		}
	}

	fn detail() -> DetailView {
		DetailView {
			title: "T".to_string(),
			authors: "A".to_string(),
			first_published: "1".to_string(),
			subjects: "S".to_string(),
			description: "D".to_string(),
			page_count: "2".to_string(),
			publishers: "P".to_string(),
		}
	}

	#[test]
	fn enter_on_empty_query_does_nothing() {
		let mut app = App::new(DarkMode::Disabled);
		type_text(&mut app, "   ");
		assert!(app.handle_key_event(key(KeyCode::Enter)).is_empty());
	}

	#[test]
	fn submit_resets_page_and_emits_fetch() {
		let mut app = App::new(DarkMode::Disabled);
		app.page_state = PaginationState::first().apply(PageAction::Goto(6));
		type_text(&mut app, "dune");

		let commands = app.handle_key_event(key(KeyCode::Enter));

		assert_eq!(app.page_state.current_page(), 1);
		match commands.as_slice() {
			[Command::Fetch { filters, page }] => {
				assert_eq!(filters.query, "dune");
				assert_eq!(*page, 1);
			}
			other => panic!("unexpected commands: {other:?}"),
		}
	}

	#[test]
	fn next_page_reads_filters_typed_after_search() {
		let mut app = App::new(DarkMode::Disabled);
		type_text(&mut app, "dune");
		app.handle_key_event(key(KeyCode::Enter));
		app.apply(ViewUpdate::Pagination(Some(links(1, 10))));

		app.handle_key_event(key(KeyCode::Tab));
		type_text(&mut app, "Herbert");

		let commands = app.handle_key_event(ctrl('n'));
		assert_eq!(app.page_state.current_page(), 2);
		match commands.as_slice() {
			[Command::Fetch { filters, page }] => {
				assert_eq!(filters.author.as_deref(), Some("Herbert"));
				assert_eq!(*page, 2);
			}
			other => panic!("unexpected commands: {other:?}"),
		}
	}

	#[test]
	fn prev_is_unavailable_on_first_page() {
		let mut app = App::new(DarkMode::Disabled);
		type_text(&mut app, "dune");
		app.apply(ViewUpdate::Pagination(Some(links(1, 10))));
		assert!(app.handle_key_event(ctrl('p')).is_empty());
		assert_eq!(app.page_state.current_page(), 1);
	}

	#[test]
	fn pagination_targets_follow_links() {
		let mut app = App::new(DarkMode::Disabled);
		app.apply(ViewUpdate::Pagination(Some(links(3, 10))));
		assert_eq!(
			app.page_targets(),
			vec![
				PageAction::Prev,
				PageAction::Goto(1),
				PageAction::Goto(2),
				PageAction::Goto(3),
				PageAction::Goto(4),
				PageAction::Goto(5),
				PageAction::Next,
			]
		);
		// Cursor starts on the active page.
		assert_eq!(app.pagination_cursor, 3);

		app.apply(ViewUpdate::Pagination(None));
		assert!(app.page_targets().is_empty());
	}

	#[test]
	fn clicking_a_page_link_jumps_directly() {
		let mut app = App::new(DarkMode::Disabled);
		type_text(&mut app, "dune");
		app.page_state = PaginationState::first().apply(PageAction::Goto(3));
		app.apply(ViewUpdate::Pagination(Some(links(3, 10))));
		app.focus = Focus::Pagination;

		app.handle_key_event(key(KeyCode::Right));
		app.handle_key_event(key(KeyCode::Right));
		let commands = app.handle_key_event(key(KeyCode::Enter));

		assert_eq!(app.page_state.current_page(), 5);
		assert!(matches!(commands.as_slice(), [Command::Fetch { page: 5, .. }]));
	}

	#[test]
	fn enter_on_result_opens_its_detail() {
		let mut app = App::new(DarkMode::Disabled);
		app.apply(ViewUpdate::Results(hits(&["/works/A", "/works/B"])));
		app.focus = Focus::Results;

		app.handle_key_event(key(KeyCode::Down));
		let commands = app.handle_key_event(key(KeyCode::Enter));
		assert_eq!(commands, vec![Command::OpenDetail("/works/B".to_string())]);

		app.handle_key_event(key(KeyCode::Down));
		assert_eq!(app.selected, 1);
	}

	#[test]
	fn new_results_reset_selection() {
		let mut app = App::new(DarkMode::Disabled);
		app.apply(ViewUpdate::Results(hits(&["/works/A", "/works/B"])));
		app.selected = 1;
		app.apply(ViewUpdate::Results(ResultsView::NoResults));
		assert_eq!(app.selected, 0);
		app.focus = Focus::Results;
		assert!(app.handle_key_event(key(KeyCode::Enter)).is_empty());
	}

	#[test]
	fn escape_closes_modal_and_swallows_other_keys() {
		let mut app = App::new(DarkMode::Disabled);
		app.apply(ViewUpdate::Detail(detail()));
		assert!(app.modal.is_open());

		type_text(&mut app, "abc");
		assert_eq!(app.fields[0].content(), "");

		app.handle_key_event(key(KeyCode::Esc));
		assert!(!app.modal.is_open());
	}

	#[test]
	fn clicks_dismiss_modal_only_outside_content() {
		let mut app = App::new(DarkMode::Disabled);
		app.apply(ViewUpdate::Detail(detail()));
		app.modal_bounds = Some(Rect::new(10, 5, 40, 10));
		app.close_control = Some(Rect::new(46, 5, 3, 1));

		let click = |column, row| MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		};

		app.handle_mouse_event(click(20, 8));
		assert!(app.modal.is_open());

		app.handle_mouse_event(click(2, 2));
		assert!(!app.modal.is_open());

		app.apply(ViewUpdate::Detail(detail()));
		app.handle_mouse_event(click(47, 5));
		assert!(!app.modal.is_open());
	}

	#[test]
	fn dark_mode_toggle_requests_save() {
		let mut app = App::new(DarkMode::Disabled);
		assert_eq!(app.theme, Theme::light());

		let commands = app.handle_key_event(ctrl('d'));
		assert_eq!(commands, vec![Command::SaveDarkMode(DarkMode::Enabled)]);
		assert_eq!(app.theme, Theme::dark());
	}

	#[test]
	fn error_and_loading_updates() {
		let mut app = App::new(DarkMode::Enabled);
		app.apply(ViewUpdate::Loading(true));
		app.tick();
		assert_eq!(app.spinner.frame(), 1);
		app.apply(ViewUpdate::Error("boom".to_string()));
		app.apply(ViewUpdate::Loading(false));
		assert!(!app.is_loading());
		assert_eq!(app.error, "boom");
		app.apply(ViewUpdate::ClearError);
		assert!(app.error.is_empty());
	}

	#[test]
	fn overlapping_fetches_keep_spinner_until_both_finish() {
		let mut app = App::new(DarkMode::Disabled);
		app.apply(ViewUpdate::Loading(true));
		app.apply(ViewUpdate::Loading(true));

		app.apply(ViewUpdate::Loading(false));
		assert!(app.is_loading());

		app.apply(ViewUpdate::Loading(false));
		assert!(!app.is_loading());

		app.apply(ViewUpdate::Loading(false));
		assert!(!app.is_loading());
	}

	#[test]
	fn focus_cycles_both_ways() {
		assert_eq!(Focus::Query.prev(), Focus::Pagination);
		assert_eq!(Focus::Pagination.next(), Focus::Query);
		assert_eq!(Focus::Language.next(), Focus::Results);
	}
}
