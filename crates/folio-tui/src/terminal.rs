// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use folio_browser::BookSource;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::App;
use crate::dispatch::Dispatcher;
use crate::presenter::ViewUpdate;

/// Drives the UI until the user quits. Blocks the calling thread, so call it
/// from `spawn_blocking` inside a runtime; dispatched fetches are spawned
/// onto that runtime.
pub fn run<S: BookSource + 'static>(
	mut app: App,
	dispatcher: Dispatcher<S>,
	mut updates: UnboundedReceiver<ViewUpdate>,
	tick_rate: Duration,
) -> anyhow::Result<()> {
	enable_raw_mode()?;
	io::stdout().execute(EnterAlternateScreen)?;
	io::stdout().execute(EnableMouseCapture)?;

	let backend = CrosstermBackend::new(io::stdout());
	let mut terminal = Terminal::new(backend)?;

	let result = (|| -> anyhow::Result<()> {
		loop {
			while let Ok(update) = updates.try_recv() {
				app.apply(update);
			}

			terminal.draw(|frame| app.render(frame))?;

			if event::poll(tick_rate)? {
				let commands = match event::read()? {
					Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
					Event::Mouse(mouse) => app.handle_mouse_event(mouse),
					_ => Vec::new(),
				};
				for command in commands {
					dispatcher.dispatch(command);
				}
			}

			app.tick();

			if app.should_quit() {
				break;
			}
		}
		Ok(())
	})();

	io::stdout().execute(DisableMouseCapture)?;
	disable_raw_mode()?;
	io::stdout().execute(LeaveAlternateScreen)?;

	result
}
