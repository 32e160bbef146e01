// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal front end for Folio.

pub mod app;
pub mod dispatch;
pub mod presenter;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, Command, Focus};
pub use dispatch::Dispatcher;
pub use presenter::{ChannelPresenter, ViewUpdate};
pub use theme::Theme;
