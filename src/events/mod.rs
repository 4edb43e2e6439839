// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application events and the main event loop.
//!
//! Everything that can change what is on screen arrives as an [`AppEvent`] on
//! one channel: terminal input, media surface notifications and the periodic
//! tick. Events are handled strictly one at a time, in arrival order, and the
//! screen is redrawn after each one.

mod handlers;
mod key_handlers;
mod mouse_handlers;


use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw, surface::SurfaceEvent};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    Surface(SurfaceEvent),

    Tick,

    ExitApplication,

    FatalError(String),
}

/// Routes a single event to its handler.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => mouse_handlers::process_mouse_event(app, mouse),
        AppEvent::Surface(surface_event) => handlers::handle_surface_event(app, surface_event),
        AppEvent::FatalError(message) => handlers::handle_fatal_error(app, message),
        AppEvent::Resize | AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, &app.controller, &mut app.view, &app.theme))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, &app.controller, &mut app.view, &app.theme))?;
    }

    Ok(())
}
