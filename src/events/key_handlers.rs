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

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::{
    App,
    events::{AppEvent, handlers::dispatch},
    playback::Action,
};

const VOLUME_STEP: f64 = 0.05;
const SEEK_STEP: f64 = 0.05;

/// Maps keyboard input to playback actions.
///
/// # Errors
///
/// Returns an error if the quit request cannot be posted to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let track_count = app.controller.catalog().len();

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char(' '), _) => dispatch(app, Action::TogglePlayPause),
        (KeyCode::Char('n'), _) => dispatch(app, Action::Next),
        (KeyCode::Char('p'), _) => dispatch(app, Action::Previous),

        // Playlist cursor
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => {
            app.view.cursor = (app.view.cursor + 1) % track_count;
        }
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => {
            app.view.cursor = if app.view.cursor == 0 {
                track_count - 1
            } else {
                app.view.cursor - 1
            };
        }
        (KeyCode::Enter, _) => {
            let index = app.view.cursor;
            dispatch(app, Action::SelectTrack(index));
        }

        (KeyCode::Char(','), _) | (KeyCode::Left, _) => {
            let fraction = app.controller.state().progress_fraction - SEEK_STEP;
            dispatch(app, Action::Seek(fraction.max(0.0)));
        }
        (KeyCode::Char('.'), _) | (KeyCode::Right, _) => {
            let fraction = app.controller.state().progress_fraction + SEEK_STEP;
            dispatch(app, Action::Seek(fraction.min(1.0)));
        }

        (KeyCode::Char('-'), _) | (KeyCode::Char('_'), _) => {
            let volume = app.controller.state().volume - VOLUME_STEP;
            dispatch(app, Action::SetVolume(volume.max(0.0)));
        }
        (KeyCode::Char('='), _) | (KeyCode::Char('+'), _) => {
            let volume = app.controller.state().volume + VOLUME_STEP;
            dispatch(app, Action::SetVolume(volume.min(1.0)));
        }
        (KeyCode::Char('m'), _) => dispatch(app, Action::ToggleMute),

        (KeyCode::Char('v'), _) => {
            app.view.layout = app.view.layout.cycle();
            debug!(layout = ?app.view.layout, "Layout mode changed");
        }

        _ => {}
    }

    Ok(())
}
