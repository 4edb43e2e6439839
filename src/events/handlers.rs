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

use tracing::{error, info, warn};

use crate::{
    App,
    playback::Action,
    surface::{self, SurfaceEvent},
};

const SOURCE_UNAVAILABLE: &str = "Source unavailable";
const SURFACE_UNAVAILABLE: &str = "Media player unavailable";

/// Applies an action to the controller and forwards the resulting commands
/// to the media surface.
///
/// A surface that cannot be reached is not fatal, the player keeps running
/// and shows that playback is unavailable.
pub(crate) fn dispatch(app: &mut App, action: Action) {
    let previous_source = app.controller.state().source;

    let commands = app.controller.dispatch(action);

    if app.controller.state().source != previous_source {
        app.view.status = None;
        if let Some(track) = app.controller.current_track() {
            info!(id = track.id, title = track.title, "Switched track");
        }
    }

    if let Err(e) = surface::apply(app.surface.as_ref(), &commands) {
        warn!("Failed to drive media surface: {}", e);
        app.view.status = Some(SURFACE_UNAVAILABLE.to_string());
    }
}

pub(super) fn handle_surface_event(app: &mut App, event: SurfaceEvent) {
    match event {
        SurfaceEvent::TimeUpdate { source, elapsed } => {
            dispatch(app, Action::TimeUpdate { source, elapsed })
        }
        SurfaceEvent::DurationKnown { source, total } => {
            if source == app.controller.state().source {
                app.view.status = None;
            }
            dispatch(app, Action::DurationKnown { source, total })
        }
        SurfaceEvent::Ended { source } => dispatch(app, Action::Ended { source }),
        SurfaceEvent::Failed { source, message } => {
            if source == app.controller.state().source {
                warn!(?source, "Media source failed: {}", message);
                app.view.status = Some(SOURCE_UNAVAILABLE.to_string());
            }
        }
    }
}

pub(super) fn handle_fatal_error(app: &mut App, message: String) {
    error!("{}", message);
    app.view.status = Some(SURFACE_UNAVAILABLE.to_string());
}
