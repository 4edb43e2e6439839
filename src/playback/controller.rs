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

use tracing::debug;

use crate::{
    catalog::{Catalog, Track},
    playback::{Action, PlaybackState, Transition, reduce},
    surface::SurfaceCommand,
};

/// Owns the playback snapshot and is its only mutator.
///
/// Each dispatched [`Action`] produces a new snapshot, and the commands
/// needed to bring the media surface in line with it.
pub(crate) struct Controller {
    catalog: Catalog,
    state: PlaybackState,
}

impl Controller {
    pub(crate) fn new(catalog: Catalog, initial_volume: f64) -> Self {
        Self {
            catalog,
            state: PlaybackState::with_volume(initial_volume),
        }
    }

    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn current_track(&self) -> Option<&'static Track> {
        self.catalog.get(self.state.current_track_index)
    }

    /// Commands that put a freshly started surface into the initial state.
    pub(crate) fn startup_commands(&self) -> Vec<SurfaceCommand> {
        let mut commands = Vec::new();
        if let Some(track) = self.current_track() {
            commands.push(SurfaceCommand::Load {
                url: track.video_url.to_string(),
                source: self.state.source,
            });
        }
        commands.push(SurfaceCommand::SetPlaying(self.state.is_playing));
        commands.push(SurfaceCommand::SetVolume(self.state.effective_volume()));
        commands
    }

    /// Applies an action and returns the surface commands it implies.
    pub(crate) fn dispatch(&mut self, action: Action) -> Vec<SurfaceCommand> {
        let previous = self.state;
        let transition = reduce(&previous, action, self.catalog.len());
        self.state = transition.state;

        if previous != self.state {
            debug!(?action, state = ?self.state, "Playback state changed");
        }

        self.commands_for(&previous, &transition)
    }

    fn commands_for(&self, previous: &PlaybackState, transition: &Transition) -> Vec<SurfaceCommand> {
        let next = &transition.state;
        let mut commands = Vec::new();

        let source_changed = next.source != previous.source;
        if source_changed {
            if let Some(track) = self.catalog.get(next.current_track_index) {
                commands.push(SurfaceCommand::Load {
                    url: track.video_url.to_string(),
                    source: next.source,
                });
            }
        }

        if source_changed || next.is_playing != previous.is_playing {
            commands.push(SurfaceCommand::SetPlaying(next.is_playing));
        }

        if next.effective_volume() != previous.effective_volume() {
            commands.push(SurfaceCommand::SetVolume(next.effective_volume()));
        }

        if let Some(seconds) = transition.seek_to {
            commands.push(SurfaceCommand::SeekTo(seconds));
        }

        commands
    }
}
