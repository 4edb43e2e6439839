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

//! Playback state and transitions.
//!
//! The player's state is a single [`PlaybackState`] snapshot. Every user
//! gesture and every media surface event is expressed as an [`Action`], and
//! [`reduce`] turns the current snapshot plus an action into the next
//! snapshot. Nothing in here touches the terminal or the media backend, the
//! [`Controller`] is responsible for pushing the results out to the media
//! surface.

mod controller;

#[cfg(test)]
mod tests;

pub(crate) use controller::Controller;

use tracing::{debug, warn};

/// Volume used when nothing else has been configured.
pub(crate) const DEFAULT_VOLUME: f64 = 0.7;

/// Identifies one load of a media source.
///
/// A new id is issued every time the current track is switched, events from
/// the media surface carry the id of the load they were produced for so that
/// stragglers from a superseded source can be told apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct SourceId(pub(crate) u64);

impl SourceId {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PlaybackState {
    pub current_track_index: usize,
    pub is_playing: bool,
    /// Stored volume in `[0, 1]`, kept intact while muted.
    pub volume: f64,
    pub muted: bool,
    /// Seconds played of the current source.
    pub elapsed: f64,
    /// Seconds reported by the media surface, zero until known.
    pub duration: f64,
    pub progress_fraction: f64,
    pub source: SourceId,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track_index: 0,
            is_playing: false,
            volume: DEFAULT_VOLUME,
            muted: false,
            elapsed: 0.0,
            duration: 0.0,
            progress_fraction: 0.0,
            source: SourceId::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Action {
    TogglePlayPause,
    Previous,
    Next,
    SelectTrack(usize),
    Seek(f64),
    SetVolume(f64),
    ToggleMute,
    TimeUpdate { source: SourceId, elapsed: f64 },
    DurationKnown { source: SourceId, total: f64 },
    Ended { source: SourceId },
}

/// The outcome of applying an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Transition {
    pub state: PlaybackState,
    /// Absolute position, in seconds, the media surface should jump to.
    pub seek_to: Option<f64>,
}

impl From<PlaybackState> for Transition {
    fn from(state: PlaybackState) -> Self {
        Self {
            state,
            seek_to: None,
        }
    }
}

/// Computes the next playback state.
///
/// # Arguments
///
/// * `state` - The current snapshot.
/// * `action` - The gesture or media event to apply.
/// * `track_count` - Length of the catalog, used for wraparound.
pub(crate) fn reduce(state: &PlaybackState, action: Action, track_count: usize) -> Transition {
    match action {
        Action::TogglePlayPause => state.toggle_play_pause().into(),
        Action::Previous => state.previous(track_count).into(),
        Action::Next => state.next(track_count).into(),
        Action::SelectTrack(index) => state.select_track(index, track_count).into(),
        Action::Seek(fraction) => state.seek(fraction),
        Action::SetVolume(volume) => state.set_volume(volume).into(),
        Action::ToggleMute => state.toggle_mute().into(),
        Action::TimeUpdate { source, elapsed } if source == state.source => {
            state.on_time_update(elapsed).into()
        }
        Action::DurationKnown { source, total } if source == state.source => {
            state.on_duration_known(total).into()
        }
        Action::Ended { source } if source == state.source => state.next(track_count).into(),
        Action::TimeUpdate { source, .. }
        | Action::DurationKnown { source, .. }
        | Action::Ended { source } => {
            debug!(?source, current = ?state.source, "Ignoring event for superseded source");
            (*state).into()
        }
    }
}

impl PlaybackState {
    /// Creates the initial state with the given stored volume.
    pub(crate) fn with_volume(volume: f64) -> Self {
        Self {
            volume: clamp_unit(volume),
            ..Self::default()
        }
    }

    /// The volume the media surface should actually play at.
    pub(crate) fn effective_volume(&self) -> f64 {
        if self.muted { 0.0 } else { self.volume }
    }

    pub(crate) fn toggle_play_pause(&self) -> Self {
        Self {
            is_playing: !self.is_playing,
            ..*self
        }
    }

    pub(crate) fn previous(&self, track_count: usize) -> Self {
        if track_count == 0 {
            return *self;
        }
        let index = if self.current_track_index == 0 {
            track_count - 1
        } else {
            self.current_track_index - 1
        };
        self.switch_to(index)
    }

    pub(crate) fn next(&self, track_count: usize) -> Self {
        if track_count == 0 {
            return *self;
        }
        let index = if self.current_track_index + 1 >= track_count {
            0
        } else {
            self.current_track_index + 1
        };
        self.switch_to(index)
    }

    /// Selecting the track that is already current keeps its source loaded
    /// and only resumes playback.
    pub(crate) fn select_track(&self, index: usize, track_count: usize) -> Self {
        if index >= track_count {
            warn!(index, track_count, "Ignoring selection outside the catalog");
            return *self;
        }
        if index == self.current_track_index {
            return Self {
                is_playing: true,
                ..*self
            };
        }
        self.switch_to(index)
    }

    /// Jumps to a fraction of the current source.
    ///
    /// The progress fraction is updated straight away, the elapsed time
    /// follows once the media surface reports the new position.
    pub(crate) fn seek(&self, fraction: f64) -> Transition {
        let fraction = clamp_unit(fraction);
        let seek_to = (self.duration > 0.0).then(|| fraction * self.duration);
        Transition {
            state: Self {
                progress_fraction: fraction,
                ..*self
            },
            seek_to,
        }
    }

    pub(crate) fn set_volume(&self, volume: f64) -> Self {
        Self {
            volume: clamp_unit(volume),
            muted: false,
            ..*self
        }
    }

    pub(crate) fn toggle_mute(&self) -> Self {
        Self {
            muted: !self.muted,
            ..*self
        }
    }

    pub(crate) fn on_time_update(&self, elapsed: f64) -> Self {
        if !elapsed.is_finite() {
            return *self;
        }
        let mut elapsed = elapsed.max(0.0);
        let mut progress_fraction = self.progress_fraction;
        if self.duration > 0.0 {
            elapsed = elapsed.min(self.duration);
            progress_fraction = elapsed / self.duration;
        }
        Self {
            elapsed,
            progress_fraction,
            ..*self
        }
    }

    pub(crate) fn on_duration_known(&self, total: f64) -> Self {
        if !total.is_finite() || total < 0.0 {
            return *self;
        }
        let mut next = Self {
            duration: total,
            ..*self
        };
        if total > 0.0 {
            next.elapsed = next.elapsed.min(total);
            next.progress_fraction = next.elapsed / total;
        }
        next
    }

    // Moves to another track: a fresh source with no timing information yet.
    fn switch_to(&self, index: usize) -> Self {
        Self {
            current_track_index: index,
            is_playing: true,
            elapsed: 0.0,
            duration: 0.0,
            progress_fraction: 0.0,
            source: self.source.next(),
            ..*self
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
