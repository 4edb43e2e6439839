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

use super::*;
use crate::{
    catalog::{Catalog, TRACKS},
    surface::SurfaceCommand,
};

const TRACK_COUNT: usize = 3;

fn apply(state: PlaybackState, action: Action) -> PlaybackState {
    reduce(&state, action, TRACK_COUNT).state
}

fn playing_at(index: usize) -> PlaybackState {
    PlaybackState {
        current_track_index: index,
        is_playing: true,
        ..PlaybackState::default()
    }
}

fn assert_timing_reset(state: &PlaybackState) {
    assert_eq!(state.elapsed, 0.0);
    assert_eq!(state.duration, 0.0);
    assert_eq!(state.progress_fraction, 0.0);
}

#[test]
fn default_state_matches_mount_defaults() {
    let state = PlaybackState::default();
    assert_eq!(state.current_track_index, 0);
    assert!(!state.is_playing);
    assert_eq!(state.volume, 0.7);
    assert!(!state.muted);
    assert_timing_reset(&state);
}

#[test]
fn toggle_play_pause_flips_flag() {
    let state = apply(PlaybackState::default(), Action::TogglePlayPause);
    assert!(state.is_playing);
    let state = apply(state, Action::TogglePlayPause);
    assert!(!state.is_playing);
}

#[test]
fn next_wraps_back_to_start_after_full_cycle() {
    let mut state = PlaybackState::default();
    for _ in 0..TRACK_COUNT {
        state = apply(state, Action::Next);
        assert!(state.is_playing);
    }
    assert_eq!(state.current_track_index, 0);
}

#[test]
fn previous_from_first_track_wraps_to_last() {
    let state = apply(PlaybackState::default(), Action::Previous);
    assert_eq!(state.current_track_index, TRACK_COUNT - 1);
    assert!(state.is_playing);
}

#[test]
fn next_from_last_track_wraps_to_first() {
    let state = apply(playing_at(2), Action::Next);
    assert_eq!(state.current_track_index, 0);
    assert!(state.is_playing);
}

#[test]
fn select_track_sets_index_and_plays_regardless_of_prior_state() {
    for prior in [PlaybackState::default(), playing_at(2), playing_at(1).toggle_play_pause()] {
        for k in 0..TRACK_COUNT {
            let state = apply(prior, Action::SelectTrack(k));
            assert_eq!(state.current_track_index, k);
            assert!(state.is_playing);
        }
    }
}

#[test]
fn select_track_outside_catalog_is_ignored() {
    let prior = playing_at(1);
    assert_eq!(apply(prior, Action::SelectTrack(TRACK_COUNT)), prior);
}

#[test]
fn reselecting_current_track_keeps_its_source() {
    let prior = PlaybackState {
        duration: 120.0,
        elapsed: 30.0,
        progress_fraction: 0.25,
        ..PlaybackState::default()
    };
    let state = apply(prior, Action::SelectTrack(0));
    assert!(state.is_playing);
    assert_eq!(state.source, prior.source);
    assert_eq!(state.elapsed, 30.0);
}

#[test]
fn every_track_switch_resets_timing() {
    let timed = PlaybackState {
        current_track_index: 1,
        elapsed: 40.0,
        duration: 80.0,
        progress_fraction: 0.5,
        ..PlaybackState::default()
    };

    for action in [Action::Next, Action::Previous, Action::SelectTrack(0)] {
        let state = apply(timed, action);
        assert_timing_reset(&state);
        assert_ne!(state.source, timed.source);
    }
}

#[test]
fn seek_sets_progress_immediately_without_duration() {
    let transition = reduce(&PlaybackState::default(), Action::Seek(0.3), TRACK_COUNT);
    assert_eq!(transition.state.progress_fraction, 0.3);
    assert_eq!(transition.seek_to, None);
}

#[test]
fn seek_requests_absolute_position_when_duration_known() {
    let state = PlaybackState {
        duration: 200.0,
        ..PlaybackState::default()
    };
    let transition = reduce(&state, Action::Seek(0.25), TRACK_COUNT);
    assert_eq!(transition.state.progress_fraction, 0.25);
    assert_eq!(transition.seek_to, Some(50.0));
    // Elapsed only moves once the surface confirms
    assert_eq!(transition.state.elapsed, 0.0);
}

#[test]
fn seek_fraction_is_clamped() {
    let state = apply(PlaybackState::default(), Action::Seek(1.5));
    assert_eq!(state.progress_fraction, 1.0);
    let state = apply(PlaybackState::default(), Action::Seek(-0.2));
    assert_eq!(state.progress_fraction, 0.0);
}

#[test]
fn mute_keeps_stored_volume_and_set_volume_unmutes() {
    let state = apply(PlaybackState::default(), Action::SetVolume(0.4));
    let state = apply(state, Action::ToggleMute);
    assert!(state.muted);
    assert_eq!(state.effective_volume(), 0.0);
    assert_eq!(state.volume, 0.4);

    let state = apply(state, Action::SetVolume(0.6));
    assert!(!state.muted);
    assert_eq!(state.effective_volume(), 0.6);
}

#[test]
fn time_update_without_duration_only_sets_elapsed() {
    let source = PlaybackState::default().source;
    let state = apply(
        PlaybackState::default(),
        Action::TimeUpdate {
            source,
            elapsed: 12.0,
        },
    );
    assert_eq!(state.elapsed, 12.0);
    assert_eq!(state.progress_fraction, 0.0);
}

#[test]
fn time_update_is_clamped_to_duration() {
    let state = PlaybackState {
        duration: 10.0,
        ..PlaybackState::default()
    };
    let source = state.source;
    let state = apply(
        state,
        Action::TimeUpdate {
            source,
            elapsed: 10.4,
        },
    );
    assert_eq!(state.elapsed, 10.0);
    assert_eq!(state.progress_fraction, 1.0);
}

#[test]
fn events_for_superseded_source_are_ignored() {
    let stale = PlaybackState::default().source;
    let state = apply(PlaybackState::default(), Action::Next);

    let after = apply(
        state,
        Action::DurationKnown {
            source: stale,
            total: 99.0,
        },
    );
    assert_eq!(after, state);

    let after = apply(
        state,
        Action::TimeUpdate {
            source: stale,
            elapsed: 50.0,
        },
    );
    assert_eq!(after, state);

    let after = apply(state, Action::Ended { source: stale });
    assert_eq!(after.current_track_index, 1);
}

#[test]
fn playthrough_scenario() {
    let state = PlaybackState::default();
    let state = apply(state, Action::TogglePlayPause);
    assert!(state.is_playing);

    let source = state.source;
    let state = apply(
        state,
        Action::DurationKnown {
            source,
            total: 127.0,
        },
    );
    assert_eq!(state.duration, 127.0);

    let state = apply(
        state,
        Action::TimeUpdate {
            source,
            elapsed: 63.5,
        },
    );
    assert_eq!(state.elapsed, 63.5);
    assert!((state.progress_fraction - 0.5).abs() < 1e-9);

    let state = apply(state, Action::Next);
    assert_eq!(state.current_track_index, 1);
    assert!(state.is_playing);
    assert_timing_reset(&state);
}

#[test]
fn end_of_media_advances_like_next() {
    let state = playing_at(1);
    let source = state.source;
    let state = apply(state, Action::Ended { source });
    assert_eq!(state.current_track_index, 2);
    assert!(state.is_playing);
}

fn controller() -> Controller {
    Controller::new(Catalog::builtin().expect("builtin catalog"), 0.7)
}

#[test]
fn controller_startup_loads_first_track_paused() {
    let controller = controller();
    let commands = controller.startup_commands();
    assert_eq!(
        commands,
        vec![
            SurfaceCommand::Load {
                url: TRACKS[0].video_url.to_string(),
                source: controller.state().source,
            },
            SurfaceCommand::SetPlaying(false),
            SurfaceCommand::SetVolume(0.7),
        ]
    );
}

#[test]
fn controller_loads_new_source_on_switch() {
    let mut controller = controller();
    let commands = controller.dispatch(Action::Next);
    assert_eq!(
        commands,
        vec![
            SurfaceCommand::Load {
                url: TRACKS[1].video_url.to_string(),
                source: controller.state().source,
            },
            SurfaceCommand::SetPlaying(true),
        ]
    );
    assert_eq!(controller.current_track().map(|t| t.id), Some(2));
}

#[test]
fn controller_mute_sends_zero_volume() {
    let mut controller = controller();
    assert_eq!(
        controller.dispatch(Action::ToggleMute),
        vec![SurfaceCommand::SetVolume(0.0)]
    );
    assert_eq!(
        controller.dispatch(Action::SetVolume(0.4)),
        vec![SurfaceCommand::SetVolume(0.4)]
    );
}

#[test]
fn controller_forwards_seek_only_with_known_duration() {
    let mut controller = controller();
    assert!(controller.dispatch(Action::Seek(0.5)).is_empty());

    let source = controller.state().source;
    controller.dispatch(Action::DurationKnown {
        source,
        total: 100.0,
    });
    assert_eq!(
        controller.dispatch(Action::Seek(0.5)),
        vec![SurfaceCommand::SeekTo(50.0)]
    );
}

#[test]
fn controller_time_updates_need_no_surface_commands() {
    let mut controller = controller();
    let source = controller.state().source;
    assert!(
        controller
            .dispatch(Action::TimeUpdate {
                source,
                elapsed: 3.0
            })
            .is_empty()
    );
}
