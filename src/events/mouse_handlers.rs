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

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::{
    App,
    events::handlers::dispatch,
    playback::Action,
    render::hits::{Slider, Target},
};

/// Maps pointer input onto whatever was drawn under it in the last frame.
pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = app.view.hits.target_at(column, row) {
                activate(app, target);
            }
        }

        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(slider) = app.view.dragging {
                if let Some(fraction) = app.view.hits.slider_fraction(slider, column) {
                    dispatch(app, slider_action(slider, fraction));
                }
            }
        }

        MouseEventKind::Up(MouseButton::Left) => app.view.dragging = None,

        MouseEventKind::Moved => app.view.hovered = app.view.hits.row_at(column, row),

        _ => {}
    }
}

fn activate(app: &mut App, target: Target) {
    match target {
        Target::Previous => dispatch(app, Action::Previous),
        Target::PlayPause => dispatch(app, Action::TogglePlayPause),
        Target::Next => dispatch(app, Action::Next),
        Target::Mute => dispatch(app, Action::ToggleMute),
        Target::Volume(fraction) => {
            app.view.dragging = Some(Slider::Volume);
            dispatch(app, slider_action(Slider::Volume, fraction));
        }
        Target::Progress(fraction) => {
            app.view.dragging = Some(Slider::Progress);
            dispatch(app, slider_action(Slider::Progress, fraction));
        }
        Target::Row(index) => {
            app.view.cursor = index;
            dispatch(app, Action::SelectTrack(index));
        }
    }
}

fn slider_action(slider: Slider, fraction: f64) -> Action {
    match slider {
        Slider::Volume => Action::SetVolume(fraction),
        Slider::Progress => Action::Seek(fraction),
    }
}
