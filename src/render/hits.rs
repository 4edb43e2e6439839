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

//! Mouse hit testing.
//!
//! ratatui redraws everything on every frame, so the places where clickable
//! things ended up are recorded during the draw and looked up again when a
//! mouse event arrives.

use ratatui::layout::{Position, Rect};

/// Something under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Target {
    Previous,
    PlayPause,
    Next,
    Mute,
    /// Volume gauge, with the fraction under the pointer.
    Volume(f64),
    /// Progress gauge, with the fraction under the pointer.
    Progress(f64),
    /// A playlist row, by catalog index.
    Row(usize),
}

/// Gauges that keep tracking the pointer while the button is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slider {
    Volume,
    Progress,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct HitMap {
    pub(crate) previous: Option<Rect>,
    pub(crate) play_pause: Option<Rect>,
    pub(crate) next: Option<Rect>,
    pub(crate) mute: Option<Rect>,
    pub(crate) volume: Option<Rect>,
    pub(crate) progress: Option<Rect>,
    pub(crate) rows: Vec<(usize, Rect)>,
}

impl HitMap {
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        let hit = |rect: Option<Rect>| rect.filter(|r| r.contains(position));

        if hit(self.previous).is_some() {
            return Some(Target::Previous);
        }
        if hit(self.play_pause).is_some() {
            return Some(Target::PlayPause);
        }
        if hit(self.next).is_some() {
            return Some(Target::Next);
        }
        if hit(self.mute).is_some() {
            return Some(Target::Mute);
        }
        if let Some(rect) = hit(self.volume) {
            return Some(Target::Volume(fraction_at(rect, column)));
        }
        if let Some(rect) = hit(self.progress) {
            return Some(Target::Progress(fraction_at(rect, column)));
        }

        self.row_at(column, row).map(Target::Row)
    }

    pub(crate) fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.rows
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| *index)
    }

    /// Position along a slider, even when the pointer has left it.
    pub(crate) fn slider_fraction(&self, slider: Slider, column: u16) -> Option<f64> {
        let rect = match slider {
            Slider::Volume => self.volume,
            Slider::Progress => self.progress,
        }?;
        Some(fraction_at(rect, column))
    }
}

/// `clamp((x - left) / width, 0, 1)` for a horizontal track, with `width`
/// measured between the centres of its first and last cells.
pub(crate) fn fraction_at(track: Rect, column: u16) -> f64 {
    if track.width == 0 {
        return 0.0;
    }
    let span = track.width.saturating_sub(1).max(1);
    let offset = f64::from(column) - f64::from(track.x);
    (offset / f64::from(span)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits() -> HitMap {
        HitMap {
            previous: Some(Rect::new(2, 5, 3, 1)),
            play_pause: Some(Rect::new(7, 5, 5, 1)),
            next: Some(Rect::new(14, 5, 3, 1)),
            mute: Some(Rect::new(30, 5, 2, 1)),
            volume: Some(Rect::new(33, 5, 11, 1)),
            progress: Some(Rect::new(8, 7, 41, 1)),
            rows: vec![(0, Rect::new(0, 12, 60, 2)), (1, Rect::new(0, 14, 60, 2))],
        }
    }

    #[test]
    fn fraction_is_relative_to_track_left_edge() {
        let track = Rect::new(10, 0, 41, 1);
        assert_eq!(fraction_at(track, 10), 0.0);
        assert_eq!(fraction_at(track, 30), 0.5);
        assert_eq!(fraction_at(track, 5), 0.0);
        assert_eq!(fraction_at(track, 80), 1.0);
        assert_eq!(fraction_at(Rect::new(0, 0, 0, 1), 3), 0.0);
        assert_eq!(fraction_at(Rect::new(4, 0, 1, 1), 4), 0.0);
    }

    #[test]
    fn clicking_the_last_cell_reaches_the_end() {
        let track = Rect::new(10, 0, 40, 1);
        assert_eq!(fraction_at(track, track.right() - 1), 1.0);
        assert_eq!(fraction_at(track, track.x), 0.0);
    }

    #[test]
    fn buttons_and_gauges_are_found() {
        let hits = hits();
        assert_eq!(hits.target_at(3, 5), Some(Target::Previous));
        assert_eq!(hits.target_at(11, 5), Some(Target::PlayPause));
        assert_eq!(hits.target_at(16, 5), Some(Target::Next));
        assert_eq!(hits.target_at(31, 5), Some(Target::Mute));
        assert_eq!(hits.target_at(38, 5), Some(Target::Volume(0.5)));
        assert_eq!(hits.target_at(18, 7), Some(Target::Progress(0.25)));
        assert_eq!(hits.target_at(25, 13), Some(Target::Row(0)));
        assert_eq!(hits.target_at(25, 14), Some(Target::Row(1)));
        assert_eq!(hits.target_at(25, 20), None);
    }

    #[test]
    fn slider_tracks_pointer_outside_its_rect() {
        let hits = hits();
        assert_eq!(hits.slider_fraction(Slider::Progress, 100), Some(1.0));
        assert_eq!(hits.slider_fraction(Slider::Volume, 0), Some(0.0));
        assert_eq!(HitMap::default().slider_fraction(Slider::Volume, 0), None);
    }
}
