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

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) panel_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) foreground_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) row_current_bg: Color,
    pub(crate) row_hover_bg: Color,
    pub(crate) table_inspiration_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    // Dark background with neon purple highlights.
    pub(crate) const fn neon() -> Self {
        Self {
            background_colour: Color::Rgb(11, 6, 20),
            panel_colour: Color::Rgb(22, 14, 36),
            accent_colour: Color::Rgb(180, 92, 255),
            foreground_colour: Color::Rgb(240, 236, 248),
            muted_colour: Color::Rgb(142, 132, 160),
            border_colour: Color::Rgb(98, 52, 150),
            gauge_track_colour: Color::Rgb(48, 36, 66),

            row_current_bg: Color::Rgb(38, 28, 56),
            row_hover_bg: Color::Rgb(28, 20, 44),
            table_inspiration_fg: Color::Rgb(112, 104, 128),
        }
    }

    /// Converts an RGB [`ratatui::style::Color`] into a CSS-style hex string,
    /// as used by the terminal background escape sequence.
    ///
    /// Returns `None` for colours that are not [`Color::Rgb`].
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
