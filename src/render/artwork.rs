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

//! Artwork placeholders.
//!
//! Image assets cannot be shown in a terminal, each one is stood in for by a
//! coloured tile with the title's initials. The tile colour is derived from
//! the asset path so a track always gets the same one.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

const PALETTE: [Color; 6] = [
    Color::Rgb(120, 48, 190),
    Color::Rgb(190, 40, 140),
    Color::Rgb(60, 70, 200),
    Color::Rgb(150, 60, 220),
    Color::Rgb(200, 70, 90),
    Color::Rgb(40, 130, 170),
];

/// Picks a stable tile colour for an asset path (FNV-1a over its bytes).
pub(crate) fn tile_colour(asset: &str) -> Color {
    let hash = asset
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        });
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}

/// Up to two initials taken from the words of a title.
pub(crate) fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Draws a tile with the initials centred.
pub(crate) fn draw_tile(f: &mut Frame, area: Rect, asset: &str, title: &str) {
    let bg = tile_colour(asset);
    let label = initials(title);

    let top_padding = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(label));

    let tile = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default());

    f.render_widget(tile, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_punctuation() {
        assert_eq!(initials("Fast & Furious. Smooth. On-chain"), "FF");
        assert_eq!(initials("Magic Moments"), "MM");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn tile_colour_is_stable_per_asset() {
        assert_eq!(tile_colour("assets/title1.jpg"), tile_colour("assets/title1.jpg"));
        assert!(PALETTE.contains(&tile_colour("assets/title2.jpg")));
    }
}
