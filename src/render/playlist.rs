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

//! Render the playlist table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Padding, Row, Table, TableState},
};

use crate::{
    catalog::Track,
    render::{
        Variant, artwork,
        hits::HitMap,
        icons::{ICON_PLAY, ICON_PLAY_OUTLINE},
    },
    theme::Theme,
};

const ROW_HEIGHT: u16 = 2;
const HEADER_HEIGHT: u16 = 2;
const THUMB_WIDTH: u16 = 4;

/// What the playlist needs to know besides the tracks themselves.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlaylistContext {
    pub(crate) current: usize,
    pub(crate) hovered: Option<usize>,
    pub(crate) cursor: usize,
    pub(crate) variant: Variant,
}

pub(crate) fn draw_playlist(
    f: &mut Frame,
    area: Rect,
    tracks: &[Track],
    context: PlaylistContext,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let block = match context.variant {
        Variant::Compact => Block::default().borders(Borders::TOP),
        Variant::Wide => Block::default().borders(Borders::ALL),
    }
    .border_style(Style::default().fg(theme.border_colour))
    .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);

    let rows = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| track_row(index, track, context, theme));

    let header_style = Style::default()
        .fg(theme.muted_colour)
        .add_modifier(Modifier::BOLD);

    let (header, widths): (Vec<Cell>, Vec<Constraint>) = match context.variant {
        Variant::Compact => (
            vec![
                Cell::from("#"),
                Cell::from(""),
                Cell::from("TITLE"),
                Cell::from(Line::from("DURATION").alignment(Alignment::Right)),
            ],
            vec![
                Constraint::Length(3),
                Constraint::Length(THUMB_WIDTH),
                Constraint::Min(0),
                Constraint::Length(8),
            ],
        ),
        Variant::Wide => (
            vec![
                Cell::from("#"),
                Cell::from(""),
                Cell::from("TITLE"),
                Cell::from("INSPIRATION"),
                Cell::from(Line::from("DURATION").alignment(Alignment::Right)),
            ],
            vec![
                Constraint::Length(4),
                Constraint::Length(THUMB_WIDTH),
                Constraint::Percentage(50),
                Constraint::Percentage(50),
                Constraint::Length(10),
            ],
        ),
    };

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(header_style).bottom_margin(1))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("\u{203A} ")
        .block(block);

    let mut state = TableState::new().with_selected(Some(context.cursor));
    f.render_stateful_widget(table, area, &mut state);

    record_rows(hits, inner_area, tracks.len(), state.offset());
}

fn track_row<'a>(index: usize, track: &'a Track, context: PlaylistContext, theme: &Theme) -> Row<'a> {
    let is_current = index == context.current;

    let ordinal_style = if is_current {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_colour)
    };

    // Artwork overlays belong to the wide layout, compact rows keep their
    // initials and rely on the row colours
    let overlay = match context.variant {
        Variant::Compact => None,
        Variant::Wide if is_current => Some(ICON_PLAY),
        Variant::Wide if context.hovered == Some(index) => Some(ICON_PLAY_OUTLINE),
        Variant::Wide => None,
    };

    let thumb_bg = artwork::tile_colour(track.title_url);
    let thumb_label = overlay
        .map(str::to_string)
        .unwrap_or_else(|| artwork::initials(track.title));
    let thumb = Cell::from(Text::from(vec![
        Line::from(format!("{:^2}", thumb_label)),
        Line::from("  "),
    ]))
    .style(Style::default().bg(thumb_bg).fg(theme.foreground_colour));

    let title_style = if is_current {
        Style::default()
            .fg(theme.foreground_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground_colour)
    };

    let title = Cell::from(Text::from(vec![
        Line::from(Span::styled(track.title, title_style)),
        Line::from(Span::styled(track.artist, Style::default().fg(theme.muted_colour))),
    ]));

    let duration = Cell::from(
        Line::from(track.duration)
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Right),
    );

    let mut cells = vec![
        Cell::from(Line::from((index + 1).to_string()).style(ordinal_style)),
        thumb,
        title,
    ];
    if context.variant == Variant::Wide {
        cells.push(Cell::from(
            Line::from(track.prototype).style(Style::default().fg(theme.table_inspiration_fg)),
        ));
    }
    cells.push(duration);

    let row_style = if is_current {
        Style::default().bg(theme.row_current_bg)
    } else if context.hovered == Some(index) {
        Style::default().bg(theme.row_hover_bg)
    } else {
        Style::default()
    };

    Row::new(cells).height(ROW_HEIGHT).style(row_style)
}

// Rows are laid out below the header, starting from the table's scroll offset.
fn record_rows(hits: &mut HitMap, inner_area: Rect, track_count: usize, offset: usize) {
    hits.rows.clear();

    let bottom = inner_area.bottom();
    let mut y = inner_area.y.saturating_add(HEADER_HEIGHT);

    for index in offset..track_count {
        if y >= bottom {
            break;
        }
        let height = ROW_HEIGHT.min(bottom - y);
        hits.rows
            .push((index, Rect::new(inner_area.x, y, inner_area.width, height)));
        y = y.saturating_add(ROW_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_below_header() {
        let mut hits = HitMap::default();
        record_rows(&mut hits, Rect::new(1, 10, 50, 20), 3, 0);
        assert_eq!(
            hits.rows,
            vec![
                (0, Rect::new(1, 12, 50, 2)),
                (1, Rect::new(1, 14, 50, 2)),
                (2, Rect::new(1, 16, 50, 2)),
            ]
        );
    }

    #[test]
    fn rows_past_the_bottom_are_not_clickable() {
        let mut hits = HitMap::default();
        record_rows(&mut hits, Rect::new(0, 0, 50, 5), 3, 1);
        assert_eq!(
            hits.rows,
            vec![(1, Rect::new(0, 2, 50, 2)), (2, Rect::new(0, 4, 50, 1))]
        );
    }
}
