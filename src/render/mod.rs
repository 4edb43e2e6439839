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

//! Screen rendering.
//!
//! There is one playback state and two ways of drawing it: a compact layout
//! that stacks everything for narrow terminals, and a wide layout that puts
//! the transport beside the video panel and shows the full playlist table.
//! Both read the same [`Controller`] snapshot and record their clickable
//! regions in the same [`HitMap`].

mod artwork;
pub(crate) mod hits;
mod icons;
mod playlist;
mod transport;
mod video;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    catalog::{BRAND, CREDIT},
    config::LayoutMode,
    playback::Controller,
    render::{
        hits::{HitMap, Slider},
        icons::ICON_BRAND,
        playlist::{PlaylistContext, draw_playlist},
        transport::{TRANSPORT_CONTENT_HEIGHT, draw_transport},
        video::{draw_video_panel, draw_video_status},
    },
    theme::Theme,
};

const KEY_HINTS: &str =
    " space play/pause \u{2022} n/p next/prev \u{2022} j/k enter select \u{2022} ,/. seek \u{2022} -/= volume \u{2022} m mute \u{2022} v layout \u{2022} q quit";

/// The presentation actually drawn for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Variant {
    Compact,
    Wide,
}

impl Variant {
    pub(crate) fn resolve(mode: LayoutMode, width: u16, wide_min_width: u16) -> Self {
        match mode {
            LayoutMode::Compact => Variant::Compact,
            LayoutMode::Wide => Variant::Wide,
            LayoutMode::Auto if width >= wide_min_width => Variant::Wide,
            LayoutMode::Auto => Variant::Compact,
        }
    }
}

/// Presentation state that is not playback state.
#[derive(Debug)]
pub(crate) struct ViewState {
    pub(crate) layout: LayoutMode,
    pub(crate) wide_min_width: u16,
    /// Playlist row under the mouse pointer.
    pub(crate) hovered: Option<usize>,
    /// Playlist row picked with the keyboard.
    pub(crate) cursor: usize,
    /// Slider being dragged, if the mouse button went down on one.
    pub(crate) dragging: Option<Slider>,
    /// Message about the media surface, replaces the normal status.
    pub(crate) status: Option<String>,
    pub(crate) hits: HitMap,
}

impl ViewState {
    pub(crate) fn new(layout: LayoutMode, wide_min_width: u16) -> Self {
        Self {
            layout,
            wide_min_width,
            hovered: None,
            cursor: 0,
            dragging: None,
            status: None,
            hits: HitMap::default(),
        }
    }
}

pub(crate) fn draw(f: &mut Frame, controller: &Controller, view: &mut ViewState, theme: &Theme) {
    let area = f.area();
    let variant = Variant::resolve(view.layout, area.width, view.wide_min_width);

    view.hits.clear();

    let Some(track) = controller.current_track() else {
        return;
    };
    let state = controller.state();
    let status = view.status.as_deref();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_colour)),
        area,
    );

    let playlist_context = PlaylistContext {
        current: state.current_track_index,
        hovered: view.hovered,
        cursor: view.cursor,
        variant,
    };

    match variant {
        Variant::Compact => {
            let outer = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(TRANSPORT_CONTENT_HEIGHT + 2),
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(area);

            draw_header(f, outer[0], variant, theme);
            draw_transport(f, outer[1], state, track, variant, theme, &mut view.hits);
            draw_video_status(f, outer[2], state, track, status, theme);
            draw_playlist(
                f,
                outer[3],
                controller.catalog().tracks(),
                playlist_context,
                theme,
                &mut view.hits,
            );
            draw_footer(f, outer[4], theme);
        }
        Variant::Wide => {
            let outer = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(TRANSPORT_CONTENT_HEIGHT + 4),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(area);

            let control_center = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(outer[1]);

            draw_header(f, outer[0], variant, theme);
            draw_transport(
                f,
                control_center[0],
                state,
                track,
                variant,
                theme,
                &mut view.hits,
            );
            draw_video_panel(f, control_center[1], state, track, status, theme);
            draw_playlist(
                f,
                outer[2],
                controller.catalog().tracks(),
                playlist_context,
                theme,
                &mut view.hits,
            );
            draw_footer(f, outer[3], theme);
        }
    }
}

fn draw_header(f: &mut Frame, area: Rect, variant: Variant, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner_area);

    let brand = Line::from(vec![
        Span::styled(format!("{} ", ICON_BRAND), Style::default().fg(theme.accent_colour)),
        Span::styled(
            BRAND,
            Style::default()
                .fg(theme.foreground_colour)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(brand), chunks[0]);

    let credit_style = match variant {
        Variant::Compact => Style::default().fg(theme.muted_colour),
        Variant::Wide => Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    };
    f.render_widget(
        Paragraph::new(Span::styled(CREDIT, credit_style)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(theme.muted_colour)),
        area,
    );
}
