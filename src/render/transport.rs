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

//! Render the transport panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    catalog::Track,
    playback::PlaybackState,
    render::{
        Variant, artwork,
        hits::HitMap,
        icons::{ICON_MUTED, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_VOLUME_HIGH},
    },
    theme::Theme,
    util::format::format_time,
};

/// Rows the transport needs inside its border.
pub(crate) const TRANSPORT_CONTENT_HEIGHT: u16 = 8;

const ART_WIDTH: u16 = 8;

pub(crate) fn draw_transport(
    f: &mut Frame,
    area: Rect,
    state: &PlaybackState,
    track: &Track,
    variant: Variant,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let padding = match variant {
        Variant::Compact => Padding::horizontal(1),
        Variant::Wide => Padding::new(2, 2, 1, 1),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(padding);

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    draw_now_playing(f, chunks[0], track, theme);
    draw_controls(f, chunks[2], state, theme, hits);
    draw_progress(f, chunks[4], state, theme, hits);
}

fn draw_now_playing(f: &mut Frame, area: Rect, track: &Track, theme: &Theme) {
    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ART_WIDTH),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    artwork::draw_tile(f, info_chunks[0], track.title_url, track.title);

    let lines = vec![
        Line::from(Span::styled(
            "NOW PLAYING",
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            track.title,
            Style::default()
                .fg(theme.foreground_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(track.artist, Style::default().fg(theme.muted_colour))),
    ];

    f.render_widget(Paragraph::new(lines), info_chunks[2]);
}

fn draw_controls(
    f: &mut Frame,
    area: Rect,
    state: &PlaybackState,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(14),
        ])
        .split(area);

    let button = Style::default().fg(theme.muted_colour);
    let play_icon = if state.is_playing { ICON_PAUSE } else { ICON_PLAY };

    f.render_widget(
        Paragraph::new(ICON_PREV).style(button).alignment(Alignment::Center),
        control_chunks[0],
    );
    f.render_widget(
        Paragraph::new(format!("[{}]", play_icon))
            .style(
                Style::default()
                    .fg(theme.foreground_colour)
                    .bg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        control_chunks[2],
    );
    f.render_widget(
        Paragraph::new(ICON_NEXT).style(button).alignment(Alignment::Center),
        control_chunks[4],
    );

    let volume_icon = if state.muted || state.volume == 0.0 {
        ICON_MUTED
    } else {
        ICON_VOLUME_HIGH
    };
    f.render_widget(Paragraph::new(volume_icon).style(button), control_chunks[6]);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(state.effective_volume().clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, control_chunks[8]);

    hits.previous = Some(control_chunks[0]);
    hits.play_pause = Some(control_chunks[2]);
    hits.next = Some(control_chunks[4]);
    hits.mute = Some(control_chunks[6]);
    hits.volume = Some(control_chunks[8]);
}

fn draw_progress(
    f: &mut Frame,
    area: Rect,
    state: &PlaybackState,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let progress_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(6),
        ])
        .split(area);

    let elapsed = Paragraph::new(format_time(state.elapsed))
        .alignment(Alignment::Right)
        .fg(theme.accent_colour)
        .add_modifier(Modifier::BOLD);
    f.render_widget(elapsed, progress_chunks[0]);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(state.progress_fraction.clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, progress_chunks[2]);

    let duration = Paragraph::new(format_time(state.duration)).fg(theme.muted_colour);
    f.render_widget(duration, progress_chunks[4]);

    hits.progress = Some(progress_chunks[2]);
}
