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

//! Render the media surface status.
//!
//! The video itself plays in mpv's own window (or not at all with `vo=null`),
//! the terminal only shows what the surface is doing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    catalog::Track,
    playback::PlaybackState,
    render::icons::{ICON_PAUSE, ICON_PLAY},
    theme::Theme,
};

fn status_label(state: &PlaybackState, status: Option<&str>) -> String {
    if let Some(message) = status {
        return message.to_string();
    }
    match (state.is_playing, state.duration > 0.0) {
        (_, false) => "Waiting for media\u{2026}".to_string(),
        (true, true) => format!("{} Playing", ICON_PLAY),
        (false, true) => format!("{} Paused", ICON_PAUSE),
    }
}

/// The bordered video panel used by the wide layout.
pub(crate) fn draw_video_panel(
    f: &mut Frame,
    area: Rect,
    state: &PlaybackState,
    track: &Track,
    status: Option<&str>,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" VIDEO ")
        .title_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .style(Style::default().bg(theme.panel_colour))
        .padding(Padding::new(2, 2, 1, 1));

    let label = Style::default().fg(theme.muted_colour);
    let value = Style::default().fg(theme.foreground_colour);

    let mut lines = vec![
        Line::from(Span::styled(
            status_label(state, status),
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Source  ", label),
            Span::styled(track.video_url, value),
        ]),
    ];

    if state.duration == 0.0 {
        lines.push(Line::from(vec![
            Span::styled("Poster  ", label),
            Span::styled(track.cover_url, value),
        ]));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(panel, area);
}

/// A single status line used by the compact layout.
pub(crate) fn draw_video_status(
    f: &mut Frame,
    area: Rect,
    state: &PlaybackState,
    track: &Track,
    status: Option<&str>,
    theme: &Theme,
) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", status_label(state, status)),
            Style::default().fg(theme.accent_colour),
        ),
        Span::styled(track.video_url, Style::default().fg(theme.muted_colour)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_playback_and_media_readiness() {
        let mut state = PlaybackState::default();
        assert_eq!(status_label(&state, None), "Waiting for media\u{2026}");

        state.duration = 120.0;
        assert!(status_label(&state, None).ends_with("Paused"));

        state.is_playing = true;
        assert!(status_label(&state, None).ends_with("Playing"));

        assert_eq!(status_label(&state, Some("Source unavailable")), "Source unavailable");
    }
}
