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

//! MPV backed media surface.
//!
//! All interaction with libmpv happens on a dedicated worker thread. The
//! [`MpvSurface`] handle only forwards commands to it, and the worker reports
//! back through the application event channel.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{self, Receiver, Sender, TryRecvError},
    thread,
};
use tracing::{debug, info, warn};

use crate::{
    events::AppEvent,
    playback::SourceId,
    surface::{MediaSurface, SurfaceCommand, SurfaceError, SurfaceEvent},
};

/// Options handed to libmpv when the worker starts.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MpvOptions {
    /// Value for mpv's `vo` option, `null` plays audio only.
    pub(crate) video_output: String,
    pub(crate) ytdl_format: Option<String>,
}

/// A handle to the MPV worker thread.
pub(crate) struct MpvSurface {
    command_tx: Sender<SurfaceCommand>,
}

impl MpvSurface {
    /// Spawns the worker thread and returns a handle to it.
    ///
    /// # Arguments
    ///
    /// * `options` - libmpv options.
    /// * `event_tx` - Channel used for surface events and worker failures.
    pub(crate) fn new(options: MpvOptions, event_tx: Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel();

        spawn_surface_worker(options, command_rx, event_tx);

        Self { command_tx }
    }

    fn send(&self, command: SurfaceCommand) -> Result<(), SurfaceError> {
        self.command_tx
            .send(command)
            .map_err(|_| SurfaceError::Disconnected)
    }
}

impl MediaSurface for MpvSurface {
    fn load(&self, url: &str, source: SourceId) -> Result<(), SurfaceError> {
        self.send(SurfaceCommand::Load {
            url: url.to_string(),
            source,
        })
    }

    fn set_playing(&self, playing: bool) -> Result<(), SurfaceError> {
        self.send(SurfaceCommand::SetPlaying(playing))
    }

    fn set_volume(&self, volume: f64) -> Result<(), SurfaceError> {
        self.send(SurfaceCommand::SetVolume(volume))
    }

    fn seek_to(&self, seconds: f64) -> Result<(), SurfaceError> {
        self.send(SurfaceCommand::SeekTo(seconds))
    }
}

/// Tracks which load the events coming out of mpv belong to.
///
/// mpv delivers its events in order, so every `loadfile` issued is followed
/// by exactly one `StartFile`. Until the `StartFile` of the newest load has
/// been seen, anything mpv reports is about an older source.
#[derive(Debug, Default)]
struct LoadTracker {
    current: Option<SourceId>,
    pending_starts: usize,
    loaded: bool,
    failed: bool,
}

impl LoadTracker {
    fn begin_load(&mut self, source: SourceId) {
        self.current = Some(source);
        self.pending_starts += 1;
        self.loaded = false;
        self.failed = false;
    }

    fn file_started(&mut self) {
        self.pending_starts = self.pending_starts.saturating_sub(1);
    }

    fn file_loaded(&mut self) {
        self.loaded = self.pending_starts == 0;
    }

    fn file_ended(&mut self) -> Option<SourceId> {
        if self.pending_starts == 0 && self.loaded {
            self.loaded = false;
            self.current
        } else {
            None
        }
    }

    /// A source can fail before it ever reaches `FileLoaded`, so only the
    /// pending starts decide whether the failure is about the newest load.
    fn file_failed(&mut self) -> Option<SourceId> {
        if self.pending_starts == 0 && !self.failed {
            self.loaded = false;
            self.failed = true;
            self.current
        } else {
            None
        }
    }

    /// The source timing events can be attributed to, if any.
    fn live_source(&self) -> Option<SourceId> {
        self.current.filter(|_| self.loaded)
    }
}

fn spawn_surface_worker(
    options: MpvOptions,
    command_rx: Receiver<SurfaceCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = surface_worker(options, command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

fn surface_worker(
    options: MpvOptions,
    command_rx: Receiver<SurfaceCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", options.video_output.as_str())
            .context("Failed to set video output")?;
        builder
            .set_option("ytdl", "yes")
            .context("Failed to enable ytdl")?;
        if let Some(format) = options.ytdl_format.as_deref() {
            builder
                .set_option("ytdl-format", format)
                .context("Failed to set ytdl format")?;
        }
        builder
            .set_option("idle", "yes")
            .context("Failed to set idle mode")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;

    info!(vo = %options.video_output, "MPV media surface started");

    let mut tracker = LoadTracker::default();

    while process_commands(&mut handler, &command_rx, &mut tracker)? {
        process_mpv_events(&mut handler, &mut tracker, &event_tx)?;
    }

    info!("MPV media surface stopped");

    Ok(())
}

// Returns false once the surface handle has been dropped.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<SurfaceCommand>,
    tracker: &mut LoadTracker,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            SurfaceCommand::Load { url, source } => {
                debug!(%url, ?source, "Loading source");
                tracker.begin_load(source);
                handler
                    .command(&["loadfile", &url, "replace"])
                    .context(format!("Failed to load source: {}", &url))?;
            }
            SurfaceCommand::SetPlaying(playing) => {
                handler
                    .set_property("pause", !playing)
                    .context("Failed to set pause")?;
            }
            SurfaceCommand::SetVolume(volume) => {
                handler
                    .set_property("volume", (volume * 100.0).clamp(0.0, 100.0))
                    .context("Failed to set volume")?;
            }
            SurfaceCommand::SeekTo(seconds) => {
                // Seeking before the file is ready is rejected by mpv
                if let Err(e) = handler.command(&["seek", &seconds.to_string(), "absolute"]) {
                    warn!(seconds, "Seek rejected: {:?}", e);
                }
            }
        }
    }
}

fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    tracker: &mut LoadTracker,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let surface_event = match mpv_event {
            mpv::Event::StartFile => {
                tracker.file_started();
                None
            }
            mpv::Event::FileLoaded => {
                tracker.file_loaded();
                None
            }
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(total)) if total > 0.0 => tracker
                    .live_source()
                    .map(|source| SurfaceEvent::DurationKnown { source, total }),
                ("time-pos", Format::Double(elapsed)) if elapsed >= 0.0 => tracker
                    .live_source()
                    .map(|source| SurfaceEvent::TimeUpdate { source, elapsed }),
                _ => None,
            },
            mpv::Event::EndFile(result) => match result {
                Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => tracker
                    .file_ended()
                    .map(|source| SurfaceEvent::Ended { source }),
                // mpv reports errored files as `Err`, never as an `Ok` reason
                Err(e) => tracker.file_failed().map(|source| SurfaceEvent::Failed {
                    source,
                    message: format!("{:?}", e),
                }),
                _ => None,
            },
            _ => None,
        };

        if let Some(event) = surface_event {
            event_tx
                .send(AppEvent::Surface(event))
                .context("Failed to send surface event")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_before_the_newest_start_are_not_attributed() {
        let mut tracker = LoadTracker::default();
        tracker.begin_load(SourceId(1));
        tracker.file_started();
        tracker.file_loaded();
        assert_eq!(tracker.live_source(), Some(SourceId(1)));

        // A second load is issued before mpv has caught up
        tracker.begin_load(SourceId(2));
        assert_eq!(tracker.live_source(), None);
        assert_eq!(tracker.file_ended(), None);

        tracker.file_started();
        tracker.file_loaded();
        assert_eq!(tracker.live_source(), Some(SourceId(2)));
    }

    #[test]
    fn stale_file_loaded_does_not_unlock_new_source() {
        let mut tracker = LoadTracker::default();
        tracker.begin_load(SourceId(1));
        tracker.begin_load(SourceId(2));

        tracker.file_started();
        tracker.file_loaded();
        assert_eq!(tracker.live_source(), None);

        tracker.file_started();
        tracker.file_loaded();
        assert_eq!(tracker.live_source(), Some(SourceId(2)));
    }

    #[test]
    fn end_of_file_is_reported_once() {
        let mut tracker = LoadTracker::default();
        tracker.begin_load(SourceId(7));
        tracker.file_started();
        tracker.file_loaded();

        assert_eq!(tracker.file_ended(), Some(SourceId(7)));
        assert_eq!(tracker.file_ended(), None);
    }

    #[test]
    fn source_that_never_loads_is_reported_as_failed() {
        let mut tracker = LoadTracker::default();
        tracker.begin_load(SourceId(1));
        tracker.file_started();

        assert_eq!(tracker.file_ended(), None);
        assert_eq!(tracker.file_failed(), Some(SourceId(1)));
        assert_eq!(tracker.file_failed(), None);
        assert_eq!(tracker.live_source(), None);
    }

    #[test]
    fn failure_of_a_superseded_load_is_not_attributed() {
        let mut tracker = LoadTracker::default();
        tracker.begin_load(SourceId(1));
        tracker.begin_load(SourceId(2));

        tracker.file_started();
        assert_eq!(tracker.file_failed(), None);

        tracker.file_started();
        tracker.file_loaded();
        assert_eq!(tracker.file_failed(), Some(SourceId(2)));
    }
}
