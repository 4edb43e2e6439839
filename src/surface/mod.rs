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

//! The media surface.
//!
//! The media surface is whatever actually decodes and plays a track. The rest
//! of the application only drives it through [`MediaSurface`] and listens to
//! the [`SurfaceEvent`]s it sends back, it never reads playback state from
//! it.

mod mpv;

pub(crate) use mpv::{MpvOptions, MpvSurface};

use thiserror::Error;

use crate::playback::SourceId;

#[derive(Debug, Error)]
pub(crate) enum SurfaceError {
    #[error("media surface worker is not running")]
    Disconnected,
}

/// Instructions for the media surface, produced by the controller.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SurfaceCommand {
    /// Replace the current source, it stays paused until told to play.
    Load { url: String, source: SourceId },
    SetPlaying(bool),
    /// Volume in `[0, 1]`.
    SetVolume(f64),
    /// Absolute position in seconds.
    SeekTo(f64),
}

/// Notifications from the media surface, each tagged with the load it
/// belongs to.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SurfaceEvent {
    TimeUpdate { source: SourceId, elapsed: f64 },
    DurationKnown { source: SourceId, total: f64 },
    Ended { source: SourceId },
    Failed { source: SourceId, message: String },
}

pub(crate) trait MediaSurface {
    fn load(&self, url: &str, source: SourceId) -> Result<(), SurfaceError>;
    fn set_playing(&self, playing: bool) -> Result<(), SurfaceError>;
    fn set_volume(&self, volume: f64) -> Result<(), SurfaceError>;
    fn seek_to(&self, seconds: f64) -> Result<(), SurfaceError>;
}

/// Sends a batch of commands to a surface, in order.
pub(crate) fn apply<S: MediaSurface + ?Sized>(
    surface: &S,
    commands: &[SurfaceCommand],
) -> Result<(), SurfaceError> {
    for command in commands {
        match command {
            SurfaceCommand::Load { url, source } => surface.load(url, *source)?,
            SurfaceCommand::SetPlaying(playing) => surface.set_playing(*playing)?,
            SurfaceCommand::SetVolume(volume) => surface.set_volume(*volume)?,
            SurfaceCommand::SeekTo(seconds) => surface.seek_to(*seconds)?,
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// A surface that records what it was asked to do.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) commands: RefCell<Vec<SurfaceCommand>>,
    }

    impl RecordingSurface {
        pub(crate) fn take(&self) -> Vec<SurfaceCommand> {
            self.commands.take()
        }
    }

    impl MediaSurface for RecordingSurface {
        fn load(&self, url: &str, source: SourceId) -> Result<(), SurfaceError> {
            self.commands.borrow_mut().push(SurfaceCommand::Load {
                url: url.to_string(),
                source,
            });
            Ok(())
        }

        fn set_playing(&self, playing: bool) -> Result<(), SurfaceError> {
            self.commands
                .borrow_mut()
                .push(SurfaceCommand::SetPlaying(playing));
            Ok(())
        }

        fn set_volume(&self, volume: f64) -> Result<(), SurfaceError> {
            self.commands
                .borrow_mut()
                .push(SurfaceCommand::SetVolume(volume));
            Ok(())
        }

        fn seek_to(&self, seconds: f64) -> Result<(), SurfaceError> {
            self.commands
                .borrow_mut()
                .push(SurfaceCommand::SeekTo(seconds));
            Ok(())
        }
    }

    // Lets a test keep a handle on a surface it has boxed up for the app.
    impl MediaSurface for Rc<RecordingSurface> {
        fn load(&self, url: &str, source: SourceId) -> Result<(), SurfaceError> {
            self.as_ref().load(url, source)
        }

        fn set_playing(&self, playing: bool) -> Result<(), SurfaceError> {
            self.as_ref().set_playing(playing)
        }

        fn set_volume(&self, volume: f64) -> Result<(), SurfaceError> {
            self.as_ref().set_volume(volume)
        }

        fn seek_to(&self, seconds: f64) -> Result<(), SurfaceError> {
            self.as_ref().seek_to(seconds)
        }
    }

    #[test]
    fn apply_forwards_commands_in_order() {
        let surface = RecordingSurface::default();
        let commands = vec![
            SurfaceCommand::Load {
                url: "https://example.com/a".into(),
                source: SourceId(4),
            },
            SurfaceCommand::SetPlaying(true),
            SurfaceCommand::SetVolume(0.25),
            SurfaceCommand::SeekTo(12.0),
        ];

        apply(&surface, &commands).expect("recording never fails");

        assert_eq!(surface.take(), commands);
    }
}
