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

//! The track catalog.
//!
//! This module defines the fixed, ordered set of tracks the player knows
//! about. Order matters: it is the display order of the playlist and the
//! order used when skipping forwards and backwards.

use std::collections::HashSet;

use thiserror::Error;

pub(crate) const BRAND: &str = "MagicBlock Records";
pub(crate) const CREDIT: &str = "Created by Agrobaks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Track {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    /// Display label only, the live duration comes from the media surface.
    pub duration: &'static str,
    pub video_url: &'static str,
    pub cover_url: &'static str,
    pub title_url: &'static str,
    pub prototype: &'static str,
}

pub(crate) static TRACKS: [Track; 3] = [
    Track {
        id: 1,
        title: "Fast & Furious. Smooth. On-chain",
        artist: "MagicBlock",
        duration: "2:07",
        video_url: "https://www.youtube.com/watch?v=MI1hEPVODbA",
        cover_url: "assets/cover1.jpg",
        title_url: "assets/title1.jpg",
        prototype: "Luis Fonsi – Despacito",
    },
    Track {
        id: 2,
        title: "Magic Moments",
        artist: "MagicBlock",
        duration: "2:34",
        video_url: "https://www.youtube.com/watch?v=ZmNj2tOAy5U",
        cover_url: "assets/cover2.jpg",
        title_url: "assets/title2.jpg",
        prototype: "Perry Como – Magic Moments",
    },
    Track {
        id: 3,
        title: "Fast, Loud & On-Chain!",
        artist: "MagicBlock",
        duration: "2:07",
        video_url: "https://www.youtube.com/watch?v=oG1mDdZwQj0",
        cover_url: "assets/cover3.jpg",
        title_url: "assets/title3.jpg",
        prototype: "The Offspring – The Kids Aren't Alright",
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CatalogError {
    #[error("catalog has no tracks")]
    Empty,
    #[error("duplicate track id {0}")]
    DuplicateId(u32),
}

/// A validated, immutable view over a static track table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Catalog {
    tracks: &'static [Track],
}

impl Catalog {
    /// Wraps a track table, checking it is non-empty and has unique ids.
    pub(crate) fn new(tracks: &'static [Track]) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(tracks.len());
        for track in tracks {
            if !seen.insert(track.id) {
                return Err(CatalogError::DuplicateId(track.id));
            }
        }

        Ok(Self { tracks })
    }

    /// The built-in catalog.
    pub(crate) fn builtin() -> Result<Self, CatalogError> {
        Self::new(&TRACKS)
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'static Track> {
        self.tracks.get(index)
    }

    pub(crate) fn tracks(&self) -> &'static [Track] {
        self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(1).map(|t| t.title), Some("Magic Moments"));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(&[]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dupes: &'static [Track] = Box::leak(Box::new([TRACKS[0], TRACKS[0]]));
        assert_eq!(
            Catalog::new(dupes).unwrap_err(),
            CatalogError::DuplicateId(1)
        );
    }
}
