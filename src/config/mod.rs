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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{playback::DEFAULT_VOLUME, surface::MpvOptions};

const CONFIG_NAME: &str = "mbrecords";

const LOG_FILE_NAME: &str = "player.log";

/// Which presentation of the player to draw.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LayoutMode {
    /// Pick by terminal width.
    #[default]
    Auto,
    Compact,
    Wide,
}

impl LayoutMode {
    /// The next mode in the `auto -> compact -> wide` cycle.
    pub(crate) fn cycle(self) -> Self {
        match self {
            LayoutMode::Auto => LayoutMode::Compact,
            LayoutMode::Compact => LayoutMode::Wide,
            LayoutMode::Wide => LayoutMode::Auto,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[error("initial_volume must be within 0.0..=1.0, got {0}")]
    VolumeOutOfRange(f64),
    #[error("wide_min_width must be greater than zero")]
    ZeroWideWidth,
    #[error("video_output must not be empty")]
    EmptyVideoOutput,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub version: u32,
    pub initial_volume: f64,
    pub layout: LayoutMode,
    /// Terminal width, in columns, from which the auto layout goes wide.
    pub wide_min_width: u16,
    /// mpv video output driver, `null` for audio only.
    pub video_output: String,
    pub ytdl_format: Option<String>,
    /// Filter directive for the log file, e.g. `info` or `mbrecords=debug`.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            initial_volume: DEFAULT_VOLUME,
            layout: LayoutMode::Auto,
            wide_min_width: 100,
            video_output: "auto".to_string(),
            ytdl_format: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(ConfigError::VolumeOutOfRange(self.initial_volume));
        }
        if self.wide_min_width == 0 {
            return Err(ConfigError::ZeroWideWidth);
        }
        if self.video_output.trim().is_empty() {
            return Err(ConfigError::EmptyVideoOutput);
        }
        Ok(())
    }

    pub(crate) fn mpv_options(&self) -> MpvOptions {
        MpvOptions {
            video_output: self.video_output.clone(),
            ytdl_format: self.ytdl_format.clone(),
        }
    }

    /// The configured log file, or one next to the configuration file.
    pub(crate) fn log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Loads the configuration file.
///
/// A missing or unreadable file yields the defaults, a file that can be read
/// but holds invalid values is reported as an error.
pub(crate) fn load_config() -> Result<AppConfig, ConfigError> {
    let config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.initial_volume, 0.7);
        assert_eq!(config.layout, LayoutMode::Auto);
    }

    #[test]
    fn out_of_range_volume_is_rejected() {
        let config = AppConfig {
            initial_volume: 1.5,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::VolumeOutOfRange(1.5)));
    }

    #[test]
    fn zero_wide_width_is_rejected() {
        let config = AppConfig {
            wide_min_width: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWideWidth));
    }

    #[test]
    fn config_round_trips_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let config = AppConfig {
            initial_volume: 0.25,
            layout: LayoutMode::Wide,
            video_output: "null".to_string(),
            ytdl_format: Some("bestaudio".to_string()),
            ..AppConfig::default()
        };
        confy::store_path(&path, &config).expect("store");

        let loaded: AppConfig = confy::load_path(&path).expect("load");
        assert_eq!(loaded, config);
        assert_eq!(loaded.mpv_options().ytdl_format.as_deref(), Some("bestaudio"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = \"compact\"\n").expect("write");

        let loaded: AppConfig = confy::load_path(&path).expect("load");
        assert_eq!(loaded.layout, LayoutMode::Compact);
        assert_eq!(loaded.wide_min_width, 100);
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/tmp/x.log")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn layout_cycles_through_all_modes() {
        assert_eq!(LayoutMode::Auto.cycle(), LayoutMode::Compact);
        assert_eq!(LayoutMode::Compact.cycle(), LayoutMode::Wide);
        assert_eq!(LayoutMode::Wide.cycle(), LayoutMode::Auto);
    }
}
