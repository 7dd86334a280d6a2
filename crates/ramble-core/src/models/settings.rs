//! Application settings model

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the card shows its copy confirmation
const COPY_NOTICE: Duration = Duration::from_millis(1500);

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Length of the simulated recording, in milliseconds
    pub recording_ms: u64,
    /// Length of the simulated transcription, in milliseconds
    pub transcription_ms: u64,
    /// Full length of the card flip animation, in milliseconds
    pub flip_ms: u64,
    /// Theme mode
    pub theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recording_ms: 3000,
            transcription_ms: 2000,
            flip_ms: 700,
            theme: ThemeMode::System,
        }
    }
}

impl Settings {
    /// Timer lengths used by the recording card
    #[must_use]
    pub const fn card_timings(&self) -> CardTimings {
        CardTimings {
            recording: Duration::from_millis(self.recording_ms),
            transcription: Duration::from_millis(self.transcription_ms),
            flip: Duration::from_millis(self.flip_ms),
            copy_notice: COPY_NOTICE,
        }
    }
}

/// Durations driving the recording card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTimings {
    pub recording: Duration,
    pub transcription: Duration,
    /// Whole flip; the face swaps at the midpoint
    pub flip: Duration,
    pub copy_notice: Duration,
}

impl CardTimings {
    /// When the visible face swaps during a flip
    #[must_use]
    pub fn flip_midpoint(&self) -> Duration {
        self.flip / 2
    }
}

impl Default for CardTimings {
    fn default() -> Self {
        Settings::default().card_timings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.recording_ms, 3000);
        assert_eq!(settings.theme, ThemeMode::System);
    }

    #[test]
    fn test_flip_midpoint_is_half() {
        let timings = CardTimings::default();
        assert_eq!(timings.flip_midpoint(), Duration::from_millis(350));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.transcription_ms, 2000);
    }
}
