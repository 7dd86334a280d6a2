//! Settings file loading.
//!
//! Settings live in `<config dir>/ramble/settings.json`. Every field is
//! optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Settings;

const APP_DIR: &str = "ramble";
const SETTINGS_FILE: &str = "settings.json";

/// Location of the settings file under a platform config directory
#[must_use]
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR).join(SETTINGS_FILE)
}

/// Load settings from `path`, falling back to defaults when the file does
/// not exist.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let payload = match std::fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(error) => return Err(error.into()),
    };
    parse_settings(&payload)
}

/// Parse and validate a settings payload.
pub fn parse_settings(payload: &str) -> Result<Settings> {
    if payload.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_json::from_str(payload)?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<()> {
    if settings.flip_ms < 2 {
        return Err(Error::Config(format!(
            "flip_ms must be at least 2 (got {})",
            settings.flip_ms
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = settings_path(dir.path());
        assert_eq!(load_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = settings_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "recording_ms": 500, "theme": "light" }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.recording_ms, 500);
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.flip_ms, 700);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = parse_settings("{ not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn rejects_degenerate_flip() {
        let err = parse_settings(r#"{ "flip_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(message) if message.contains("flip_ms")));
    }

    #[test]
    fn settings_path_is_namespaced() {
        let path = settings_path(Path::new("/tmp/config"));
        assert_eq!(path, PathBuf::from("/tmp/config/ramble/settings.json"));
    }
}
