use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::Settings;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CardFlipScanner";
const APP_NAME: &str = "CardFlipScanner";

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&settings_file()?)
}

pub fn save_settings(settings: &Settings) -> Result<(), PersistSaveError> {
    let path = settings_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_settings_to(&path, settings)
}

/// Missing or unreadable files yield `None` so callers fall back to defaults.
pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Settings>(&data) {
        Ok(settings) => {
            debug!(path = %path.display(), "loaded saved settings");
            Some(settings.sanitized())
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring corrupt settings file");
            None
        }
    }
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.set_grading_cost(34.5);
        settings.set_campaign_id("5338000000");
        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), Some(settings));
    }

    #[test]
    fn test_missing_or_corrupt_file_yields_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        assert_eq!(load_settings_from(&path), None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), None);
    }

    #[test]
    fn test_loaded_values_are_sanitized() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{"grading_cost": 1.0, "campaign_id": " "}"#).unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings, Settings {
            grading_cost: crate::domain::app_state::MIN_GRADING_COST,
            ..Settings::default()
        });
    }
}
