//! User settings for TripSplit
//!
//! Holds the trip roster and display preferences. The roster lives here
//! rather than being derived from expense data.

use serde::{Deserialize, Serialize};

use super::paths::TripPaths;
use crate::error::SplitError;
use crate::models::{Participant, Roster};

/// User settings for TripSplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code shown after amounts
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Ordered list of trip participants
    #[serde(default = "default_roster")]
    pub roster: Vec<Participant>,

    /// Whether `init` has been run
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    "THB".to_string()
}

fn default_roster() -> Vec<Participant> {
    vec![
        Participant::new("A", "Andy"),
        Participant::new("B", "Coco"),
        Participant::new("C", "Pei"),
        Participant::new("D", "Jie"),
        Participant::new("E", "Tina"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency_code(),
            roster: default_roster(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Validated roster built from the configured participant list
    pub fn roster(&self) -> Result<Roster, SplitError> {
        Roster::new(self.roster.clone())
            .map_err(|e| SplitError::Config(format!("Invalid roster: {}", e)))
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TripPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TripPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
