use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::face_selection::FaceSelection;
use crate::shared::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Eye-line height as a fraction of the face box height, measured from the
/// top. Empirical: detector face boxes include the forehead, so the eyes sit
/// a little above the middle. Tunable, not an invariant.
pub const DEFAULT_EYE_LINE_OFFSET: f64 = 0.37;

/// Multiplier applied to the face width before normalization. Identity by
/// default; a cosmetic widening (frames sit slightly wider than the face)
/// belongs here rather than in the core formula.
pub const DEFAULT_WIDTH_FACTOR: f64 = 1.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("eye line offset must be between 0.0 and 1.0, got {0}")]
    EyeLineOffset(f64),
    #[error("width factor must be positive and finite, got {0}")]
    WidthFactor(f64),
}

/// Tunable parameters of the placement calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub face_selection: FaceSelection,
    pub eye_line_offset: f64,
    pub width_factor: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            face_selection: FaceSelection::First,
            eye_line_offset: DEFAULT_EYE_LINE_OFFSET,
            width_factor: DEFAULT_WIDTH_FACTOR,
        }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.eye_line_offset) {
            return Err(ConfigError::EyeLineOffset(self.eye_line_offset));
        }
        if !self.width_factor.is_finite() || self.width_factor <= 0.0 {
            return Err(ConfigError::WidthFactor(self.width_factor));
        }
        Ok(())
    }

    /// Loads and validates a JSON config. Missing keys take default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the per-user config if one exists, otherwise defaults.
    ///
    /// An unreadable or invalid user config is logged and ignored.
    pub fn load_default() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring user config: {e}");
                Self::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
