use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{AirtimeError, Result};

/// Player defaults applied when a listening surface creates a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Output volume on session creation, as a fraction in `0.0..=1.0`.
    pub default_volume: f64,

    /// Whether output starts muted.
    pub default_muted: bool,

    /// Whether repeat-on-end starts enabled.
    pub repeat: bool,

    /// Whether shuffled advancement starts enabled.
    pub shuffle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.8,
            default_muted: false,
            repeat: false,
            shuffle: false,
        }
    }
}

impl PlayerConfig {
    /// Loads player defaults from a TOML file.
    ///
    /// A missing file is not an error; the built-in defaults are returned so
    /// a surface without local configuration still gets a working player.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if its
    /// content is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AirtimeError::toml_parse(e, Some(path)))
    }
}
