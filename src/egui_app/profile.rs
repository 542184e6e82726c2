//! Local user profile
//!
//! Remembers the display name between runs as a small TOML file under the
//! platform config directory (`<config_dir>/threadify/profile.toml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROFILE_DIR: &str = "threadify";
const PROFILE_FILE: &str = "profile.toml";

/// Profile persistence errors
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("profile I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode profile: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Persisted user profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Profile {
    /// Default profile location
    pub fn default_path() -> Result<PathBuf, ProfileError> {
        dirs::config_dir()
            .map(|dir| dir.join(PROFILE_DIR).join(PROFILE_FILE))
            .ok_or(ProfileError::NoConfigDir)
    }

    /// Load the profile from the default location.
    ///
    /// A missing file is an empty profile.
    pub fn load() -> Result<Self, ProfileError> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ProfileError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save the profile to the default location
    pub fn save(&self) -> Result<(), ProfileError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    /// Stored name, if non-blank
    pub fn name(&self) -> Option<&str> {
        self.user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn set_name(&mut self, name: &str) {
        let name = name.trim();
        self.user_name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }
}
