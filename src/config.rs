// SPDX-License-Identifier: GPL-3.0-only

use crate::capabilities::CameraFacing;
use crate::constants::{EXPORT_FILE_NAME, EXPORT_SUBDIR, RecordPreset, SHARE_MESSAGE};
use crate::errors::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Session configuration
///
/// The historical screen variants differed only in navigation plumbing
/// and in what they exported; those differences live here as settings
/// rather than as separate controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory export artifacts are written to
    pub export_dir: PathBuf,
    /// Export file name within the export directory
    pub export_file_name: String,
    /// Facing a fresh session starts with
    pub default_facing: CameraFacing,
    /// Which record shape export produces (Full or PreviewOnly)
    pub record_preset: RecordPreset,
    /// Bound on the platform capture call, in milliseconds
    ///
    /// `None` leaves the call unbounded, matching the original screens.
    pub capture_timeout_ms: Option<u64>,
    /// Message attached to the share sheet
    pub share_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: default_export_directory(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            default_facing: CameraFacing::default(), // Back, like the capture screen
            record_preset: RecordPreset::default(),  // Full schema
            capture_timeout_ms: None,                // Unbounded, like the original
            share_message: SHARE_MESSAGE.to_string(),
        }
    }
}

impl Config {
    /// Full path of the export artifact
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_file_name)
    }

    /// The capture bound as a `Duration`, if configured
    pub fn capture_timeout(&self) -> Option<Duration> {
        self.capture_timeout_ms.map(Duration::from_millis)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ScanResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|err| ScanError::Config(err.to_string()))
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> ScanResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|err| ScanError::Config(err.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Default export directory: `Documents/roomscan` under the user's home
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EXPORT_SUBDIR)
}
