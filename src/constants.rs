// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use serde::{Deserialize, Serialize};

/// Record export presets
///
/// The capture screen historically shipped in several variants that
/// exported different field sets. These presets select which shape a
/// session exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordPreset {
    /// Full record - timestamp, every captured image, and room attributes (default)
    #[default]
    Full,
    /// Preview record - timestamp and the most recent image only, no attributes
    PreviewOnly,
}

impl RecordPreset {
    /// Get all preset variants for UI iteration
    pub const ALL: [RecordPreset; 2] = [RecordPreset::Full, RecordPreset::PreviewOnly];

    /// Get display name for the preset
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordPreset::Full => "Full",
            RecordPreset::PreviewOnly => "Preview only",
        }
    }
}

/// Default export file name, next to the original screen's output
pub const EXPORT_FILE_NAME: &str = "room_scan.json";

/// Message attached to the share sheet when handing off an export
pub const SHARE_MESSAGE: &str = "Room Capture Data";

/// MIME type of the export artifact
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Subdirectory under the user's documents directory for exports
pub const EXPORT_SUBDIR: &str = "roomscan";

// Placeholder attribute values returned by the stub analyzer.
// These are fixtures standing in for real feature detection, not a
// description of any room.
pub const STUB_ROOM_COLOR: &str = "White";
pub const STUB_LIGHTING: &str = "Bright";
pub const STUB_DIMENSIONS: &str = "4m x 5m";
pub const STUB_FEATURES: [&str; 3] = ["Window", "Door", "Ceiling Light"];
