// SPDX-License-Identifier: GPL-3.0-only

//! The exported scan artifact

use crate::capabilities::ImageRef;
use crate::pipelines::analysis::RoomAttributes;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Record describing a completed scan
///
/// Built exactly once per session, when the capture resolves, and
/// immutable afterwards. Serializes to the canonical export schema with
/// the attributes inlined at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Capture completion time, epoch milliseconds
    pub timestamp: i64,
    /// Every captured image reference, in capture order
    pub images: Vec<ImageRef>,
    /// Derived room attributes
    #[serde(flatten)]
    pub attributes: RoomAttributes,
}

impl RoomRecord {
    /// Build a record stamped with the current time
    pub fn new(images: Vec<ImageRef>, attributes: RoomAttributes) -> Self {
        Self::with_timestamp(Utc::now().timestamp_millis(), images, attributes)
    }

    /// Build a record with an explicit timestamp
    pub fn with_timestamp(timestamp: i64, images: Vec<ImageRef>, attributes: RoomAttributes) -> Self {
        Self {
            timestamp,
            images,
            attributes,
        }
    }

    /// The most recent image reference
    pub fn preview(&self) -> Option<&ImageRef> {
        self.images.last()
    }
}

/// Degenerate export shape: timestamp and latest image only
///
/// Matches the leanest of the historical screen variants; selected via
/// [`crate::constants::RecordPreset::PreviewOnly`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRecord {
    pub timestamp: i64,
    pub preview: ImageRef,
}
