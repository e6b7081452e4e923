// SPDX-License-Identifier: GPL-3.0-only

//! Export pipeline
//!
//! Serializes a completed room record and hands it to the export
//! capability: one atomic file write, then a best-effort share. Export
//! never mutates session state, so callers may repeat it; every call
//! performs a fresh write-and-share.

use crate::capabilities::{ExportCapability, ShareMetadata};
use crate::config::Config;
use crate::constants::{EXPORT_MIME_TYPE, RecordPreset};
use crate::errors::ExportError;
use crate::session::record::{PreviewRecord, RoomRecord};
use std::path::PathBuf;
use tracing::{info, warn};

/// What an export call actually did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Where the artifact was written
    pub path: PathBuf,
    /// Size of the serialized record
    pub bytes_written: usize,
    /// Whether the share hand-off happened (false when share is
    /// unavailable or failed; the write still stands)
    pub shared: bool,
}

/// Serialize a record according to the preset
///
/// `Full` is the canonical schema; `PreviewOnly` degrades to the
/// timestamp plus the most recent image reference.
pub fn serialize_record(record: &RoomRecord, preset: RecordPreset) -> Result<Vec<u8>, ExportError> {
    match preset {
        RecordPreset::Full => Ok(serde_json::to_vec(record)?),
        RecordPreset::PreviewOnly => {
            let preview = record
                .preview()
                .cloned()
                .ok_or(ExportError::NothingToExport)?;
            let minimal = PreviewRecord {
                timestamp: record.timestamp,
                preview,
            };
            Ok(serde_json::to_vec(&minimal)?)
        }
    }
}

/// Write the record through the export capability and offer it to the
/// share sheet
pub async fn export_record<E: ExportCapability>(
    exporter: &E,
    record: &RoomRecord,
    config: &Config,
) -> Result<ExportOutcome, ExportError> {
    let bytes = serialize_record(record, config.record_preset)?;
    let path = config.export_path();

    exporter.write(&path, &bytes).await?;

    let metadata = ShareMetadata {
        message: config.share_message.clone(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
    };

    let shared = if exporter.is_share_available().await {
        match exporter.share(&path, &metadata).await {
            Ok(()) => true,
            Err(err) => {
                // Share is best-effort; the written file stands.
                warn!(error = %err, path = %path.display(), "Share hand-off failed");
                false
            }
        }
    } else {
        info!(path = %path.display(), "Share unavailable, export written without hand-off");
        false
    };

    info!(
        path = %path.display(),
        bytes = bytes.len(),
        shared,
        "Room record exported"
    );

    Ok(ExportOutcome {
        path,
        bytes_written: bytes.len(),
        shared,
    })
}
