// SPDX-License-Identifier: MPL-2.0

//! Integration tests for record serialization and the filesystem exporter

use roomscan::capabilities::{ExportCapability, FsExporter, ShareMetadata};
use roomscan::pipelines::analysis::{RoomAnalyzer, StubRoomAnalyzer};
use roomscan::pipelines::export::serialize_record;
use roomscan::session::{PreviewRecord, RoomRecord};
use roomscan::{ExportError, ImageRef, RecordPreset};

fn sample_record() -> RoomRecord {
    let images = vec![ImageRef::new("img-1"), ImageRef::new("img-2")];
    let attributes = StubRoomAnalyzer.analyze(&images[0]);
    RoomRecord::with_timestamp(1_721_890_000_000, images, attributes)
}

#[test]
fn test_full_record_round_trips() {
    let record = sample_record();
    let bytes = serialize_record(&record, RecordPreset::Full).unwrap();
    let parsed: RoomRecord = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_preview_record_round_trips() {
    let record = sample_record();
    let bytes = serialize_record(&record, RecordPreset::PreviewOnly).unwrap();
    let parsed: PreviewRecord = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed.timestamp, record.timestamp);
    assert_eq!(Some(&parsed.preview), record.preview());
    assert_eq!(parsed.preview, ImageRef::new("img-2"));
}

#[test]
fn test_preview_preset_needs_at_least_one_image() {
    let attributes = StubRoomAnalyzer.analyze(&ImageRef::new("unused"));
    let empty = RoomRecord::with_timestamp(0, Vec::new(), attributes);
    assert_eq!(
        serialize_record(&empty, RecordPreset::PreviewOnly),
        Err(ExportError::NothingToExport)
    );
}

#[tokio::test]
async fn test_fs_exporter_writes_and_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("room_scan.json");
    let exporter = FsExporter::new().without_share();

    exporter.write(&path, b"{\"timestamp\":1}").await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"{\"timestamp\":1}");
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "no staging file left behind");
}

#[tokio::test]
async fn test_fs_exporter_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Export").join("Room.json");
    let exporter = FsExporter::new().without_share();

    exporter.write(&path, b"{}").await.unwrap();
    assert!(path.is_file());
}

#[tokio::test]
async fn test_fs_exporter_replaces_previous_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("room_scan.json");
    let exporter = FsExporter::new().without_share();

    exporter.write(&path, b"first").await.unwrap();
    exporter.write(&path, b"second").await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"second");
}

#[tokio::test]
async fn test_fs_exporter_share_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("room_scan.json");
    let exporter = FsExporter::new().without_share();

    exporter.write(&path, b"{}").await.unwrap();
    assert!(!exporter.is_share_available().await);
    assert_eq!(
        exporter.share(&path, &ShareMetadata::default()).await,
        Err(ExportError::ShareUnavailable)
    );
    // The written file stands regardless
    assert!(path.is_file());
}
