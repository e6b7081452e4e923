// SPDX-License-Identifier: MPL-2.0

//! End-to-end controller scenarios over scripted capabilities

use roomscan::capabilities::testing::{MemoryExporter, ScriptedCamera, ScriptedCapture};
use roomscan::{
    CaptureError, Config, ExportError, ImageRef, PermissionStatus, RecordPreset, ScanController,
    ScanPhase,
};
use std::path::PathBuf;

fn test_config() -> Config {
    Config {
        export_dir: PathBuf::from("/exports"),
        ..Config::default()
    }
}

fn resolve(uri: &str) -> ScriptedCapture {
    ScriptedCapture::Resolve(ImageRef::new(uri))
}

#[tokio::test]
async fn test_denied_permission_keeps_session_gated() {
    let camera = ScriptedCamera::denied();
    let mut controller = ScanController::new(camera, MemoryExporter::new(), test_config());

    let status = controller.request_permission().await.unwrap();
    assert_eq!(status, PermissionStatus::Denied);
    assert_eq!(controller.phase(), ScanPhase::AwaitingPermission);

    // No handle was ever opened, so capture is unavailable
    assert_eq!(
        controller.capture().await,
        Err(CaptureError::Unavailable)
    );
}

#[tokio::test]
async fn test_permission_grant_is_idempotent() {
    let camera = ScriptedCamera::granted(vec![]);
    let mut controller = ScanController::new(camera, MemoryExporter::new(), test_config());

    assert_eq!(
        controller.request_permission().await.unwrap(),
        PermissionStatus::Granted
    );
    assert_eq!(controller.phase(), ScanPhase::Scanning);

    // Second request resolves without touching the platform again
    assert_eq!(
        controller.request_permission().await.unwrap(),
        PermissionStatus::Granted
    );
    assert_eq!(controller.phase(), ScanPhase::Scanning);
}

#[tokio::test]
async fn test_capture_and_export_full_flow() {
    let camera = ScriptedCamera::granted(vec![resolve("img-1")]);
    let exporter = MemoryExporter::new();
    let config = test_config();
    let export_path = config.export_path();
    let mut controller = ScanController::new(camera, exporter.clone(), config);

    controller.request_permission().await.unwrap();
    let image = controller.capture().await.unwrap();
    assert_eq!(image, ImageRef::new("img-1"));
    assert_eq!(controller.phase(), ScanPhase::Complete);
    assert_eq!(controller.captured_images().len(), 1);

    let record = controller.room_data().expect("record derived");
    assert_eq!(record.attributes.dimensions, "4m x 5m");

    let outcome = controller.export().await.unwrap();
    assert_eq!(outcome.path, export_path);
    assert!(outcome.shared);

    let (path, bytes) = exporter.last_write().expect("one write");
    assert_eq!(path, export_path);
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["images"], serde_json::json!(["img-1"]));
    assert_eq!(json["dimensions"], "4m x 5m");
    assert_eq!(json["roomColor"], "White");
    assert_eq!(exporter.shared_paths(), vec![export_path]);
}

#[tokio::test]
async fn test_export_before_capture_writes_nothing() {
    let camera = ScriptedCamera::granted(vec![]);
    let exporter = MemoryExporter::new();
    let mut controller = ScanController::new(camera, exporter.clone(), test_config());

    controller.request_permission().await.unwrap();
    assert_eq!(
        controller.export().await,
        Err(ExportError::NothingToExport)
    );
    assert_eq!(exporter.write_count(), 0);
}

#[tokio::test]
async fn test_capture_failure_reverts_then_recovers() {
    let camera = ScriptedCamera::granted(vec![
        ScriptedCapture::Fail(CaptureError::Failed("sensor fault".to_string())),
        resolve("img-2"),
    ]);
    let mut controller = ScanController::new(camera, MemoryExporter::new(), test_config());

    controller.request_permission().await.unwrap();
    let err = controller.capture().await.unwrap_err();
    assert_eq!(err, CaptureError::Failed("sensor fault".to_string()));
    assert_eq!(controller.phase(), ScanPhase::Scanning);
    assert!(controller.captured_images().is_empty());
    assert!(controller.room_data().is_none());

    // Same session, next capture succeeds normally
    controller.capture().await.unwrap();
    assert_eq!(controller.phase(), ScanPhase::Complete);
    assert_eq!(controller.captured_images().len(), 1);
}

#[tokio::test]
async fn test_capture_timeout_takes_failure_path() {
    let camera = ScriptedCamera::granted(vec![ScriptedCapture::Hang, resolve("img-3")]);
    let config = Config {
        capture_timeout_ms: Some(25),
        ..test_config()
    };
    let mut controller = ScanController::new(camera, MemoryExporter::new(), config);

    controller.request_permission().await.unwrap();
    assert_eq!(
        controller.capture().await,
        Err(CaptureError::TimedOut(25))
    );
    assert_eq!(controller.phase(), ScanPhase::Scanning);
    assert!(controller.captured_images().is_empty());

    controller.capture().await.unwrap();
    assert_eq!(controller.phase(), ScanPhase::Complete);
}

#[tokio::test]
async fn test_capture_after_complete_is_unavailable() {
    let camera = ScriptedCamera::granted(vec![resolve("img-1"), resolve("img-never")]);
    let mut controller = ScanController::new(camera, MemoryExporter::new(), test_config());

    controller.request_permission().await.unwrap();
    controller.capture().await.unwrap();

    // The handle is released on completion
    assert_eq!(
        controller.capture().await,
        Err(CaptureError::Unavailable)
    );
    assert_eq!(controller.captured_images().len(), 1);
}

#[tokio::test]
async fn test_toggle_facing_only_while_scanning() {
    let camera = ScriptedCamera::granted(vec![resolve("img-1")]);
    let mut controller = ScanController::new(camera, MemoryExporter::new(), test_config());

    assert!(!controller.toggle_facing());

    controller.request_permission().await.unwrap();
    assert!(controller.toggle_facing());
    assert!(controller.toggle_facing());

    controller.capture().await.unwrap();
    assert!(!controller.toggle_facing());
}

#[tokio::test]
async fn test_share_unavailable_export_still_succeeds() {
    let camera = ScriptedCamera::granted(vec![resolve("img-1")]);
    let exporter = MemoryExporter::new().without_share();
    let mut controller = ScanController::new(camera, exporter.clone(), test_config());

    controller.request_permission().await.unwrap();
    controller.capture().await.unwrap();

    let outcome = controller.export().await.unwrap();
    assert!(!outcome.shared);
    assert_eq!(exporter.write_count(), 1);
    assert!(exporter.shared_paths().is_empty());
}

#[tokio::test]
async fn test_failing_share_does_not_undo_the_write() {
    let camera = ScriptedCamera::granted(vec![resolve("img-1")]);
    let exporter = MemoryExporter::new().with_failing_share();
    let mut controller = ScanController::new(camera, exporter.clone(), test_config());

    controller.request_permission().await.unwrap();
    controller.capture().await.unwrap();

    let outcome = controller.export().await.unwrap();
    assert!(!outcome.shared);
    assert_eq!(exporter.write_count(), 1);
}

#[tokio::test]
async fn test_repeated_export_writes_every_time() {
    let camera = ScriptedCamera::granted(vec![resolve("img-1")]);
    let exporter = MemoryExporter::new();
    let mut controller = ScanController::new(camera, exporter.clone(), test_config());

    controller.request_permission().await.unwrap();
    controller.capture().await.unwrap();
    let first = controller.room_data().cloned();

    controller.export().await.unwrap();
    controller.export().await.unwrap();
    assert_eq!(exporter.write_count(), 2);

    // Export never mutates the session
    assert_eq!(controller.room_data().cloned(), first);
    assert_eq!(controller.phase(), ScanPhase::Complete);
}

#[tokio::test]
async fn test_preview_preset_exports_minimal_schema() {
    let camera = ScriptedCamera::granted(vec![resolve("img-1")]);
    let exporter = MemoryExporter::new();
    let config = Config {
        record_preset: RecordPreset::PreviewOnly,
        ..test_config()
    };
    let mut controller = ScanController::new(camera, exporter.clone(), config);

    controller.request_permission().await.unwrap();
    controller.capture().await.unwrap();
    controller.export().await.unwrap();

    let (_, bytes) = exporter.last_write().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["preview"], "img-1");
    assert!(json.get("roomColor").is_none());
    assert!(json.get("images").is_none());
}
