// SPDX-License-Identifier: GPL-3.0-only

//! Capture session controller
//!
//! Owns one [`Session`] plus the camera handle, and drives the full
//! lifecycle: permission gate, facing selection, capture, analysis,
//! export. The camera handle is held exclusively while the session is
//! scanning or processing and dropped the moment the session completes
//! or is cancelled.

use crate::capabilities::{
    CameraCapability, CameraFacing, CameraHandle, ExportCapability, ImageRef, PermissionStatus,
};
use crate::config::Config;
use crate::errors::{CaptureError, ExportError};
use crate::pipelines::analysis::{RoomAnalyzer, StubRoomAnalyzer};
use crate::pipelines::export::{ExportOutcome, export_record};
use crate::session::record::RoomRecord;
use crate::session::state::{ScanPhase, Session};
use tracing::{debug, info, warn};

/// Controller for one scan attempt
///
/// The UI host reads state through the accessors and invokes the four
/// operations; everything else (handle ownership, transition legality,
/// analyzer invocation) stays inside.
pub struct ScanController<C: CameraCapability, E: ExportCapability> {
    camera: C,
    exporter: E,
    analyzer: Box<dyn RoomAnalyzer>,
    config: Config,
    session: Session,
    handle: Option<C::Handle>,
}

impl<C: CameraCapability, E: ExportCapability> ScanController<C, E> {
    /// Build a controller with the stub analyzer
    pub fn new(camera: C, exporter: E, config: Config) -> Self {
        Self::with_analyzer(camera, exporter, config, Box::new(StubRoomAnalyzer))
    }

    /// Build a controller with a custom analyzer implementation
    pub fn with_analyzer(
        camera: C,
        exporter: E,
        config: Config,
        analyzer: Box<dyn RoomAnalyzer>,
    ) -> Self {
        let session = Session::new(config.default_facing);
        Self {
            camera,
            exporter,
            analyzer,
            config,
            session,
            handle: None,
        }
    }

    // ===== Read-only state for the presentation layer =====

    pub fn phase(&self) -> ScanPhase {
        self.session.phase()
    }

    pub fn facing(&self) -> CameraFacing {
        self.session.facing()
    }

    pub fn captured_images(&self) -> &[ImageRef] {
        self.session.captured_images()
    }

    pub fn room_data(&self) -> Option<&RoomRecord> {
        self.session.room_data()
    }

    // ===== Operations =====

    /// Ask the platform for camera permission
    ///
    /// Idempotent: once granted, later calls report `Granted` without
    /// touching the platform again. Denied leaves the session gated;
    /// the caller may invoke this again to retry, nothing retries
    /// automatically.
    pub async fn request_permission(&mut self) -> Result<PermissionStatus, CaptureError> {
        if self.session.phase() != ScanPhase::AwaitingPermission {
            debug!(
                phase = self.session.phase().display_name(),
                "Permission already resolved"
            );
            return Ok(PermissionStatus::Granted);
        }

        let status = self.camera.request_permission().await;
        if !status.is_granted() {
            info!("Camera permission denied, session stays gated");
            return Ok(PermissionStatus::Denied);
        }

        let handle = self.camera.open().await?;
        self.handle = Some(handle);
        self.session.grant();
        info!(
            facing = self.session.facing().display_name(),
            "Camera permission granted, scanning"
        );
        Ok(PermissionStatus::Granted)
    }

    /// Flip between front and back camera
    ///
    /// Pure state mutation, no I/O; ignored outside `Scanning`.
    pub fn toggle_facing(&mut self) -> bool {
        let flipped = self.session.toggle_facing();
        if flipped {
            info!(
                facing = self.session.facing().display_name(),
                "Camera facing toggled"
            );
        } else {
            debug!(
                phase = self.session.phase().display_name(),
                "Facing toggle ignored outside scanning"
            );
        }
        flipped
    }

    /// Capture one image and derive the room record
    ///
    /// Marks the session `Processing` before suspending, so a second
    /// capture against the same session fails with `AlreadyInFlight`
    /// rather than racing. On success the camera handle is released and
    /// the session completes; on failure or timeout the session reverts
    /// to `Scanning` with no partial state.
    pub async fn capture(&mut self) -> Result<ImageRef, CaptureError> {
        let facing = self.session.facing();
        let Some(handle) = self.handle.as_mut() else {
            return Err(CaptureError::Unavailable);
        };
        self.session.begin_capture()?;

        info!(facing = facing.display_name(), "Capturing room image");
        let result = match self.config.capture_timeout() {
            Some(timeout) => match tokio::time::timeout(timeout, handle.capture(facing)).await {
                Ok(result) => result,
                Err(_) => Err(CaptureError::TimedOut(timeout.as_millis() as u64)),
            },
            // The original left platform calls unbounded; None keeps that.
            None => handle.capture(facing).await,
        };

        match result {
            Ok(image) => {
                let attributes = self.analyzer.analyze(&image);
                let timestamp = self
                    .session
                    .finish_capture(image.clone(), attributes)
                    .timestamp;
                info!(
                    image = %image,
                    timestamp,
                    captured = self.session.captured_images().len(),
                    "Capture complete, record derived"
                );
                // Session is complete; release the camera.
                self.handle = None;
                Ok(image)
            }
            Err(err) => {
                warn!(error = %err, "Capture failed, reverting to scanning");
                self.session.fail_capture();
                Err(err)
            }
        }
    }

    /// Serialize and export the completed record
    ///
    /// Read-only with respect to the session; may be invoked repeatedly
    /// and performs a fresh write-and-share each time.
    pub async fn export(&self) -> Result<ExportOutcome, ExportError> {
        let Some(record) = self.session.room_data() else {
            warn!(
                phase = self.session.phase().display_name(),
                "Export requested before any completed capture"
            );
            return Err(ExportError::NothingToExport);
        };
        export_record(&self.exporter, record, &self.config).await
    }

    /// Discard the session entirely
    ///
    /// Consumes the controller, releasing the camera handle and every
    /// piece of session state. There is no partial reuse.
    pub fn cancel(self) {
        info!(
            phase = self.session.phase().display_name(),
            captured = self.session.captured_images().len(),
            "Session cancelled"
        );
    }
}
