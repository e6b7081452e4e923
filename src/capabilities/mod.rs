// SPDX-License-Identifier: GPL-3.0-only

//! Platform capability abstraction
//!
//! The session core never talks to a camera or a share sheet directly.
//! It consumes two trait seams implemented by platform adapters:
//!
//! ```text
//! ┌─────────────────────┐
//! │  UI Host (screen)   │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │   ScanController    │  ← Session lifecycle, phase transitions
//! └─────┬─────────┬─────┘
//!       │         │
//!       ▼         ▼
//! ┌──────────┐ ┌──────────────┐
//! │  Camera  │ │    Export    │  ← Capability traits
//! │Capability│ │  Capability  │
//! └──────────┘ └──────────────┘
//! ```
//!
//! Adapters in this crate: [`StaticCamera`] (file-source style camera),
//! [`FsExporter`] (filesystem write + desktop share), and scripted
//! doubles in [`testing`].

pub mod fs_export;
pub mod static_camera;
pub mod testing;

pub use fs_export::FsExporter;
pub use static_camera::StaticCamera;

use crate::errors::{CaptureError, ExportError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of a camera permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Permission granted; a camera handle may be opened
    Granted,
    /// Permission denied; the session stays gated
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Camera facing selector
///
/// The core does not manage camera configuration beyond this; focus,
/// resolution and format negotiation belong to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    Front,
    /// Rear camera (default, matching the capture screen)
    #[default]
    Back,
}

impl CameraFacing {
    /// The opposite facing
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back => CameraFacing::Front,
        }
    }

    /// Get display name for the facing
    pub fn display_name(&self) -> &'static str {
        match self {
            CameraFacing::Front => "front",
            CameraFacing::Back => "back",
        }
    }
}

/// Opaque reference to a captured image (URI or platform handle)
///
/// The core never dereferences the URI; it only records capture order
/// and forwards references into the export artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        ImageRef(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata handed to the share sheet alongside the exported file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMetadata {
    /// Human-readable message shown by the share UI
    pub message: String,
    /// MIME type of the shared file
    pub mime_type: String,
}

impl Default for ShareMetadata {
    fn default() -> Self {
        Self {
            message: crate::constants::SHARE_MESSAGE.to_string(),
            mime_type: crate::constants::EXPORT_MIME_TYPE.to_string(),
        }
    }
}

/// Camera capability consumed by the session controller
///
/// Contract:
/// - `request_permission` is idempotent and may be invoked repeatedly
/// - `open` yields an exclusive handle; it fails with
///   [`CaptureError::PermissionDenied`] when permission was never granted
#[allow(async_fn_in_trait)]
pub trait CameraCapability {
    type Handle: CameraHandle;

    /// Ask the platform for camera permission
    async fn request_permission(&self) -> PermissionStatus;

    /// Open an exclusive camera handle for this session
    async fn open(&self) -> Result<Self::Handle, CaptureError>;
}

/// Exclusive camera handle held while a session is scanning
///
/// The controller owns the handle from permission grant until the
/// session completes or is cancelled; dropping it releases the camera.
#[allow(async_fn_in_trait)]
pub trait CameraHandle {
    /// Capture a single image with the given facing
    async fn capture(&mut self, facing: CameraFacing) -> Result<ImageRef, CaptureError>;
}

/// Export capability consumed by the export pipeline
///
/// Contract:
/// - `write` must be atomic from the caller's perspective: on failure no
///   partial file replaces a previous successful export
/// - `share` is best-effort; unavailability never undoes a write
#[allow(async_fn_in_trait)]
pub trait ExportCapability {
    /// Write the export artifact to `path`
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ExportError>;

    /// Whether the platform share sheet can be invoked at all
    async fn is_share_available(&self) -> bool;

    /// Hand the written file to the platform share sheet
    async fn share(&self, path: &Path, metadata: &ShareMetadata) -> Result<(), ExportError>;
}
