// SPDX-License-Identifier: MPL-2.0

//! Roomscan - the capture-session core of a room scanning feature
//!
//! This library owns the scan lifecycle: permission gate, camera facing
//! selection, photo capture, derivation of a room-data record, and JSON
//! export through the platform share sheet. Rendering and navigation
//! belong to the embedding UI host, which reads session state and
//! invokes the operations.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`session`]: Session state machine and capture controller
//! - [`capabilities`]: Camera and export capability traits plus adapters
//! - [`pipelines`]: Analysis seam and export pipeline
//! - [`config`]: Session configuration handling
//!
//! # Example
//!
//! ```no_run
//! use roomscan::capabilities::{FsExporter, StaticCamera};
//! use roomscan::{Config, ScanController};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = ScanController::new(
//!     StaticCamera::synthetic(),
//!     FsExporter::new(),
//!     Config::default(),
//! );
//! controller.request_permission().await?;
//! controller.capture().await?;
//! let outcome = controller.export().await?;
//! println!("exported {}", outcome.path.display());
//! # Ok(())
//! # }
//! ```

pub mod capabilities;
pub mod config;
pub mod constants;
pub mod errors;
pub mod pipelines;
pub mod session;

// Re-export commonly used types
pub use capabilities::{
    CameraCapability, CameraFacing, CameraHandle, ExportCapability, FsExporter, ImageRef,
    PermissionStatus, ShareMetadata, StaticCamera,
};
pub use config::Config;
pub use constants::RecordPreset;
pub use errors::{CaptureError, ExportError, ScanError, ScanResult};
pub use pipelines::{ExportOutcome, RoomAnalyzer, RoomAttributes, StubRoomAnalyzer};
pub use session::{RoomRecord, ScanController, ScanPhase, Session};
