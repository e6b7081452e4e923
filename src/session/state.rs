// SPDX-License-Identifier: GPL-3.0-only

//! Session state machine
//!
//! Pure, synchronous phase machine for one scan attempt. Every
//! transition rule lives here, with no I/O and no lock: the controller
//! marks `Processing` before it suspends on the platform capture, so a
//! second capture on the same session is rejected by phase alone.

use crate::capabilities::{CameraFacing, ImageRef};
use crate::errors::CaptureError;
use crate::pipelines::analysis::RoomAttributes;
use crate::session::record::RoomRecord;

/// Discrete lifecycle phase of a scan session
///
/// Transitions are monotonic: permission grant moves past
/// `AwaitingPermission`, a capture round-trips `Scanning → Processing`
/// (back to `Scanning` only on failure), and `Complete` is terminal.
/// Cancel discards the whole session rather than rewinding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    /// Permission request outstanding or denied
    #[default]
    AwaitingPermission,
    /// Live preview, ready to capture
    Scanning,
    /// One capture in flight
    Processing,
    /// Record derived; camera released
    Complete,
}

impl ScanPhase {
    /// Get all phases for UI iteration
    pub const ALL: [ScanPhase; 4] = [
        ScanPhase::AwaitingPermission,
        ScanPhase::Scanning,
        ScanPhase::Processing,
        ScanPhase::Complete,
    ];

    /// Get display name for the phase
    pub fn display_name(&self) -> &'static str {
        match self {
            ScanPhase::AwaitingPermission => "awaiting permission",
            ScanPhase::Scanning => "scanning",
            ScanPhase::Processing => "processing",
            ScanPhase::Complete => "complete",
        }
    }
}

/// One in-progress or completed scan attempt
///
/// Owns the captured-image list (append-only, capture order) and the
/// derived record (set at most once). Callers read state through the
/// accessors; only the controller mutates it.
#[derive(Debug, Default)]
pub struct Session {
    phase: ScanPhase,
    facing: CameraFacing,
    captured: Vec<ImageRef>,
    room_data: Option<RoomRecord>,
}

impl Session {
    pub fn new(facing: CameraFacing) -> Self {
        Self {
            phase: ScanPhase::AwaitingPermission,
            facing,
            captured: Vec::new(),
            room_data: None,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    /// Captured image references in capture order
    pub fn captured_images(&self) -> &[ImageRef] {
        &self.captured
    }

    /// The derived record, present once the session is complete
    pub fn room_data(&self) -> Option<&RoomRecord> {
        self.room_data.as_ref()
    }

    /// Move past the permission gate
    ///
    /// Returns false when the session already left `AwaitingPermission`,
    /// which keeps repeated permission grants idempotent.
    pub fn grant(&mut self) -> bool {
        if self.phase != ScanPhase::AwaitingPermission {
            return false;
        }
        self.phase = ScanPhase::Scanning;
        true
    }

    /// Flip the camera facing
    ///
    /// Permitted only while `Scanning`; a no-op (returning false) in
    /// every other phase.
    pub fn toggle_facing(&mut self) -> bool {
        if self.phase != ScanPhase::Scanning {
            return false;
        }
        self.facing = self.facing.toggled();
        true
    }

    /// Mark a capture in flight
    ///
    /// Must be called before suspending on the platform capture. The
    /// rejection here is the at-most-one-in-flight guarantee: a session
    /// already `Processing` refuses a second capture without touching
    /// any state.
    pub fn begin_capture(&mut self) -> Result<(), CaptureError> {
        match self.phase {
            ScanPhase::Scanning => {
                self.phase = ScanPhase::Processing;
                Ok(())
            }
            ScanPhase::Processing => Err(CaptureError::AlreadyInFlight),
            ScanPhase::AwaitingPermission | ScanPhase::Complete => Err(CaptureError::Unavailable),
        }
    }

    /// Resolve the in-flight capture
    ///
    /// Appends exactly one image reference, derives the record, and
    /// completes the session. The record is set once and never
    /// replaced.
    pub fn finish_capture(&mut self, image: ImageRef, attributes: RoomAttributes) -> &RoomRecord {
        debug_assert_eq!(self.phase, ScanPhase::Processing);
        self.captured.push(image);
        self.phase = ScanPhase::Complete;
        self.room_data
            .get_or_insert_with(|| RoomRecord::new(self.captured.clone(), attributes))
    }

    /// Fail the in-flight capture
    ///
    /// Reverts to `Scanning` with the captured list and record
    /// untouched; a later capture may succeed.
    pub fn fail_capture(&mut self) {
        if self.phase == ScanPhase::Processing {
            self.phase = ScanPhase::Scanning;
        }
    }
}
