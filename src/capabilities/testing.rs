// SPDX-License-Identifier: GPL-3.0-only

//! Scripted capability doubles
//!
//! Deterministic camera and export implementations for exercising the
//! session controller without platform services. Shipped in the crate
//! so UI hosts can drive their own screen logic against them.

use crate::capabilities::{
    CameraCapability, CameraFacing, CameraHandle, ExportCapability, ImageRef, PermissionStatus,
    ShareMetadata,
};
use crate::errors::{CaptureError, ExportError};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One scripted response to a capture call
#[derive(Debug, Clone)]
pub enum ScriptedCapture {
    /// Resolve with this image reference
    Resolve(ImageRef),
    /// Fail with this error
    Fail(CaptureError),
    /// Never resolve (exercises the capture timeout)
    Hang,
}

/// Camera capability that replays a scripted outcome queue
///
/// Outcomes are consumed in order; an exhausted queue fails the
/// capture, which keeps a runaway test loud instead of silently
/// minting images.
#[derive(Debug, Clone)]
pub struct ScriptedCamera {
    permission: PermissionStatus,
    outcomes: Arc<Mutex<VecDeque<ScriptedCapture>>>,
}

impl ScriptedCamera {
    pub fn granted(outcomes: Vec<ScriptedCapture>) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            outcomes: Arc::new(Mutex::new(outcomes.into())),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue another outcome after construction
    pub fn push_outcome(&self, outcome: ScriptedCapture) {
        if let Ok(mut queue) = self.outcomes.lock() {
            queue.push_back(outcome);
        }
    }
}

impl CameraCapability for ScriptedCamera {
    type Handle = ScriptedHandle;

    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn open(&self) -> Result<Self::Handle, CaptureError> {
        if !self.permission.is_granted() {
            return Err(CaptureError::PermissionDenied);
        }
        Ok(ScriptedHandle {
            outcomes: Arc::clone(&self.outcomes),
        })
    }
}

/// Handle replaying the scripted camera's queue
#[derive(Debug)]
pub struct ScriptedHandle {
    outcomes: Arc<Mutex<VecDeque<ScriptedCapture>>>,
}

impl CameraHandle for ScriptedHandle {
    async fn capture(&mut self, _facing: CameraFacing) -> Result<ImageRef, CaptureError> {
        let next = self
            .outcomes
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());
        match next {
            Some(ScriptedCapture::Resolve(image)) => Ok(image),
            Some(ScriptedCapture::Fail(err)) => Err(err),
            Some(ScriptedCapture::Hang) => {
                std::future::pending::<()>().await;
                unreachable!("pending future resolved")
            }
            None => Err(CaptureError::Failed("capture script exhausted".to_string())),
        }
    }
}

/// In-memory export capability recording every write and share
#[derive(Debug, Clone)]
pub struct MemoryExporter {
    share_available: bool,
    share_fails: bool,
    writes: Arc<Mutex<Vec<(PathBuf, Vec<u8>)>>>,
    shares: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self {
            share_available: true,
            share_fails: false,
            writes: Arc::new(Mutex::new(Vec::new())),
            shares: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Report the share sheet as unavailable
    pub fn without_share(mut self) -> Self {
        self.share_available = false;
        self
    }

    /// Report share as available but have every hand-off fail
    pub fn with_failing_share(mut self) -> Self {
        self.share_fails = true;
        self
    }

    /// Number of writes performed
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }

    /// Most recent write, if any
    pub fn last_write(&self) -> Option<(PathBuf, Vec<u8>)> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }

    /// Paths handed to the share sheet
    pub fn shared_paths(&self) -> Vec<PathBuf> {
        self.shares.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Default for MemoryExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportCapability for MemoryExporter {
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push((path.to_path_buf(), bytes.to_vec()));
        }
        Ok(())
    }

    async fn is_share_available(&self) -> bool {
        self.share_available
    }

    async fn share(&self, path: &Path, _metadata: &ShareMetadata) -> Result<(), ExportError> {
        if !self.share_available || self.share_fails {
            return Err(ExportError::ShareUnavailable);
        }
        if let Ok(mut shares) = self.shares.lock() {
            shares.push(path.to_path_buf());
        }
        Ok(())
    }
}
