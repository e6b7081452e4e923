// SPDX-License-Identifier: GPL-3.0-only

//! File-source camera adapter
//!
//! Serves preconfigured image references instead of driving hardware,
//! the same way the capture screen can be pointed at a file source
//! instead of a live camera. Used by the CLI demo and anywhere a
//! session must run without platform camera access.

use crate::capabilities::{
    CameraCapability, CameraFacing, CameraHandle, ImageRef, PermissionStatus,
};
use crate::errors::CaptureError;
use std::collections::VecDeque;
use tracing::debug;
use uuid::Uuid;

/// Camera capability backed by a fixed list of image references
///
/// Once the list is exhausted the handle mints synthetic
/// `roomscan://frames/<uuid>` references, so a demo session can always
/// capture.
#[derive(Debug, Clone)]
pub struct StaticCamera {
    permission: PermissionStatus,
    images: Vec<ImageRef>,
}

impl StaticCamera {
    /// A granted camera serving the given references in order
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            images,
        }
    }

    /// A granted camera that mints synthetic references on demand
    pub fn synthetic() -> Self {
        Self::new(Vec::new())
    }

    /// A camera whose permission request always resolves denied
    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            images: Vec::new(),
        }
    }
}

impl CameraCapability for StaticCamera {
    type Handle = StaticCameraHandle;

    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn open(&self) -> Result<Self::Handle, CaptureError> {
        if !self.permission.is_granted() {
            return Err(CaptureError::PermissionDenied);
        }
        Ok(StaticCameraHandle {
            images: self.images.clone().into(),
        })
    }
}

/// Handle serving the static camera's reference queue
#[derive(Debug)]
pub struct StaticCameraHandle {
    images: VecDeque<ImageRef>,
}

impl CameraHandle for StaticCameraHandle {
    async fn capture(&mut self, facing: CameraFacing) -> Result<ImageRef, CaptureError> {
        let image = self
            .images
            .pop_front()
            .unwrap_or_else(|| ImageRef::new(format!("roomscan://frames/{}", Uuid::new_v4())));
        debug!(facing = facing.display_name(), image = %image, "Static capture");
        Ok(image)
    }
}
