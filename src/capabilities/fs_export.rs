// SPDX-License-Identifier: GPL-3.0-only

//! Filesystem export adapter
//!
//! Writes export artifacts with a temp-file-then-rename sequence so a
//! failed write never replaces a previous successful export, and hands
//! finished files to the desktop via the `open` crate.

use crate::capabilities::{ExportCapability, ShareMetadata};
use crate::errors::ExportError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Export capability backed by the local filesystem
#[derive(Debug, Clone)]
pub struct FsExporter {
    share_enabled: bool,
}

impl FsExporter {
    pub fn new() -> Self {
        Self {
            share_enabled: true,
        }
    }

    /// Disable the share hand-off; writes still happen
    pub fn without_share(mut self) -> Self {
        self.share_enabled = false;
        self
    }

    fn temp_path(path: &Path) -> PathBuf {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "export".to_string());
        path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl Default for FsExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportCapability for FsExporter {
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Stage into a sibling temp file, then rename over the target.
        // The rename keeps the previous export intact if anything fails
        // mid-write.
        let temp = Self::temp_path(path);
        if let Err(err) = tokio::fs::write(&temp, bytes).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(err.into());
        }
        if let Err(err) = tokio::fs::rename(&temp, path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(err.into());
        }

        debug!(path = %path.display(), bytes = bytes.len(), "Export file written");
        Ok(())
    }

    async fn is_share_available(&self) -> bool {
        self.share_enabled
    }

    async fn share(&self, path: &Path, metadata: &ShareMetadata) -> Result<(), ExportError> {
        if !self.share_enabled {
            return Err(ExportError::ShareUnavailable);
        }

        info!(
            path = %path.display(),
            message = %metadata.message,
            "Handing export to the desktop"
        );

        let target = path.to_path_buf();
        let opened = tokio::task::spawn_blocking(move || open::that(&target)).await;
        match opened {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                warn!(error = %err, "Desktop hand-off failed");
                Err(ExportError::ShareUnavailable)
            }
            Err(err) => {
                warn!(error = %err, "Share task failed to run");
                Err(ExportError::ShareUnavailable)
            }
        }
    }
}
