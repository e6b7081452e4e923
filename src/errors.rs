// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the scan session core

use std::fmt;

/// Result type alias using ScanError
pub type ScanResult<T> = Result<T, ScanError>;

/// Main error type for the crate
#[derive(Debug, Clone)]
pub enum ScanError {
    /// Capture-path errors
    Capture(CaptureError),
    /// Export-path errors
    Export(ExportError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
}

/// Capture-path errors
///
/// Every variant except `PermissionDenied` is recovered locally: the
/// session reverts to `Scanning` and a later capture may succeed.
/// `PermissionDenied` is terminal for the session; the caller decides
/// whether to build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Camera permission was not granted
    PermissionDenied,
    /// No active camera handle (permission pending, or session already complete)
    Unavailable,
    /// A capture is already in flight for this session
    AlreadyInFlight,
    /// Platform capture call failed
    Failed(String),
    /// Bounded capture did not resolve within the configured timeout (ms)
    TimedOut(u64),
}

/// Export-path errors
///
/// None of these alter session state; the caller may retry export
/// without re-capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// No completed record to export
    NothingToExport,
    /// Writing the export file failed
    WriteFailed(String),
    /// Platform share is unavailable (non-fatal; the write still counts)
    ShareUnavailable,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Capture(e) => write!(f, "Capture error: {}", e),
            ScanError::Export(e) => write!(f, "Export error: {}", e),
            ScanError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ScanError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied => write!(f, "Camera permission denied"),
            CaptureError::Unavailable => write!(f, "No active camera handle"),
            CaptureError::AlreadyInFlight => write!(f, "Capture already in flight"),
            CaptureError::Failed(msg) => write!(f, "Capture failed: {}", msg),
            CaptureError::TimedOut(ms) => write!(f, "Capture timed out after {}ms", ms),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NothingToExport => write!(f, "Nothing to export"),
            ExportError::WriteFailed(msg) => write!(f, "Export write failed: {}", msg),
            ExportError::ShareUnavailable => write!(f, "Sharing is unavailable"),
        }
    }
}

impl std::error::Error for ScanError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for ExportError {}

// Conversions from sub-errors to ScanError
impl From<CaptureError> for ScanError {
    fn from(err: CaptureError) -> Self {
        ScanError::Capture(err)
    }
}

impl From<ExportError> for ScanError {
    fn from(err: ExportError) -> Self {
        ScanError::Export(err)
    }
}

// Conversions for I/O and serialization errors
impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}
