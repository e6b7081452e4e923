// SPDX-License-Identifier: MPL-2.0

//! Processing pipelines for scan analysis and export
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │  Image Ref   │ ──▶ │ Analysis Pipeline │ ──▶ │RoomAttributes│
//! │  (capture)   │     │  - analyzer seam  │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//!
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │  RoomRecord  │ ──▶ │  Export Pipeline  │ ──▶ │  JSON File   │
//! │  (session)   │     │  - serialize      │     │  + share     │
//! │              │     │  - atomic write   │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`analysis`]: Pluggable room analysis behind the [`analysis::RoomAnalyzer`] seam
//! - [`export`]: Record serialization, atomic write, best-effort share

pub mod analysis;
pub mod export;

pub use analysis::{RoomAnalyzer, RoomAttributes, StubRoomAnalyzer};
pub use export::{ExportOutcome, export_record, serialize_record};
