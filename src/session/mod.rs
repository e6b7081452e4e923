// SPDX-License-Identifier: GPL-3.0-only

//! Scan session lifecycle
//!
//! One session is one scan attempt, scoped to a single screen visit.
//! [`state::Session`] is the pure phase machine; [`controller::ScanController`]
//! wires it to the platform capabilities and the analysis/export
//! pipelines. There is no persistence: a session lives from creation to
//! cancel or drop.

pub mod controller;
pub mod record;
pub mod state;

pub use controller::ScanController;
pub use record::{PreviewRecord, RoomRecord};
pub use state::{ScanPhase, Session};
