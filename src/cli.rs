// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for scan operations
//!
//! This module provides command-line functionality for:
//! - Running a full capture-and-export session against a file-source camera
//! - Printing a sample room record

use roomscan::capabilities::{FsExporter, StaticCamera};
use roomscan::pipelines::analysis::{RoomAnalyzer, StubRoomAnalyzer};
use roomscan::{
    CameraFacing, Config, ImageRef, PermissionStatus, RecordPreset, RoomRecord, ScanController,
};
use std::path::PathBuf;

/// Arguments for the `scan` subcommand
pub struct ScanArgs {
    pub images: Vec<String>,
    pub facing: String,
    pub output: Option<PathBuf>,
    pub file_name: Option<String>,
    pub preset: String,
    pub timeout_ms: Option<u64>,
    pub no_share: bool,
}

/// Run one session end to end: permission, capture, export
pub fn run_scan(args: ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.default_facing = parse_facing(&args.facing)?;
    config.record_preset = parse_preset(&args.preset)?;
    config.capture_timeout_ms = args.timeout_ms;
    if let Some(output) = args.output {
        config.export_dir = output;
    }
    if let Some(file_name) = args.file_name {
        config.export_file_name = file_name;
    }

    let camera = if args.images.is_empty() {
        StaticCamera::synthetic()
    } else {
        StaticCamera::new(args.images.into_iter().map(ImageRef::new).collect())
    };
    let exporter = if args.no_share {
        FsExporter::new().without_share()
    } else {
        FsExporter::new()
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut controller = ScanController::new(camera, exporter, config);

        if controller.request_permission().await? == PermissionStatus::Denied {
            return Err("Camera permission denied".into());
        }

        let image = controller.capture().await?;
        println!("Captured: {}", image);

        let outcome = controller.export().await?;
        println!("Room record saved: {}", outcome.path.display());
        if outcome.shared {
            println!("Handed to the share sheet");
        }

        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

/// Print what a completed session would export
pub fn print_sample_record(pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let image = ImageRef::new("roomscan://frames/sample");
    let attributes = StubRoomAnalyzer.analyze(&image);
    let record = RoomRecord::new(vec![image], attributes);

    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", json);
    Ok(())
}

fn parse_facing(value: &str) -> Result<CameraFacing, String> {
    match value.to_ascii_lowercase().as_str() {
        "front" => Ok(CameraFacing::Front),
        "back" => Ok(CameraFacing::Back),
        other => Err(format!("Unknown facing '{}' (expected front or back)", other)),
    }
}

fn parse_preset(value: &str) -> Result<RecordPreset, String> {
    match value.to_ascii_lowercase().as_str() {
        "full" => Ok(RecordPreset::Full),
        "preview" => Ok(RecordPreset::PreviewOnly),
        other => Err(format!("Unknown preset '{}' (expected full or preview)", other)),
    }
}
