// SPDX-License-Identifier: MPL-2.0
//! Capture handling: file and camera acquisition feeding ingestion, plus
//! saving the generated result.
//!
//! This module turns raw captures into [`ImageRecord`]s, the form every
//! wizard slot and generation result shares.

pub mod camera;
pub mod export;
pub mod ingest;

// Re-export commonly used types
pub use crate::domain::image::{ImageRecord, MediaType};
pub use camera::{CaptureSession, SessionSlot};
pub use export::{encode_png, write_result, RESULT_FILE_NAME};
pub use ingest::{ingest, ingest_file, CaptureOrigin, RawCapture};
