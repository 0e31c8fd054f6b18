// SPDX-License-Identifier: MPL-2.0
//! Saving the generated composite to disk.
//!
//! Results are always written as PNG, whatever format the backend chose.

use crate::domain::image::ImageRecord;
use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::io::Cursor;
use std::path::PathBuf;

/// File name offered by the save dialog.
pub const RESULT_FILE_NAME: &str = "virtual-try-on-result.png";

/// Returns the record's bytes as PNG, re-encoding non-PNG payloads.
///
/// # Errors
///
/// Returns [`Error::Io`] when the payload cannot be decoded or encoded.
pub fn encode_png(record: &ImageRecord) -> Result<Vec<u8>> {
    if record.media_type().as_str() == "image/png" {
        return Ok(record.bytes().to_vec());
    }

    let decoded = image_rs::load_from_memory(record.bytes())
        .map_err(|err| Error::Io(format!("cannot decode result: {err}")))?;
    let mut out = Cursor::new(Vec::new());
    decoded
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|err| Error::Io(format!("cannot encode PNG: {err}")))?;
    Ok(out.into_inner())
}

/// Writes `bytes` to `path` and returns the path.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be written.
pub async fn write_result(bytes: Vec<u8>, path: PathBuf) -> Result<PathBuf> {
    tokio::fs::write(&path, bytes).await?;
    tracing::info!(path = %path.display(), "result saved");
    Ok(path)
}
