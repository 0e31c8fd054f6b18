// SPDX-License-Identifier: MPL-2.0
//! Capture ingestion: raw bytes in, [`ImageRecord`] out.
//!
//! Every capture path (file picker, camera snapshot, data URL, generated
//! composite) ends in [`ingest`], so all records share the same encoding and
//! media type rules.
//!
//! # Media type resolution
//!
//! 1. The type the capture declares about itself (data URL header, camera
//!    encoder, backend response)
//! 2. The file name extension
//! 3. Content sniffing of the magic bytes
//! 4. `application/octet-stream`
//!
//! No format whitelist is enforced: an unknown capture still produces a
//! record, the display layer simply cannot render it.

use crate::domain::image::{ImageRecord, MediaType};
use crate::error::IngestionError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a capture came from. Only used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOrigin {
    File(PathBuf),
    Camera,
    DataUrl,
    Generated,
}

/// A single raw image acquisition.
#[derive(Debug, Clone)]
pub struct RawCapture {
    origin: CaptureOrigin,
    name: Option<String>,
    bytes: Vec<u8>,
    declared_media_type: Option<String>,
    /// Base64 text the capture arrived as, reused instead of re-encoding.
    encoded: Option<String>,
}

impl RawCapture {
    /// Wraps bytes that are already in memory.
    #[must_use]
    pub fn from_bytes(
        origin: CaptureOrigin,
        name: Option<String>,
        bytes: Vec<u8>,
        declared_media_type: Option<String>,
    ) -> Self {
        Self {
            origin,
            name,
            bytes,
            declared_media_type,
            encoded: None,
        }
    }

    /// Reads a capture from disk.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::ReadFailure`] when the file cannot be read.
    pub async fn read_file(path: &Path) -> Result<Self, IngestionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| IngestionError::ReadFailure(format!("{}: {err}", path.display())))?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from);

        Ok(Self::from_bytes(
            CaptureOrigin::File(path.to_path_buf()),
            name,
            bytes,
            None,
        ))
    }

    /// Parses a `data:<media-type>;base64,<payload>` URL.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::MalformedDataUrl`] when the URL has no
    /// `data:` scheme, is not base64, or its payload does not decode.
    pub fn from_data_url(url: &str) -> Result<Self, IngestionError> {
        let rest = url
            .get(..5)
            .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
            .map(|_| &url[5..])
            .ok_or_else(|| IngestionError::MalformedDataUrl("missing data: scheme".into()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| IngestionError::MalformedDataUrl("missing payload".into()))?;

        let mut params = header.split(';');
        let declared = params
            .next()
            .map(str::trim)
            .filter(|media_type| !media_type.is_empty())
            .map(String::from);
        if !params.any(|param| param.trim().eq_ignore_ascii_case("base64")) {
            return Err(IngestionError::MalformedDataUrl(
                "only base64 data URLs are supported".into(),
            ));
        }

        let mut capture = Self::from_base64(payload, declared)?;
        capture.origin = CaptureOrigin::DataUrl;
        Ok(capture)
    }

    /// Decodes base64 text, such as the image part of a backend response.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::MalformedDataUrl`] when the text is not
    /// valid base64.
    pub fn from_base64(
        payload: &str,
        declared_media_type: Option<String>,
    ) -> Result<Self, IngestionError> {
        let payload = payload.trim();
        let bytes = STANDARD
            .decode(payload)
            .map_err(|err| IngestionError::MalformedDataUrl(err.to_string()))?;

        Ok(Self {
            origin: CaptureOrigin::Generated,
            name: None,
            bytes,
            declared_media_type,
            encoded: Some(payload.to_string()),
        })
    }

    #[must_use]
    pub fn origin(&self) -> &CaptureOrigin {
        &self.origin
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Normalizes a capture into an [`ImageRecord`].
///
/// # Errors
///
/// Returns [`IngestionError::ReadFailure`] for an empty capture.
pub fn ingest(capture: RawCapture) -> Result<ImageRecord, IngestionError> {
    if capture.bytes.is_empty() {
        return Err(IngestionError::ReadFailure(format!(
            "empty capture from {:?}",
            capture.origin
        )));
    }

    let media_type = resolve_media_type(&capture);
    let dimensions = probe_dimensions(&capture.bytes);
    let payload = match capture.encoded {
        Some(encoded) => encoded,
        None => STANDARD.encode(&capture.bytes),
    };

    tracing::debug!(
        origin = ?capture.origin,
        media_type = %media_type,
        bytes = capture.bytes.len(),
        "capture ingested"
    );

    Ok(ImageRecord::new(
        Arc::from(capture.bytes),
        payload,
        media_type,
        dimensions,
    ))
}

/// Reads and ingests a file in one step.
///
/// # Errors
///
/// Returns [`IngestionError::ReadFailure`] when the file cannot be read or
/// is empty.
pub async fn ingest_file(path: PathBuf) -> Result<ImageRecord, IngestionError> {
    let capture = RawCapture::read_file(&path).await?;
    ingest(capture)
}

fn resolve_media_type(capture: &RawCapture) -> MediaType {
    let declared = capture
        .declared_media_type
        .as_deref()
        .map(MediaType::new)
        .filter(|media_type| *media_type != MediaType::fallback());
    if let Some(media_type) = declared {
        return media_type;
    }

    let from_name = capture
        .name
        .as_deref()
        .and_then(|name| image_rs::ImageFormat::from_path(name).ok());
    if let Some(format) = from_name {
        return MediaType::new(format.to_mime_type());
    }

    match image_rs::guess_format(&capture.bytes) {
        Ok(format) => MediaType::new(format.to_mime_type()),
        Err(_) => MediaType::fallback(),
    }
}

/// Reads the header only; a capture that does not decode still ingests.
fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn ingest_encodes_payload_and_probes_dimensions() {
        let bytes = png_bytes(3, 2);
        let capture = RawCapture::from_bytes(CaptureOrigin::Camera, None, bytes.clone(), None);

        let record = ingest(capture).expect("ingest");
        assert_eq!(record.media_type().as_str(), "image/png");
        assert_eq!(record.dimensions(), Some((3, 2)));
        assert_eq!(STANDARD.decode(record.payload()).expect("base64"), bytes);
    }

    #[test]
    fn declared_media_type_wins_over_sniffing() {
        let capture = RawCapture::from_bytes(
            CaptureOrigin::Camera,
            Some("capture.jpg".into()),
            png_bytes(1, 1),
            Some("image/webp".into()),
        );
        let record = ingest(capture).expect("ingest");
        assert_eq!(record.media_type().as_str(), "image/webp");
    }

    #[test]
    fn extension_is_used_when_nothing_is_declared() {
        let capture = RawCapture::from_bytes(
            CaptureOrigin::Camera,
            Some("photo.JPG".into()),
            vec![1, 2, 3],
            None,
        );
        let record = ingest(capture).expect("ingest");
        assert_eq!(record.media_type().as_str(), "image/jpeg");
        assert_eq!(record.dimensions(), None);
    }

    #[test]
    fn unknown_content_falls_back_to_octet_stream() {
        let capture =
            RawCapture::from_bytes(CaptureOrigin::Camera, None, b"not an image".to_vec(), None);
        let record = ingest(capture).expect("ingest");
        assert_eq!(record.media_type(), &MediaType::fallback());
    }

    #[test]
    fn empty_capture_is_a_read_failure() {
        let capture = RawCapture::from_bytes(CaptureOrigin::Camera, None, Vec::new(), None);
        assert!(matches!(
            ingest(capture),
            Err(IngestionError::ReadFailure(_))
        ));
    }

    #[test]
    fn data_url_header_provides_media_type() {
        let payload = STANDARD.encode(png_bytes(2, 2));
        let url = format!("data:image/png;base64,{payload}");

        let capture = RawCapture::from_data_url(&url).expect("parse");
        assert_eq!(capture.origin(), &CaptureOrigin::DataUrl);

        let record = ingest(capture).expect("ingest");
        assert_eq!(record.media_type().as_str(), "image/png");
        assert_eq!(record.payload(), payload);
        assert_eq!(record.data_url(), url);
    }

    #[test]
    fn data_url_without_media_type_sniffs_content() {
        let payload = STANDARD.encode(png_bytes(1, 1));
        let capture = RawCapture::from_data_url(&format!("DATA:;base64,{payload}")).expect("parse");
        let record = ingest(capture).expect("ingest");
        assert_eq!(record.media_type().as_str(), "image/png");
    }

    #[test]
    fn malformed_data_urls_are_rejected() {
        for url in [
            "image/png;base64,AAAA",
            "data:image/png;base64",
            "data:image/png,plain-text",
            "data:image/png;base64,***",
        ] {
            assert!(
                matches!(
                    RawCapture::from_data_url(url),
                    Err(IngestionError::MalformedDataUrl(_))
                ),
                "{url} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn ingest_file_reads_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("person.png");
        std::fs::write(&path, png_bytes(4, 5)).expect("write");

        let record = ingest_file(path).await.expect("ingest file");
        assert_eq!(record.media_type().as_str(), "image/png");
        assert_eq!(record.dimensions(), Some((4, 5)));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = ingest_file(dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(IngestionError::ReadFailure(_))));
    }
}
