// SPDX-License-Identifier: MPL-2.0
//! Normalized capture records.
//!
//! An [`ImageRecord`] is what a wizard slot holds: the transport-ready
//! payload (base64 text), the media type and the raw bytes used by the
//! presentation layer to build a displayable handle. Records are immutable;
//! replacing a slot means building a new record.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Media type used when a capture does not declare one.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Unique identity of an [`ImageRecord`], used for preview caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

// =============================================================================
// MediaType
// =============================================================================

/// A `type/subtype` media type string, lowercased.
///
/// Anything that does not look like `type/subtype` collapses to
/// [`FALLBACK_MEDIA_TYPE`], so a record always carries a usable value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
    /// Parses a declared media type, dropping parameters such as `;base64`.
    #[must_use]
    pub fn new(declared: &str) -> Self {
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let valid = matches!(
            essence.split_once('/'),
            Some((kind, sub)) if !kind.is_empty() && !sub.is_empty() && !sub.contains('/')
        );

        if valid {
            Self(essence)
        } else {
            Self::fallback()
        }
    }

    /// The `application/octet-stream` fallback.
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_MEDIA_TYPE.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `image/*` types.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ImageRecord
// =============================================================================

/// An ingested image held by a wizard slot or produced by generation.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    id: RecordId,
    payload: Arc<str>,
    media_type: MediaType,
    bytes: Arc<[u8]>,
    dimensions: Option<(u32, u32)>,
}

impl ImageRecord {
    /// Builds a record from already-encoded parts.
    ///
    /// `payload` must be the base64 text of `bytes`; the ingestion layer is
    /// the only producer and guarantees it.
    #[must_use]
    pub fn new(
        bytes: Arc<[u8]>,
        payload: impl Into<Arc<str>>,
        media_type: MediaType,
        dimensions: Option<(u32, u32)>,
    ) -> Self {
        Self {
            id: RecordId::next(),
            payload: payload.into(),
            media_type,
            bytes,
            dimensions,
        }
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Base64 text of the encoded image.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Shared handle to the payload, for building requests without copying.
    #[must_use]
    pub fn shared_payload(&self) -> Arc<str> {
        Arc::clone(&self.payload)
    }

    #[must_use]
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Raw encoded bytes (PNG, JPEG, ...).
    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    /// Pixel dimensions when the format could be probed.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    /// The `data:` URL form of this record.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.payload)
    }
}
