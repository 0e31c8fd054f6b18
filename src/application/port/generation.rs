// SPDX-License-Identifier: MPL-2.0
//! Composite generation port definition.
//!
//! This module defines the [`CompositeGenerator`] trait, the single
//! capability the request orchestrator depends on, and the validated
//! [`CompositeRequest`] every backend receives.
//!
//! # Design Notes
//!
//! - One request is sent per call; backends never retry
//! - A response without an image part is `Ok(None)`, not an error
//! - Validation happens before any backend is involved, so a backend only
//!   ever sees complete requests

use crate::domain::category::Category;
use crate::error::GenerationError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// ValidationError
// =============================================================================

/// Which image of a request a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSlot {
    Person,
    Item,
}

impl fmt::Display for RequestSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestSlot::Person => write!(f, "person image"),
            RequestSlot::Item => write!(f, "item image"),
        }
    }
}

/// A request rejected before it reached the generation capability.
///
/// Maps to HTTP 400 semantics when exposed at a service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The encoded payload is empty.
    EmptyPayload(RequestSlot),

    /// The media type is empty.
    MissingMediaType(RequestSlot),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyPayload(slot) => write!(f, "Missing payload for {slot}"),
            ValidationError::MissingMediaType(slot) => {
                write!(f, "Missing media type for {slot}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// Request / Response
// =============================================================================

/// One image as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireImage {
    /// Base64 text of the encoded image.
    pub payload: Arc<str>,
    /// `type/subtype` media type.
    pub media_type: String,
}

impl WireImage {
    fn validate(&self, slot: RequestSlot) -> Result<(), ValidationError> {
        if self.payload.trim().is_empty() {
            return Err(ValidationError::EmptyPayload(slot));
        }
        if self.media_type.trim().is_empty() {
            return Err(ValidationError::MissingMediaType(slot));
        }
        Ok(())
    }
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeRequest {
    person: WireImage,
    item: WireImage,
    category: Category,
}

impl CompositeRequest {
    /// Validates both images and builds the request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending image.
    pub fn new(
        person: WireImage,
        item: WireImage,
        category: Category,
    ) -> Result<Self, ValidationError> {
        person.validate(RequestSlot::Person)?;
        item.validate(RequestSlot::Item)?;
        Ok(Self {
            person,
            item,
            category,
        })
    }

    #[must_use]
    pub fn person(&self) -> &WireImage {
        &self.person
    }

    #[must_use]
    pub fn item(&self) -> &WireImage {
        &self.item
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

/// The image part of a successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Base64 text of the encoded composite.
    pub payload: String,
    /// Media type declared by the backend, if any.
    pub media_type: Option<String>,
}

// =============================================================================
// CompositeGenerator Trait
// =============================================================================

/// Port for the external composite generation capability.
///
/// Implementations are transports (direct REST call, server-side proxy, test
/// stubs); they share one contract so the orchestrator is written once.
#[async_trait]
pub trait CompositeGenerator: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Sends exactly one request and awaits exactly one response.
    ///
    /// Returns `Ok(None)` when the response carries no image part.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] for transport and protocol failures.
    async fn generate(
        &self,
        request: &CompositeRequest,
    ) -> Result<Option<GeneratedImage>, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(payload: &str, media_type: &str) -> WireImage {
        WireImage {
            payload: Arc::from(payload),
            media_type: media_type.to_string(),
        }
    }

    #[test]
    fn complete_request_validates() {
        let request = CompositeRequest::new(
            wire("QUJD", "image/png"),
            wire("REVG", "image/jpeg"),
            Category::Pants,
        )
        .expect("valid request");
        assert_eq!(request.category(), Category::Pants);
        assert_eq!(request.item().media_type, "image/jpeg");
    }

    #[test]
    fn empty_person_payload_is_rejected_first() {
        let err = CompositeRequest::new(wire("", "image/png"), wire("", ""), Category::Hair)
            .expect_err("empty payload");
        assert_eq!(err, ValidationError::EmptyPayload(RequestSlot::Person));
    }

    #[test]
    fn missing_item_media_type_is_rejected() {
        let err = CompositeRequest::new(
            wire("QUJD", "image/png"),
            wire("REVG", "  "),
            Category::Shirt,
        )
        .expect_err("missing media type");
        assert_eq!(err, ValidationError::MissingMediaType(RequestSlot::Item));
        assert_eq!(err.to_string(), "Missing media type for item image");
    }
}
