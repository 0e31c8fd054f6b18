// SPDX-License-Identifier: MPL-2.0
//! Request orchestrator.
//!
//! Turns a tagged [`Submission`] into exactly one call to the injected
//! [`CompositeGenerator`] and maps whatever comes back onto the wizard's
//! [`GenerationFailure`] vocabulary. The tag travels with the result so the
//! wizard can discard completions of superseded submissions.
//!
//! Diagnostics (status codes, transport messages, decode errors) are logged
//! here and recorded in the diagnostics buffer; the caller only ever sees a
//! [`GenerationFailure`].

use crate::application::port::generation::{
    CompositeGenerator, CompositeRequest, GeneratedImage, ValidationError, WireImage,
};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::domain::image::ImageRecord;
use crate::domain::wizard::{GenerationFailure, GenerationRequest, Submission, SubmissionId};
use crate::media::ingest::{ingest, RawCapture};
use std::fmt;
use std::sync::Arc;

/// Media type assumed for composites whose backend declares none.
const DEFAULT_RESULT_MEDIA_TYPE: &str = "image/png";

/// The tagged outcome of one submission.
#[derive(Debug, Clone)]
pub struct Completion {
    pub id: SubmissionId,
    pub result: Result<ImageRecord, GenerationFailure>,
}

/// Sends submissions to a generation backend.
///
/// Cheap to clone: clones share the backend.
#[derive(Clone)]
pub struct Orchestrator {
    generator: Arc<dyn CompositeGenerator>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("backend", &self.generator.name())
            .finish()
    }
}

impl Orchestrator {
    #[must_use]
    pub fn new(generator: Arc<dyn CompositeGenerator>) -> Self {
        Self {
            generator,
            diagnostics: None,
        }
    }

    /// Records submissions and failures into `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Builds the wire request for a wizard request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when an image has an empty payload or
    /// media type.
    pub fn prepare(request: &GenerationRequest) -> Result<CompositeRequest, ValidationError> {
        CompositeRequest::new(
            wire_image(request.person()),
            wire_image(request.item()),
            request.category(),
        )
    }

    /// Runs one submission to completion.
    ///
    /// Exactly one backend call is made for a valid request; an invalid one
    /// is rejected without any call.
    pub async fn submit(&self, submission: Submission) -> Completion {
        let Submission { id, request } = submission;

        let wire = match Self::prepare(&request) {
            Ok(wire) => wire,
            Err(err) => {
                tracing::error!(submission = %id, error = %err, "invalid generation request");
                self.record_failure(id, GenerationFailure::Rejected, err.to_string());
                return Completion {
                    id,
                    result: Err(GenerationFailure::Rejected),
                };
            }
        };

        tracing::info!(
            submission = %id,
            category = %wire.category(),
            backend = self.generator.name(),
            "submitting generation request"
        );
        self.record(DiagnosticEventKind::Submitted {
            submission: id.value(),
            category: wire.category().as_str().to_string(),
            backend: self.generator.name().to_string(),
        });

        let result = match self.generator.generate(&wire).await {
            Ok(Some(image)) => self.decode(id, image),
            Ok(None) => {
                tracing::warn!(submission = %id, "response contained no image part");
                self.record_failure(
                    id,
                    GenerationFailure::NoImage,
                    "response contained no image part".to_string(),
                );
                Err(GenerationFailure::NoImage)
            }
            Err(err) => {
                tracing::warn!(submission = %id, error = %err, "generation request failed");
                self.record_failure(id, GenerationFailure::Unexpected, err.to_string());
                Err(GenerationFailure::Unexpected)
            }
        };

        if result.is_ok() {
            tracing::info!(submission = %id, "composite generated");
            self.record(DiagnosticEventKind::GenerationSucceeded {
                submission: id.value(),
            });
        }

        Completion { id, result }
    }

    fn decode(
        &self,
        id: SubmissionId,
        image: GeneratedImage,
    ) -> Result<ImageRecord, GenerationFailure> {
        let declared = image
            .media_type
            .filter(|media_type| !media_type.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESULT_MEDIA_TYPE.to_string());

        RawCapture::from_base64(&image.payload, Some(declared))
            .and_then(ingest)
            .map_err(|err| {
                tracing::warn!(submission = %id, error = %err, "generated image did not decode");
                self.record_failure(id, GenerationFailure::Unexpected, err.to_string());
                GenerationFailure::Unexpected
            })
    }

    fn record(&self, kind: DiagnosticEventKind) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.record(kind);
        }
    }

    fn record_failure(&self, id: SubmissionId, failure: GenerationFailure, detail: String) {
        self.record(DiagnosticEventKind::GenerationFailed {
            submission: id.value(),
            failure: failure.message().to_string(),
            detail,
        });
    }
}

fn wire_image(record: &ImageRecord) -> WireImage {
    WireImage {
        payload: record.shared_payload(),
        media_type: record.media_type().as_str().to_string(),
    }
}
