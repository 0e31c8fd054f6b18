// SPDX-License-Identifier: MPL-2.0
//! Generation requests, submission tags and outcomes.

use crate::domain::category::Category;
use crate::domain::image::ImageRecord;
use std::fmt;

/// Tag identifying one generation submission.
///
/// Tags increase monotonically per wizard; only the latest one may write
/// an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub(super) const fn first() -> Self {
        Self(1)
    }

    pub(super) fn following(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The inputs of one composite generation.
///
/// Only the wizard builds requests, and only from fully populated slots.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    person: ImageRecord,
    item: ImageRecord,
    category: Category,
}

impl GenerationRequest {
    pub(super) fn new(person: ImageRecord, item: ImageRecord, category: Category) -> Self {
        Self {
            person,
            item,
            category,
        }
    }

    #[must_use]
    pub fn person(&self) -> &ImageRecord {
        &self.person
    }

    #[must_use]
    pub fn item(&self) -> &ImageRecord {
        &self.item
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

/// A tagged request the caller must hand to the request orchestrator.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub request: GenerationRequest,
}

/// Why a generation produced no composite.
///
/// The user only ever sees the generic message; the underlying diagnostic
/// is logged where the failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The capability answered without an image part.
    NoImage,
    /// Transport or protocol failure (status, malformed body, I/O).
    Unexpected,
    /// The request was rejected locally before any network call.
    Rejected,
}

impl GenerationFailure {
    /// Returns the i18n message key shown on the result step.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            GenerationFailure::NoImage => "result-error-no-image",
            GenerationFailure::Unexpected => "result-error-unexpected",
            GenerationFailure::Rejected => "result-error-incomplete",
        }
    }

    /// Untranslated user-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            GenerationFailure::NoImage => "no image was generated",
            GenerationFailure::Unexpected => {
                "an unexpected error occurred during image generation"
            }
            GenerationFailure::Rejected => {
                "please ensure both images and a category are selected"
            }
        }
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// State of the latest generation, meaningful on the result step.
#[derive(Debug, Clone, Default)]
pub enum GenerationOutcome {
    #[default]
    NotStarted,
    Pending,
    Succeeded(ImageRecord),
    Failed(GenerationFailure),
}

impl GenerationOutcome {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, GenerationOutcome::Pending)
    }

    /// The generated composite, if the latest submission succeeded.
    #[must_use]
    pub fn image(&self) -> Option<&ImageRecord> {
        match self {
            GenerationOutcome::Succeeded(image) => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<GenerationFailure> {
        match self {
            GenerationOutcome::Failed(failure) => Some(*failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_ids_increase() {
        let first = SubmissionId::first();
        let second = first.following();
        assert!(second > first);
        assert_eq!(second.value(), 2);
        assert_eq!(format!("{second}"), "#2");
    }

    #[test]
    fn failure_messages_are_generic() {
        assert_eq!(GenerationFailure::NoImage.message(), "no image was generated");
        assert!(!GenerationFailure::Unexpected.message().contains("status"));
        assert_eq!(
            GenerationFailure::Unexpected.message_key(),
            "result-error-unexpected"
        );
    }

    #[test]
    fn outcome_accessors() {
        assert!(GenerationOutcome::Pending.is_pending());
        assert!(GenerationOutcome::NotStarted.image().is_none());
        assert_eq!(
            GenerationOutcome::Failed(GenerationFailure::NoImage).failure(),
            Some(GenerationFailure::NoImage)
        );
    }
}
