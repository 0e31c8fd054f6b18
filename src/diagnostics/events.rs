// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for session tracking.
//!
//! Events describe what the wizard and its collaborators did, so a failure
//! report can be correlated with the steps that led to it. They carry
//! operator-facing detail (status codes, transport messages) that is never
//! shown to the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A diagnostic event with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// When the event occurred (wall clock, for correlation with service logs)
    pub timestamp: DateTime<Utc>,
    /// The type and data of the event
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The exit animation finished and a new step became current.
    StepCommitted {
        step: String,
    },

    /// A generation request was handed to the backend.
    Submitted {
        submission: u64,
        category: String,
        backend: String,
    },

    /// The latest submission produced a composite.
    GenerationSucceeded {
        submission: u64,
    },

    /// The latest submission failed. `detail` is the underlying diagnostic.
    GenerationFailed {
        submission: u64,
        failure: String,
        detail: String,
    },

    /// A completion arrived for a superseded submission and was dropped.
    CompletionDiscarded {
        submission: u64,
    },

    /// A capture could not be turned into an image record.
    IngestionFailed {
        detail: String,
    },

    /// The camera could not be acquired or stopped delivering frames.
    CameraFailed {
        detail: String,
    },

    /// Non-critical issue (config fallback, failed save).
    Warning {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_uses_current_time() {
        let before = Utc::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::CompletionDiscarded { submission: 1 });
        let after = Utc::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn event_serializes_with_flattened_kind() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::GenerationFailed {
            submission: 3,
            failure: "unexpected".into(),
            detail: "Service returned status 500: boom".into(),
        });

        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"generation_failed\""));
        assert!(json.contains("\"submission\":3"));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn event_kind_deserializes_from_json() {
        let json = r#"{"type":"step_committed","step":"result"}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            DiagnosticEventKind::StepCommitted {
                step: "result".into()
            }
        );
    }
}
