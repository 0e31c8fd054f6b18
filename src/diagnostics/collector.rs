// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns the circular buffer; [`DiagnosticsHandle`]s are cheap
//! clones that async tasks (generation, camera) use to record events from
//! wherever they run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};

type SharedBuffer = Arc<Mutex<CircularBuffer<DiagnosticEvent>>>;

fn lock(buffer: &SharedBuffer) -> MutexGuard<'_, CircularBuffer<DiagnosticEvent>> {
    // A panic while holding the lock cannot leave the buffer inconsistent.
    buffer
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Handle for recording diagnostic events.
///
/// This handle is cheap to clone and can be shared across threads.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    buffer: SharedBuffer,
}

impl DiagnosticsHandle {
    /// Records an event with the current timestamp.
    pub fn record(&self, kind: DiagnosticEventKind) {
        lock(&self.buffer).push(DiagnosticEvent::new(kind));
    }

    /// Records a warning message.
    pub fn warn(&self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }
}

/// Central store for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: SharedBuffer,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Returns a handle for recording events.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.buffer).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.buffer).is_empty()
    }

    /// Copies the stored events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        lock(&self.buffer).iter().cloned().collect()
    }

    pub fn clear(&self) {
        lock(&self.buffer).clear();
    }

    /// Exports the buffer as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = {
            let buffer = lock(&self.buffer);
            Report {
                app_version: env!("CARGO_PKG_VERSION"),
                exported_at: Utc::now(),
                dropped_events: buffer.evicted(),
                events: buffer.iter().cloned().collect(),
            }
        };
        serde_json::to_string_pretty(&report)
    }
}

/// Shape of an exported diagnostics file.
#[derive(Serialize)]
struct Report {
    app_version: &'static str,
    exported_at: DateTime<Utc>,
    /// Events lost to the buffer bound before the export.
    dropped_events: u64,
    events: Vec<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
