// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting session activity.
//!
//! Events are stored in a memory-bounded circular buffer so a session can be
//! inspected (or exported as JSON) after a failure. Every event is mirrored
//! to `tracing` by the code that records it; the buffer keeps the ordered
//! history.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Owner and shared recorder

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
