// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Transition Bounds
// =============================================================================

/// Step transition duration bounds (0 to 2000 milliseconds per phase).
pub mod transition_bounds {
    /// Minimum phase duration in milliseconds (0 disables animation).
    pub const MIN_MS: u64 = 0;
    /// Maximum phase duration in milliseconds.
    pub const MAX_MS: u64 = 2_000;
    /// Default phase duration in milliseconds.
    pub const DEFAULT_MS: u64 = 250;
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Duration of one transition phase (exit or enter).
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–2000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the phase length as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when transitions should complete immediately.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_duration_clamps_to_max() {
        assert_eq!(
            TransitionDuration::new(60_000).millis(),
            transition_bounds::MAX_MS
        );
    }

    #[test]
    fn transition_duration_default() {
        let duration = TransitionDuration::default();
        assert_eq!(duration.millis(), transition_bounds::DEFAULT_MS);
        assert_eq!(duration.as_duration(), Duration::from_millis(250));
    }

    #[test]
    fn zero_duration_is_instant() {
        assert!(TransitionDuration::new(0).is_instant());
        assert!(!TransitionDuration::default().is_instant());
    }
}
