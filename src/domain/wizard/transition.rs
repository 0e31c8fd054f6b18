// SPDX-License-Identifier: MPL-2.0
//! Two-phase step transition (exit, then enter).
//!
//! The transition holds no domain data: it is the phase/direction pair the
//! presentation layer animates. The wizard advances it when the exit visual
//! reports completion and again when the enter visual does.

use super::step::Direction;

/// Where the current step change is in its animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Exiting,
    Entering,
}

/// Phase and direction of the visible step change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    phase: TransitionPhase,
    direction: Direction,
}

impl Default for Transition {
    /// The first step plays its enter animation on launch.
    fn default() -> Self {
        Self {
            phase: TransitionPhase::Entering,
            direction: Direction::Forward,
        }
    }
}

impl Transition {
    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true between a transition request and its exit completion.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == TransitionPhase::Exiting
    }

    /// Returns true while an exit or enter visual is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub(super) fn exit(&mut self, direction: Direction) {
        self.phase = TransitionPhase::Exiting;
        self.direction = direction;
    }

    pub(super) fn enter(&mut self) {
        self.phase = TransitionPhase::Entering;
    }

    pub(super) fn settle(&mut self) {
        self.phase = TransitionPhase::Idle;
    }
}
