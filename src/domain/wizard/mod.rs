// SPDX-License-Identifier: MPL-2.0
//! Step wizard: capture yourself, pick a category, capture the item, view
//! the composite.
//!
//! # Transition table
//!
//! | From | Trigger | To | Direction | Side effect |
//! |---|---|---|---|---|
//! | start | advance | upload_person | forward | none |
//! | upload_person | person ingested | select_category | forward | store person |
//! | select_category | category chosen | upload_item | forward | store category |
//! | upload_item | item ingested | result | forward | store item, submit |
//! | any but start | back | previous | backward | none |
//! | result | try another item | upload_item | forward | clear item and outcome |
//! | any | start over | start | backward | clear everything |
//!
//! Clearing for the last two rows happens when the exit animation commits,
//! so the result step is never visible with an empty slot.

mod generation;
mod state;
mod step;
mod transition;


pub use generation::{
    GenerationFailure, GenerationOutcome, GenerationRequest, Submission, SubmissionId,
};
pub use state::{Action, Effect, Slot, Wizard};
pub use step::{Direction, Step};
pub use transition::{Transition, TransitionPhase};
