// SPDX-License-Identifier: MPL-2.0
//! The wizard state machine.
//!
//! [`Wizard`] is the single source of truth for a session. All mutations go
//! through [`Wizard::dispatch`] (user and ingestion triggers), the two
//! animator signals [`Wizard::finish_exit`] / [`Wizard::finish_enter`], and
//! [`Wizard::complete_generation`] for tagged generation results.
//!
//! Dispatch never performs I/O. When a trigger needs the request
//! orchestrator it returns [`Effect::Submit`] and the caller runs it.

use super::generation::{
    GenerationFailure, GenerationOutcome, GenerationRequest, Submission, SubmissionId,
};
use super::step::{Direction, Step};
use super::transition::Transition;
use crate::domain::category::Category;
use crate::domain::image::ImageRecord;

/// A trigger from the transition table.
#[derive(Debug, Clone)]
pub enum Action {
    /// "Get started" on the start step.
    Advance,
    /// A person capture finished ingesting.
    PersonIngested(ImageRecord),
    /// A category was picked.
    CategoryChosen(Category),
    /// An item capture finished ingesting.
    ItemIngested(ImageRecord),
    /// Back control.
    Back,
    /// "Try another item" on the result step.
    TryAnotherItem,
    /// "Start over" from anywhere.
    StartOver,
}

/// Which upload step a capture is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Person,
    Item,
}

impl Slot {
    /// The slot an upload step fills, `None` on the other steps.
    #[must_use]
    pub const fn for_step(step: Step) -> Option<Slot> {
        match step {
            Step::UploadPerson => Some(Slot::Person),
            Step::UploadItem => Some(Slot::Item),
            _ => None,
        }
    }

    /// The trigger fired once a capture for this slot is ingested.
    #[must_use]
    pub fn ingested(self, image: ImageRecord) -> Action {
        match self {
            Slot::Person => Action::PersonIngested(image),
            Slot::Item => Action::ItemIngested(image),
        }
    }
}

/// What the caller has to do after a dispatch.
#[derive(Debug, Clone)]
pub enum Effect {
    /// The action does not apply to the effective step.
    Ignored,
    /// State changed; nothing else to do.
    Applied,
    /// State changed and this submission must be sent.
    Submit(Submission),
}

/// Slot clearing applied when the exit animation commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    Nothing,
    ClearItem,
    ClearAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    target: Step,
    deferred: Deferred,
}

/// Progressive selections collected by the wizard.
#[derive(Debug, Clone, Default)]
struct Selections {
    category: Option<Category>,
    person: Option<ImageRecord>,
    item: Option<ImageRecord>,
}

impl Selections {
    fn is_complete(&self) -> bool {
        self.category.is_some() && self.person.is_some() && self.item.is_some()
    }
}

/// The session's step state machine.
#[derive(Debug, Clone)]
pub struct Wizard {
    current: Step,
    pending: Option<Pending>,
    transition: Transition,
    selections: Selections,
    outcome: GenerationOutcome,
    latest_submission: Option<SubmissionId>,
    next_submission: SubmissionId,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Creates a wizard on the start step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Step::Start,
            pending: None,
            transition: Transition::default(),
            selections: Selections::default(),
            outcome: GenerationOutcome::NotStarted,
            latest_submission: None,
            next_submission: SubmissionId::first(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The step currently shown.
    #[must_use]
    pub fn current_step(&self) -> Step {
        self.current
    }

    /// The step queued behind the running exit animation.
    #[must_use]
    pub fn pending_step(&self) -> Option<Step> {
        self.pending.map(|pending| pending.target)
    }

    /// The step the wizard is heading to: pending if any, else current.
    ///
    /// Triggers are validated against this step.
    #[must_use]
    pub fn effective_step(&self) -> Step {
        self.pending_step().unwrap_or(self.current)
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.selections.category
    }

    #[must_use]
    pub fn person_image(&self) -> Option<&ImageRecord> {
        self.selections.person.as_ref()
    }

    #[must_use]
    pub fn item_image(&self) -> Option<&ImageRecord> {
        self.selections.item.as_ref()
    }

    #[must_use]
    pub fn outcome(&self) -> &GenerationOutcome {
        &self.outcome
    }

    /// Tag of the submission whose result is still awaited or shown.
    #[must_use]
    pub fn latest_submission(&self) -> Option<SubmissionId> {
        self.latest_submission
    }

    // =========================================================================
    // Transition table
    // =========================================================================

    /// Applies one trigger from the transition table.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        let from = self.effective_step();
        if !accepts(from, &action) {
            return Effect::Ignored;
        }

        // A request replaced mid-exit still owes its clearing.
        self.flush_deferred();

        match (from, action) {
            (Step::Start, Action::Advance) => {
                self.request(Step::UploadPerson, Direction::Forward, Deferred::Nothing);
                Effect::Applied
            }
            (Step::UploadPerson, Action::PersonIngested(image)) => {
                self.selections.person = Some(image);
                self.request(
                    Step::SelectCategory,
                    Direction::Forward,
                    Deferred::Nothing,
                );
                Effect::Applied
            }
            (Step::SelectCategory, Action::CategoryChosen(category)) => {
                self.selections.category = Some(category);
                self.request(Step::UploadItem, Direction::Forward, Deferred::Nothing);
                Effect::Applied
            }
            (Step::UploadItem, Action::ItemIngested(image)) => self.submit_item(image),
            (Step::Result, Action::TryAnotherItem) => {
                self.latest_submission = None;
                self.request(Step::UploadItem, Direction::Forward, Deferred::ClearItem);
                Effect::Applied
            }
            // Already idle on start: no exit to animate, so clear at once.
            (Step::Start, Action::StartOver) if self.pending.is_none() => {
                self.clear_all();
                Effect::Applied
            }
            (_, Action::StartOver) => {
                self.latest_submission = None;
                self.request(Step::Start, Direction::Backward, Deferred::ClearAll);
                Effect::Applied
            }
            (step, Action::Back) => match step.previous() {
                Some(previous) => {
                    self.request(previous, Direction::Backward, Deferred::Nothing);
                    Effect::Applied
                }
                None => Effect::Ignored,
            },
            _ => Effect::Ignored,
        }
    }

    /// Stores the item, tags a new submission and heads for the result step.
    fn submit_item(&mut self, item: ImageRecord) -> Effect {
        self.selections.item = Some(item);

        let request = match (
            &self.selections.person,
            &self.selections.item,
            self.selections.category,
        ) {
            (Some(person), Some(item), Some(category)) => {
                GenerationRequest::new(person.clone(), item.clone(), category)
            }
            // Unreachable through the table: the upload_item step is only
            // entered after a person capture and a category choice.
            _ => {
                self.selections.item = None;
                return Effect::Ignored;
            }
        };

        let id = self.next_submission;
        self.next_submission = id.following();
        self.latest_submission = Some(id);
        self.outcome = GenerationOutcome::Pending;

        self.request(Step::Result, Direction::Forward, Deferred::Nothing);
        Effect::Submit(Submission { id, request })
    }

    /// Starts (or retargets) the exit phase.
    ///
    /// At most one target is held: a request arriving mid-exit replaces the
    /// pending one. Its clearing was flushed by [`Wizard::dispatch`] first.
    fn request(&mut self, target: Step, direction: Direction, deferred: Deferred) {
        self.pending = Some(Pending { target, deferred });
        self.transition.exit(direction);
    }

    // =========================================================================
    // Animator signals
    // =========================================================================

    /// The exit visual completed: commit the pending step and start entering.
    ///
    /// Returns the committed step, or `None` when nothing was exiting.
    pub fn finish_exit(&mut self) -> Option<Step> {
        if !self.transition.is_exiting() {
            return None;
        }

        let Some(pending) = self.pending.take() else {
            self.transition.settle();
            return None;
        };

        match pending.deferred {
            Deferred::Nothing => {}
            Deferred::ClearItem => self.clear_item(),
            Deferred::ClearAll => self.clear_all(),
        }

        debug_assert!(
            pending.target != Step::Result || self.selections.is_complete(),
            "result step committed without complete selections"
        );

        self.current = pending.target;
        self.transition.enter();
        Some(self.current)
    }

    /// The enter visual completed.
    pub fn finish_enter(&mut self) {
        if self.transition.phase() == super::TransitionPhase::Entering {
            self.transition.settle();
        }
    }

    // =========================================================================
    // Generation results
    // =========================================================================

    /// Records the result of a submission.
    ///
    /// Returns `false` (and changes nothing) when `id` is not the latest
    /// submission, so a slow superseded response can never overwrite a
    /// newer one.
    pub fn complete_generation(
        &mut self,
        id: SubmissionId,
        result: Result<ImageRecord, GenerationFailure>,
    ) -> bool {
        if self.latest_submission != Some(id) {
            return false;
        }

        self.outcome = match result {
            Ok(image) => GenerationOutcome::Succeeded(image),
            Err(failure) => GenerationOutcome::Failed(failure),
        };
        true
    }

    // =========================================================================
    // Slot clearing
    // =========================================================================

    /// Applies the pending request's clearing now and drops it from the
    /// pending target.
    fn flush_deferred(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let deferred = std::mem::replace(&mut pending.deferred, Deferred::Nothing);
        match deferred {
            Deferred::Nothing => {}
            Deferred::ClearItem => self.clear_item(),
            Deferred::ClearAll => self.clear_all(),
        }
    }

    fn clear_item(&mut self) {
        self.selections.item = None;
        self.outcome = GenerationOutcome::NotStarted;
        self.latest_submission = None;
    }

    fn clear_all(&mut self) {
        self.selections = Selections::default();
        self.outcome = GenerationOutcome::NotStarted;
        self.latest_submission = None;
    }
}

/// Whether `action` is a trigger of the transition table on `step`.
fn accepts(step: Step, action: &Action) -> bool {
    match action {
        Action::Advance => step == Step::Start,
        Action::PersonIngested(_) => step == Step::UploadPerson,
        Action::CategoryChosen(_) => step == Step::SelectCategory,
        Action::ItemIngested(_) => step == Step::UploadItem,
        Action::TryAnotherItem => step == Step::Result,
        Action::StartOver => true,
        Action::Back => step.previous().is_some(),
    }
}
