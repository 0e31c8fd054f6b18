// SPDX-License-Identifier: MPL-2.0
//! Wizard steps and transition directions.

/// One screen of the try-on wizard, in linear order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Start,
    UploadPerson,
    SelectCategory,
    UploadItem,
    Result,
}

impl Step {
    /// All steps in wizard order.
    pub const ORDER: [Step; 5] = [
        Step::Start,
        Step::UploadPerson,
        Step::SelectCategory,
        Step::UploadItem,
        Step::Result,
    ];

    /// The step a back action leads to, `None` on [`Step::Start`].
    #[must_use]
    pub const fn previous(self) -> Option<Step> {
        match self {
            Step::Start => None,
            Step::UploadPerson => Some(Step::Start),
            Step::SelectCategory => Some(Step::UploadPerson),
            Step::UploadItem => Some(Step::SelectCategory),
            Step::Result => Some(Step::UploadItem),
        }
    }

    /// Snake-case name, as used in logs and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::UploadPerson => "upload_person",
            Step::SelectCategory => "select_category",
            Step::UploadItem => "upload_item",
            Step::Result => "result",
        }
    }

    /// Whether the back control is offered on this step.
    #[must_use]
    pub const fn has_back(self) -> bool {
        !matches!(self, Step::Start)
    }
}

/// Which way a transition moves through the wizard.
///
/// Only selects the exit/enter visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_walks_back_to_start() {
        let mut step = Step::Result;
        let mut visited = vec![step];
        while let Some(prev) = step.previous() {
            visited.push(prev);
            step = prev;
        }
        visited.reverse();
        assert_eq!(visited, Step::ORDER);
    }

    #[test]
    fn only_start_has_no_back() {
        for step in Step::ORDER {
            assert_eq!(step.has_back(), step.previous().is_some());
        }
    }
}
