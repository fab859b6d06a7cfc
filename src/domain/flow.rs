//! Wizard flow state machine.
//!
//! A four-state linear flow with one backward edge (`Review -> Wizard`).
//! The transition table is pure so the control logic is testable without a
//! terminal.

/// Current step of the wizard flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Template selection (initial)
    #[default]
    Template,
    /// Guided question wizard
    Wizard,
    /// Checklist review before generation
    Review,
    /// Terminal celebration screen
    Complete,
}

/// Events that drive flow transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// A template card was confirmed
    TemplateChosen,
    /// The wizard answered its last prompt
    WizardCompleted,
    /// The user asked to generate the final spec
    GenerateRequested,
    /// The user asked to go back and edit answers
    EditRequested,
}

impl Step {
    /// Apply an event to the current step.
    ///
    /// Returns `None` when the event is not valid in this state; the caller
    /// ignores such events. `Complete` accepts no events.
    pub fn apply(self, event: FlowEvent) -> Option<Step> {
        match (self, event) {
            (Step::Template, FlowEvent::TemplateChosen) => Some(Step::Wizard),
            (Step::Wizard, FlowEvent::WizardCompleted) => Some(Step::Review),
            (Step::Review, FlowEvent::GenerateRequested) => Some(Step::Complete),
            (Step::Review, FlowEvent::EditRequested) => Some(Step::Wizard),
            _ => None,
        }
    }

    /// Whether the completion score indicator is shown for this step.
    ///
    /// Visible everywhere except the initial template screen.
    pub fn shows_score(self) -> bool {
        !matches!(self, Step::Template)
    }

    /// Whether this step is terminal
    pub fn is_terminal(self) -> bool {
        matches!(self, Step::Complete)
    }

    /// Display title for the screen header
    pub fn title(self) -> &'static str {
        match self {
            Step::Template => "Choose a Template",
            Step::Wizard => "Build Your Spec",
            Step::Review => "Review Your Spec",
            Step::Complete => "Spec Complete!",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [FlowEvent; 4] = [
        FlowEvent::TemplateChosen,
        FlowEvent::WizardCompleted,
        FlowEvent::GenerateRequested,
        FlowEvent::EditRequested,
    ];

    #[test]
    fn test_happy_path() {
        let step = Step::default();
        assert_eq!(step, Step::Template);

        let step = step.apply(FlowEvent::TemplateChosen).unwrap();
        assert_eq!(step, Step::Wizard);

        let step = step.apply(FlowEvent::WizardCompleted).unwrap();
        assert_eq!(step, Step::Review);

        let step = step.apply(FlowEvent::GenerateRequested).unwrap();
        assert_eq!(step, Step::Complete);
    }

    #[test]
    fn test_review_edit_returns_to_wizard() {
        assert_eq!(
            Step::Review.apply(FlowEvent::EditRequested),
            Some(Step::Wizard)
        );
    }

    #[test]
    fn test_complete_is_terminal() {
        for event in ALL_EVENTS {
            assert_eq!(Step::Complete.apply(event), None);
        }
        assert!(Step::Complete.is_terminal());
    }

    #[test]
    fn test_invalid_events_are_rejected() {
        // No skipping forward
        assert_eq!(Step::Template.apply(FlowEvent::WizardCompleted), None);
        assert_eq!(Step::Template.apply(FlowEvent::GenerateRequested), None);
        // No going backward except review -> wizard
        assert_eq!(Step::Wizard.apply(FlowEvent::EditRequested), None);
        assert_eq!(Step::Wizard.apply(FlowEvent::TemplateChosen), None);
        assert_eq!(Step::Review.apply(FlowEvent::TemplateChosen), None);
    }

    #[test]
    fn test_score_visibility() {
        assert!(!Step::Template.shows_score());
        assert!(Step::Wizard.shows_score());
        assert!(Step::Review.shows_score());
        assert!(Step::Complete.shows_score());
    }
}
