//! Guided wizard prompts.
//!
//! Each prompt maps one wizard question to a draft content field. The
//! required prompts also drive the completion score and the base readiness
//! checklist.

/// A single guided question asked by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardPrompt {
    /// Content field this prompt populates
    pub field: &'static str,
    /// Question shown to the user
    pub question: &'static str,
    /// Placeholder hint for the input box
    pub placeholder: &'static str,
    /// Whether this field counts toward the completion score
    pub required: bool,
}

/// The guided questions, in the order the wizard asks them
pub const PROMPTS: &[WizardPrompt] = &[
    WizardPrompt {
        field: "project-name",
        question: "What is your project called?",
        placeholder: "my-project",
        required: true,
    },
    WizardPrompt {
        field: "problem",
        question: "What problem does it solve?",
        placeholder: "Describe the pain point in one or two sentences",
        required: true,
    },
    WizardPrompt {
        field: "target-users",
        question: "Who are the target users?",
        placeholder: "e.g. small engineering teams",
        required: true,
    },
    WizardPrompt {
        field: "key-features",
        question: "What are the key features?",
        placeholder: "Comma-separated list of the must-haves",
        required: true,
    },
    WizardPrompt {
        field: "success-criteria",
        question: "How will you measure success?",
        placeholder: "e.g. 100 weekly active users in 3 months",
        required: true,
    },
    WizardPrompt {
        field: "constraints",
        question: "Any constraints or non-goals? (optional)",
        placeholder: "Press Enter to skip",
        required: false,
    },
];

/// Number of required prompts (the completion score denominator)
pub fn required_count() -> usize {
    PROMPTS.iter().filter(|p| p.required).count()
}

/// Look up a prompt by its field key
pub fn find_prompt(field: &str) -> Option<&'static WizardPrompt> {
    PROMPTS.iter().find(|p| p.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prompts_non_empty() {
        assert!(!PROMPTS.is_empty());
        assert!(required_count() > 0);
    }

    #[test]
    fn test_prompt_fields_are_unique() {
        let fields: HashSet<&str> = PROMPTS.iter().map(|p| p.field).collect();
        assert_eq!(fields.len(), PROMPTS.len());
    }

    #[test]
    fn test_find_prompt() {
        assert!(find_prompt("project-name").is_some());
        assert!(find_prompt("nonexistent").is_none());
    }
}
