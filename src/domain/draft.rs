//! The in-progress specification draft.
//!
//! One draft exists per session, owned by the [`crate::store::SpecStore`].
//! Nothing persists it across runs; `reset` restores the initial state.

use super::prompt;
use super::TemplateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer content collected by the wizard, keyed by prompt field.
///
/// Opaque to the flow controller; only the wizard and checklist interpret
/// field keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftContent {
    answers: BTreeMap<String, String>,
}

impl DraftContent {
    /// Merge partial answer data into the content.
    ///
    /// Existing answers for the same field are replaced.
    pub fn merge(&mut self, partial: impl IntoIterator<Item = (String, String)>) {
        for (field, answer) in partial {
            self.answers.insert(field, answer);
        }
    }

    /// Get the answer for a field, if any
    pub fn answer(&self, field: &str) -> Option<&str> {
        self.answers.get(field).map(String::as_str)
    }

    /// Whether a field holds a non-whitespace answer
    pub fn is_populated(&self, field: &str) -> bool {
        self.answer(field).is_some_and(|a| !a.trim().is_empty())
    }

    /// Iterate over all (field, answer) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(f, a)| (f.as_str(), a.as_str()))
    }

    /// Whether no answers have been recorded
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// The user's in-progress specification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecDraft {
    /// Selected template id, unset until the user picks a card
    pub selected_template: Option<TemplateId>,
    /// Structured answers collected by the wizard
    pub content: DraftContent,
    /// Derived readiness score, 0-100
    pub completion_score: u8,
}

impl SpecDraft {
    /// Recompute the completion score from the current content.
    ///
    /// The score is the percentage of required prompts with a populated
    /// answer, so it is monotonic as answers are filled in.
    pub fn recompute_score(&mut self) {
        self.completion_score = completion_score(&self.content);
    }
}

/// Score a content set: `100 * populated required fields / required fields`
pub fn completion_score(content: &DraftContent) -> u8 {
    let total = prompt::required_count();
    if total == 0 {
        return 0;
    }
    let populated = prompt::PROMPTS
        .iter()
        .filter(|p| p.required && content.is_populated(p.field))
        .count();
    ((populated * 100) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(field: &str, text: &str) -> (String, String) {
        (field.to_string(), text.to_string())
    }

    #[test]
    fn test_empty_draft_scores_zero() {
        let draft = SpecDraft::default();
        assert_eq!(completion_score(&draft.content), 0);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut content = DraftContent::default();
        let mut last = 0;
        for p in prompt::PROMPTS.iter().filter(|p| p.required) {
            content.merge([answer(p.field, "something")]);
            let score = completion_score(&content);
            assert!(score >= last, "score decreased from {} to {}", last, score);
            last = score;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_whitespace_answers_do_not_count() {
        let mut content = DraftContent::default();
        content.merge([answer("project-name", "   ")]);
        assert_eq!(completion_score(&content), 0);
        assert!(!content.is_populated("project-name"));
    }

    #[test]
    fn test_optional_fields_do_not_affect_score() {
        let mut content = DraftContent::default();
        content.merge([answer("constraints", "no mobile support")]);
        assert_eq!(completion_score(&content), 0);
    }

    #[test]
    fn test_merge_replaces_existing_answer() {
        let mut content = DraftContent::default();
        content.merge([answer("problem", "first")]);
        content.merge([answer("problem", "second")]);
        assert_eq!(content.answer("problem"), Some("second"));
    }

    #[test]
    fn test_recompute_score() {
        let mut draft = SpecDraft::default();
        draft.content.merge([answer("project-name", "acme")]);
        draft.recompute_score();
        assert!(draft.completion_score > 0);
        assert!(draft.completion_score < 100);
    }
}
