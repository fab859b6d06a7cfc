//! Readiness checklist derived from the draft.
//!
//! One item per required prompt, plus the selected template's feature
//! bullets when the id matches a catalog entry. Unknown or unset template
//! ids yield the base items only.

use super::draft::SpecDraft;
use super::prompt::{self, WizardPrompt};
use super::template;

/// Where a checklist item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Derived from a required wizard prompt
    Answer,
    /// Informational item contributed by the selected template
    TemplateFeature,
}

/// A single readiness checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Display label
    pub label: String,
    /// Whether the item is satisfied
    pub done: bool,
    /// Item provenance
    pub kind: ItemKind,
}

/// Build the checklist for the current draft state
pub fn checklist_for(draft: &SpecDraft) -> Vec<ChecklistItem> {
    let mut items: Vec<ChecklistItem> = prompt::PROMPTS
        .iter()
        .filter(|p| p.required)
        .map(|p| answer_item(p, draft))
        .collect();

    // Template features are covered by the template itself, so they start
    // satisfied. Unknown ids contribute nothing.
    if let Some(id) = &draft.selected_template {
        if let Some(tpl) = template::find_template(id.as_str()) {
            items.extend(tpl.features.iter().map(|feature| ChecklistItem {
                label: format!("{} ({})", feature, tpl.name),
                done: true,
                kind: ItemKind::TemplateFeature,
            }));
        }
    }

    items
}

fn answer_item(prompt: &WizardPrompt, draft: &SpecDraft) -> ChecklistItem {
    ChecklistItem {
        label: prompt.question.to_string(),
        done: draft.content.is_populated(prompt.field),
        kind: ItemKind::Answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateId;

    #[test]
    fn test_empty_draft_has_base_items_only() {
        let draft = SpecDraft::default();
        let items = checklist_for(&draft);
        assert_eq!(items.len(), prompt::required_count());
        assert!(items.iter().all(|i| !i.done));
        assert!(items.iter().all(|i| i.kind == ItemKind::Answer));
    }

    #[test]
    fn test_known_template_appends_feature_items() {
        let mut draft = SpecDraft::default();
        draft.selected_template = Some(TemplateId::new("saas-platform"));
        let items = checklist_for(&draft);
        let features: Vec<_> = items
            .iter()
            .filter(|i| i.kind == ItemKind::TemplateFeature)
            .collect();
        assert_eq!(features.len(), 4);
        assert!(features.iter().all(|i| i.done));
    }

    #[test]
    fn test_unknown_template_adds_no_customization() {
        let mut draft = SpecDraft::default();
        draft.selected_template = Some(TemplateId::new("mystery"));
        let items = checklist_for(&draft);
        assert_eq!(items.len(), prompt::required_count());
    }

    #[test]
    fn test_answered_prompts_are_done() {
        let mut draft = SpecDraft::default();
        draft
            .content
            .merge([("project-name".to_string(), "acme".to_string())]);
        let items = checklist_for(&draft);
        let done_count = items.iter().filter(|i| i.done).count();
        assert_eq!(done_count, 1);
    }
}
