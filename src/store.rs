//! Session-scoped specification store.
//!
//! The store is the single source of truth read across wizard steps: it owns
//! the [`SpecDraft`] and broadcasts every committed mutation over a tokio
//! watch channel, so any subscriber observes the latest value with no
//! intermediate inconsistent reads.

use crate::domain::{SpecDraft, TemplateId};
use tokio::sync::watch;

/// Shared mutable container for the in-progress specification.
///
/// Created once per session and dropped with it; `reset` restores the
/// initial state if a new session begins without a restart.
pub struct SpecStore {
    tx: watch::Sender<SpecDraft>,
}

impl SpecStore {
    /// Create a store holding an empty draft
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SpecDraft::default());
        Self { tx }
    }

    /// Record the selected template id.
    ///
    /// Ids are not validated against the catalog; an unknown id just means
    /// no checklist customization. Content and score are left untouched.
    pub fn set_template(&self, id: TemplateId) {
        self.tx.send_modify(|draft| {
            draft.selected_template = Some(id);
        });
    }

    /// Merge partial answer data into the draft content and recompute the
    /// completion score.
    pub fn update_content(&self, partial: impl IntoIterator<Item = (String, String)>) {
        self.tx.send_modify(|draft| {
            draft.content.merge(partial);
            draft.recompute_score();
        });
    }

    /// Clear all fields back to the initial state
    pub fn reset(&self) {
        self.tx.send_modify(|draft| *draft = SpecDraft::default());
    }

    /// Clone of the current draft
    pub fn snapshot(&self) -> SpecDraft {
        self.tx.borrow().clone()
    }

    /// Subscribe to draft changes.
    ///
    /// The receiver sees the value as of subscription time and is notified
    /// on every subsequent mutation.
    pub fn subscribe(&self) -> watch::Receiver<SpecDraft> {
        self.tx.subscribe()
    }

    /// Current completion score (0-100)
    pub fn completion_score(&self) -> u8 {
        self.tx.borrow().completion_score
    }
}

impl Default for SpecStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_template_leaves_content_untouched() {
        let store = SpecStore::new();
        store.update_content([("project-name".to_string(), "acme".to_string())]);
        let score_before = store.completion_score();

        store.set_template(TemplateId::new("saas-platform"));

        let draft = store.snapshot();
        assert_eq!(
            draft.selected_template,
            Some(TemplateId::new("saas-platform"))
        );
        assert_eq!(draft.content.answer("project-name"), Some("acme"));
        assert_eq!(draft.completion_score, score_before);
    }

    #[test]
    fn test_unknown_template_id_is_accepted() {
        let store = SpecStore::new();
        store.set_template(TemplateId::new("not-in-catalog"));
        assert_eq!(
            store.snapshot().selected_template,
            Some(TemplateId::new("not-in-catalog"))
        );
    }

    #[test]
    fn test_update_content_recomputes_score() {
        let store = SpecStore::new();
        assert_eq!(store.completion_score(), 0);

        store.update_content([("project-name".to_string(), "acme".to_string())]);
        let partial = store.completion_score();
        assert!(partial > 0);

        for p in crate::domain::PROMPTS.iter().filter(|p| p.required) {
            store.update_content([(p.field.to_string(), "answered".to_string())]);
        }
        assert_eq!(store.completion_score(), 100);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let store = SpecStore::new();
        store.set_template(TemplateId::new("web-app"));
        store.update_content([("problem".to_string(), "too much toil".to_string())]);

        store.reset();

        let draft = store.snapshot();
        assert_eq!(draft, SpecDraft::default());
    }

    #[test]
    fn test_subscribers_observe_mutations() {
        let store = SpecStore::new();
        let mut rx = store.subscribe();
        assert!(rx.borrow().selected_template.is_none());

        store.set_template(TemplateId::new("api-service"));

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().selected_template,
            Some(TemplateId::new("api-service"))
        );
    }
}
