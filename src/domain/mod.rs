//! Domain entities for spec-maker.
//!
//! This module contains the core business entities:
//! - Template: a selectable project archetype
//! - SpecDraft: the user's in-progress answer set and score
//! - Step/FlowEvent: the wizard flow state machine
//! - WizardPrompt: the guided questions
//! - Checklist: readiness items derived from the draft

mod checklist;
mod draft;
mod flow;
pub mod prompt;
mod template;

pub use checklist::{checklist_for, ChecklistItem, ItemKind};
pub use draft::{completion_score, DraftContent, SpecDraft};
pub use flow::{FlowEvent, Step};
pub use prompt::{find_prompt, WizardPrompt, PROMPTS};
pub use template::{find_template, Template, TemplateId, CATALOG};
