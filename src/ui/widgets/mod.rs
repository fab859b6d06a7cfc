//! Reusable UI widgets for spec-maker.

pub mod checklist;
pub mod confetti;
pub mod score;
pub mod template_cards;
pub mod wizard_form;
