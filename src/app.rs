//! Application state and main event loop.
//!
//! The `App` is the wizard flow controller: it owns the current [`Step`],
//! the spec store, the celebration timer, and per-screen UI state, and it
//! renders exactly one screen at a time.

use crate::config::AppConfig;
use crate::domain::{FlowEvent, Step, TemplateId, CATALOG, PROMPTS};
use crate::error::{AppError, Result};
use crate::services::{
    write_artifact, MarkdownExporter, SpecSharer, UnconfiguredSharer,
};
use crate::store::SpecStore;
use crate::ui::input::{Action, InputHandler, InputMode};
use crate::ui::widgets::wizard_form::{AnswerAction, AnswerInput};
use crossterm::event::{self, Event, KeyEvent};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Time-bounded celebratory overlay state.
///
/// Modeled as an owned deadline polled on tick rather than a spawned timer,
/// so nothing outlives the session if it ends early.
#[derive(Debug, Default)]
pub struct CelebrationState {
    until: Option<Instant>,
    frame: u64,
}

impl CelebrationState {
    /// Start the celebration, retracting after `duration`
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
        self.frame = 0;
    }

    /// Advance the animation and retract once the deadline passes
    pub fn tick(&mut self, now: Instant) {
        match self.until {
            Some(deadline) if now >= deadline => self.until = None,
            Some(_) => self.frame = self.frame.wrapping_add(1),
            None => {}
        }
    }

    /// Whether the overlay is currently shown
    pub fn is_active(&self) -> bool {
        self.until.is_some()
    }

    /// Current animation frame
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Per-screen state for the guided wizard
#[derive(Debug, Default)]
pub struct WizardState {
    /// Index of the prompt currently shown
    pub index: usize,
    /// Input buffer for the current answer
    pub input: AnswerInput,
}

/// Main application state
pub struct App {
    /// Loaded configuration
    pub config: AppConfig,
    /// Single source of truth for the draft
    pub store: SpecStore,
    /// Current flow step
    pub step: Step,

    // UI state
    /// Selected card on the template screen
    pub selected_template_index: usize,
    /// Wizard screen state
    pub wizard: WizardState,
    /// Celebration overlay state
    pub celebration: CelebrationState,
    /// Current input mode
    pub input_mode: InputMode,
    /// Transient status message (e.g. export path)
    pub status_message: Option<String>,
    /// Error message to display
    pub error_message: Option<String>,

    // Collaborators
    exporter: MarkdownExporter,
    sharer: UnconfiguredSharer,

    // Input handler
    input_handler: InputHandler,

    /// Should quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        let input_handler = InputHandler::new(config.ui.vim_navigation);
        Self {
            config,
            store: SpecStore::new(),
            step: Step::default(),
            selected_template_index: 0,
            wizard: WizardState::default(),
            celebration: CelebrationState::default(),
            input_mode: InputMode::Normal,
            status_message: None,
            error_message: None,
            exporter: MarkdownExporter::new(),
            sharer: UnconfiguredSharer,
            input_handler,
            should_quit: false,
        }
    }

    /// Apply a flow event through the transition table.
    ///
    /// Events that are invalid for the current step are ignored.
    pub fn apply_event(&mut self, event: FlowEvent) {
        if let Some(next) = self.step.apply(event) {
            tracing::debug!("Flow transition {:?} --{:?}--> {:?}", self.step, event, next);
            self.step = next;
        }
    }

    /// Move the template selection up
    pub fn select_previous_template(&mut self) {
        if self.selected_template_index > 0 {
            self.selected_template_index -= 1;
        }
    }

    /// Move the template selection down
    pub fn select_next_template(&mut self) {
        if self.selected_template_index < CATALOG.len().saturating_sub(1) {
            self.selected_template_index += 1;
        }
    }

    /// Confirm the highlighted template card.
    ///
    /// Writes the id into the store and advances to the wizard; every entry
    /// is selectable, the fallback included.
    pub fn choose_selected_template(&mut self) {
        let Some(template) = CATALOG.get(self.selected_template_index) else {
            return;
        };
        self.store.set_template(template.template_id());
        self.apply_event(FlowEvent::TemplateChosen);
        self.enter_wizard(0);
    }

    /// Convenience used by tests and automation: choose a template by id
    pub fn choose_template(&mut self, id: TemplateId) {
        self.store.set_template(id);
        self.apply_event(FlowEvent::TemplateChosen);
        self.enter_wizard(0);
    }

    /// Enter the wizard at the given prompt, preloading any earlier answer
    fn enter_wizard(&mut self, index: usize) {
        self.wizard.index = index.min(PROMPTS.len().saturating_sub(1));
        self.load_current_answer();
        self.input_mode = InputMode::Insert;
    }

    /// Load the stored answer for the current prompt into the input buffer
    fn load_current_answer(&mut self) {
        let draft = self.store.snapshot();
        let existing = PROMPTS
            .get(self.wizard.index)
            .and_then(|p| draft.content.answer(p.field))
            .unwrap_or_default();
        self.wizard.input = AnswerInput::with_value(existing.to_string());
    }

    /// Push the current input buffer into the store
    fn commit_current_answer(&mut self) {
        if let Some(prompt) = PROMPTS.get(self.wizard.index) {
            self.store.update_content([(
                prompt.field.to_string(),
                self.wizard.input.value().to_string(),
            )]);
        }
    }

    /// Advance to the next prompt, or signal wizard completion after the last
    fn advance_wizard(&mut self) {
        if self.wizard.index + 1 < PROMPTS.len() {
            self.wizard.index += 1;
            self.load_current_answer();
        } else {
            self.finish_wizard();
        }
    }

    /// Signal wizard completion and move to review
    fn finish_wizard(&mut self) {
        self.input_mode = InputMode::Normal;
        self.apply_event(FlowEvent::WizardCompleted);
    }

    /// Go back from review to the wizard (the only backward edge)
    pub fn edit_answers(&mut self) {
        if self.step == Step::Review {
            self.apply_event(FlowEvent::EditRequested);
            self.enter_wizard(0);
        }
    }

    /// Generate the completed spec: advance to the terminal step and start
    /// the celebration overlay
    pub fn generate(&mut self) {
        if self.step != Step::Review {
            return;
        }
        self.apply_event(FlowEvent::GenerateRequested);
        self.celebration
            .start(Instant::now(), self.config.ui.celebration_duration());
    }

    /// Export the draft to a markdown artifact in the configured directory
    pub fn download(&mut self) {
        let draft = self.store.snapshot();
        match write_artifact(&self.exporter, &draft, &self.config.export.directory) {
            Ok(path) => {
                self.status_message = Some(format!("Saved spec to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Export failed: {}", e);
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Produce a shareable link for the draft (currently unconfigured)
    pub fn share(&mut self) {
        let draft = self.store.snapshot();
        match self.sharer.share(&draft) {
            Ok(link) => {
                self.status_message = Some(format!("Share link: {}", link));
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Handle keyboard input and return true if the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear transient messages on any key press
        self.error_message = None;
        self.status_message = None;

        match self.step {
            Step::Template => self.handle_template_key(key),
            Step::Wizard => self.handle_wizard_key(key),
            Step::Review => self.handle_review_key(key),
            Step::Complete => self.handle_complete_key(key),
        }
    }

    /// Handle keys on the template selection screen
    fn handle_template_key(&mut self, key: KeyEvent) -> bool {
        match self.input_handler.handle_key(key, self.input_mode) {
            Some(Action::MoveUp) => self.select_previous_template(),
            Some(Action::MoveDown) => self.select_next_template(),
            Some(Action::Select) => self.choose_selected_template(),
            Some(Action::Quit) | Some(Action::Back) => return true,
            _ => {}
        }
        false
    }

    /// Handle keys on the wizard screen
    fn handle_wizard_key(&mut self, key: KeyEvent) -> bool {
        if let Some(Action::Quit) = self.input_handler.handle_key(key, self.input_mode) {
            return true;
        }

        match self.wizard.input.handle_key(key) {
            AnswerAction::Changed => {
                // Live merge so the score indicator tracks typing
                self.commit_current_answer();
            }
            AnswerAction::Submit => {
                self.commit_current_answer();
                self.advance_wizard();
            }
            AnswerAction::Cancel => {
                // Esc ends the wizard early with whatever has been answered
                self.commit_current_answer();
                self.finish_wizard();
            }
            AnswerAction::None => {}
        }
        false
    }

    /// Handle keys on the review screen
    fn handle_review_key(&mut self, key: KeyEvent) -> bool {
        match self.input_handler.handle_key(key, self.input_mode) {
            Some(Action::Generate) | Some(Action::Select) => self.generate(),
            Some(Action::Edit) => self.edit_answers(),
            Some(Action::Quit) => return true,
            _ => {}
        }
        false
    }

    /// Handle keys on the terminal completion screen
    fn handle_complete_key(&mut self, key: KeyEvent) -> bool {
        match self.input_handler.handle_key(key, self.input_mode) {
            Some(Action::Download) => self.download(),
            Some(Action::Share) => self.share(),
            Some(Action::Quit) | Some(Action::Back) => return true,
            _ => {}
        }
        false
    }

    /// Periodic update driven by the event loop
    pub fn on_tick(&mut self, now: Instant) {
        self.celebration.tick(now);
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(_, _) => {
                        // The next draw picks up the new frame area
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
                self.on_tick(last_tick);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
