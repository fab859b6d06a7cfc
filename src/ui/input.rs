//! Keyboard input handling with vim-style navigation support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Standard navigation mode
    #[default]
    Normal,
    /// Text entry mode (wizard answers)
    Insert,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,

    // Selection
    Select,
    Back,

    // Flow
    Generate,
    Edit,
    Download,
    Share,

    // Misc
    Quit,
}

/// Input handler for processing keyboard events
pub struct InputHandler {
    vim_navigation: bool,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new(vim_navigation: bool) -> Self {
        Self { vim_navigation }
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> Option<Action> {
        match mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Insert => self.handle_insert_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&self, key: KeyEvent) -> Option<Action> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation - arrow keys always work
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),

            // Vim-style navigation (j/k)
            KeyCode::Char('j') if self.vim_navigation => Some(Action::MoveDown),
            KeyCode::Char('k') if self.vim_navigation => Some(Action::MoveUp),

            // Selection
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Char(' ') => Some(Action::Select),

            // Back/Quit
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),

            // Flow actions
            KeyCode::Char('g') => Some(Action::Generate),
            KeyCode::Char('e') => Some(Action::Edit),
            KeyCode::Char('d') => Some(Action::Download),
            KeyCode::Char('s') => Some(Action::Share),

            _ => None,
        }
    }

    /// Handle key in insert mode.
    ///
    /// Only Ctrl+C maps to an action here; everything else belongs to the
    /// text input widget.
    fn handle_insert_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        None
    }
}
