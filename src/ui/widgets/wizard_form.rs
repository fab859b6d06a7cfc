//! Guided wizard form: one prompt at a time with a single-line answer box.

use crate::domain::WizardPrompt;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Single-line answer input state
#[derive(Debug, Default, Clone)]
pub struct AnswerInput {
    /// Current value
    pub value: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl AnswerInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an existing answer, cursor at the end
    pub fn with_value(value: String) -> Self {
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> AnswerAction {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return AnswerAction::None;
                }
                let byte_idx = self.byte_index(self.cursor);
                self.value.insert(byte_idx, c);
                self.cursor += 1;
                AnswerAction::Changed
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte_idx = self.byte_index(self.cursor);
                    self.value.remove(byte_idx);
                    AnswerAction::Changed
                } else {
                    AnswerAction::None
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let byte_idx = self.byte_index(self.cursor);
                    self.value.remove(byte_idx);
                    AnswerAction::Changed
                } else {
                    AnswerAction::None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                AnswerAction::None
            }
            KeyCode::Right => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                }
                AnswerAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                AnswerAction::None
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                AnswerAction::None
            }
            KeyCode::Enter => AnswerAction::Submit,
            KeyCode::Esc => AnswerAction::Cancel,
            _ => AnswerAction::None,
        }
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Byte offset of a character index
    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Result of feeding a key to the answer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerAction {
    /// No action
    None,
    /// Value changed
    Changed,
    /// User submitted the answer (Enter)
    Submit,
    /// User cancelled (Esc)
    Cancel,
}

/// Widget rendering the current prompt and its answer box
pub struct WizardFormWidget<'a> {
    prompt: &'a WizardPrompt,
    input: &'a AnswerInput,
    /// Zero-based index of the current prompt
    position: usize,
    /// Total number of prompts
    total: usize,
}

impl<'a> WizardFormWidget<'a> {
    /// Create the form for one prompt
    pub fn new(
        prompt: &'a WizardPrompt,
        input: &'a AnswerInput,
        position: usize,
        total: usize,
    ) -> Self {
        Self {
            prompt,
            input,
            position,
            total,
        }
    }
}

impl Widget for WizardFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Question
                Constraint::Length(3), // Input box
                Constraint::Min(0),    // Hint
            ])
            .split(area);

        let progress = format!("Question {} of {}", self.position + 1, self.total);
        let requirement = if self.prompt.required {
            ""
        } else {
            " (optional)"
        };
        let question = Paragraph::new(vec![
            Line::from(Span::styled(progress, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                format!("{}{}", self.prompt.question, requirement),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        ])
        .wrap(Wrap { trim: true });
        question.render(chunks[0], buf);

        // Answer box with cursor
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Answer ");
        let inner = block.inner(chunks[1]);
        block.render(chunks[1], buf);

        if self.input.value.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                " ",
                Style::default().fg(Color::Black).bg(Color::White),
            );
            buf.set_string(
                inner.x + 1,
                inner.y,
                self.prompt.placeholder,
                Style::default().fg(Color::DarkGray),
            );
        } else {
            let before: String = self.input.value.chars().take(self.input.cursor).collect();
            let at: String = self
                .input
                .value
                .chars()
                .skip(self.input.cursor)
                .take(1)
                .collect();
            let after: String = self
                .input
                .value
                .chars()
                .skip(self.input.cursor + 1)
                .collect();

            let mut x = inner.x;
            buf.set_string(x, inner.y, &before, Style::default());
            x += before.chars().count() as u16;

            let cursor_text = if at.is_empty() { " " } else { at.as_str() };
            buf.set_string(
                x,
                inner.y,
                cursor_text,
                Style::default().fg(Color::Black).bg(Color::White),
            );
            x += 1;

            buf.set_string(x, inner.y, &after, Style::default());
        }

        let hint = Paragraph::new(" Enter: Next | Esc: Review what you have so far ")
            .style(Style::default().fg(Color::DarkGray));
        hint.render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = AnswerInput::new();
        input.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
        input.handle_key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE));
        assert_eq!(input.value(), "hi");
        assert_eq!(input.cursor, 2);

        input.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(input.value(), "h");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut input = AnswerInput::with_value("hello".to_string());
        assert_eq!(input.cursor, 5);

        input.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        assert_eq!(input.cursor, 0);

        input.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        assert_eq!(input.cursor, 5);

        input.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_multibyte_answers() {
        let mut input = AnswerInput::with_value("héllo".to_string());
        input.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        input.handle_key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(input.value(), "éllo");
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut input = AnswerInput::new();
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            AnswerAction::Submit
        );
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            AnswerAction::Cancel
        );
    }
}
