//! Main layout rendering for the TUI.
//!
//! One screen per flow step, plus a header carrying the completion score
//! indicator on every step except template selection.

use crate::app::App;
use crate::domain::{checklist_for, find_template, Step, CATALOG, PROMPTS};
use crate::ui::widgets::checklist::ChecklistWidget;
use crate::ui::widgets::confetti::ConfettiWidget;
use crate::ui::widgets::score::CompletionScoreWidget;
use crate::ui::widgets::template_cards::TemplateCardsWidget;
use crate::ui::widgets::wizard_form::WizardFormWidget;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draw the main application UI
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    match app.step {
        Step::Template => draw_template(frame, app, chunks[1]),
        Step::Wizard => draw_wizard(frame, app, chunks[1]),
        Step::Review => draw_review(frame, app, chunks[1]),
        Step::Complete => draw_complete(frame, app, chunks[1]),
    }

    draw_footer(frame, app, chunks[2]);

    // Confetti on top of everything while the celebration is active
    if app.celebration.is_active() {
        frame.render_widget(ConfettiWidget::new(app.celebration.frame()), area);
    }

    if let Some(ref error) = app.error_message {
        draw_error_overlay(frame, error, area);
    }

    if let Some(ref msg) = app.status_message {
        draw_status_message(frame, msg, area);
    }
}

/// Header: app title on the left, score gauge on the right (except on the
/// template screen)
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    let title = Paragraph::new(format!("spec-maker - {}", app.step.title()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, columns[0]);

    if app.step.shows_score() {
        let gauge_area = columns[1].inner(Margin::new(1, 1));
        frame.render_widget(
            CompletionScoreWidget::new(app.store.completion_score()),
            gauge_area,
        );
    }
}

/// Footer keybinding hints per screen
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer_text = match app.step {
        Step::Template => " j/k: Navigate | Enter: Choose template | q: Quit ",
        Step::Wizard => " Type your answer | Enter: Next question | Esc: Skip to review ",
        Step::Review => " g/Enter: Generate spec | e: Back to edit | q: Quit ",
        Step::Complete => " d: Download | s: Share | q: Quit ",
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

/// Template selection screen
fn draw_template(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let tagline = Paragraph::new("Choose a template and build your perfect spec")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[0]);

    frame.render_widget(
        TemplateCardsWidget::new(CATALOG, app.selected_template_index),
        chunks[1],
    );
}

/// Guided wizard screen
fn draw_wizard(frame: &mut Frame, app: &App, area: Rect) {
    let body = centered_rect(70, 60, area);
    if let Some(prompt) = PROMPTS.get(app.wizard.index) {
        frame.render_widget(
            WizardFormWidget::new(prompt, &app.wizard.input, app.wizard.index, PROMPTS.len()),
            body,
        );
    }
}

/// Review screen with the readiness checklist
fn draw_review(frame: &mut Frame, app: &App, area: Rect) {
    let draft = app.store.snapshot();
    let items = checklist_for(&draft);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let template_line = match draft
        .selected_template
        .as_ref()
        .and_then(|id| find_template(id.as_str()))
    {
        Some(tpl) => format!("Template: {}", tpl.name),
        None => "Template: (none)".to_string(),
    };
    let summary = Paragraph::new(template_line).style(Style::default().fg(Color::Gray));
    frame.render_widget(summary, chunks[0]);

    frame.render_widget(ChecklistWidget::new(&items), chunks[1]);
}

/// Terminal completion screen
fn draw_complete(frame: &mut Frame, app: &App, area: Rect) {
    let draft = app.store.snapshot();
    let name = draft
        .content
        .answer("project-name")
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("your project");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Spec Complete!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "The specification for {} is ready to download.",
            name
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final completion score: {}%", draft.completion_score),
            Style::default().fg(Color::Gray),
        )),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, centered_rect(60, 50, area));
}

/// Draw a status message at the bottom of the screen
fn draw_status_message(frame: &mut Frame, message: &str, area: Rect) {
    let msg_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(4),
        width: area.width.saturating_sub(4).min(message.len() as u16 + 4),
        height: 3,
    };

    frame.render_widget(Clear, msg_area);

    let status = Paragraph::new(message)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(status, msg_area);
}

/// Draw error overlay
fn draw_error_overlay(frame: &mut Frame, error: &str, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    frame.render_widget(Clear, popup_area);

    let error_widget = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(error_widget, popup_area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
