//! Completion score indicator rendered in the header.

use ratatui::{prelude::*, widgets::Gauge};

/// Gauge showing the draft's completion score
pub struct CompletionScoreWidget {
    score: u8,
}

impl CompletionScoreWidget {
    /// Create a score widget; values above 100 are clamped
    pub fn new(score: u8) -> Self {
        Self {
            score: score.min(100),
        }
    }

    fn color(&self) -> Color {
        match self.score {
            0..=33 => Color::Red,
            34..=66 => Color::Yellow,
            _ => Color::Green,
        }
    }
}

impl Widget for CompletionScoreWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(self.color()))
            .percent(u16::from(self.score))
            .label(format!("{}% complete", self.score));
        gauge.render(area, buf);
    }
}
