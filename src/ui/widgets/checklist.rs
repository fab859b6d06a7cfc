//! Readiness checklist panel for the review screen.

use crate::domain::{ChecklistItem, ItemKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

/// Widget rendering the derived readiness checklist
pub struct ChecklistWidget<'a> {
    items: &'a [ChecklistItem],
}

impl<'a> ChecklistWidget<'a> {
    /// Create a checklist widget over derived items
    pub fn new(items: &'a [ChecklistItem]) -> Self {
        Self { items }
    }

    fn indicator(item: &ChecklistItem) -> &'static str {
        if item.done {
            "✓"
        } else {
            "○"
        }
    }

    fn color(item: &ChecklistItem) -> Color {
        match (item.done, item.kind) {
            (true, ItemKind::TemplateFeature) => Color::Blue,
            (true, ItemKind::Answer) => Color::Green,
            (false, _) => Color::Yellow,
        }
    }

    fn build_items(&self) -> Vec<ListItem<'a>> {
        self.items
            .iter()
            .map(|item| {
                let line = format!("{} {}", Self::indicator(item), item.label);
                ListItem::new(line).style(Style::default().fg(Self::color(item)))
            })
            .collect()
    }
}

impl Widget for ChecklistWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = List::new(self.build_items()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Readiness Checklist "),
        );
        Widget::render(list, area, buf);
    }
}
