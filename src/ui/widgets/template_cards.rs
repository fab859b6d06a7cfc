//! Template card list for the selection screen.

use crate::domain::Template;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Widget rendering the template catalog as selectable cards
pub struct TemplateCardsWidget<'a> {
    templates: &'a [Template],
    selected_index: usize,
}

impl<'a> TemplateCardsWidget<'a> {
    /// Create a new card list over the catalog
    pub fn new(templates: &'a [Template], selected_index: usize) -> Self {
        Self {
            templates,
            selected_index,
        }
    }

    /// Build list items from templates
    fn build_items(&self) -> Vec<ListItem<'a>> {
        self.templates
            .iter()
            .enumerate()
            .map(|(idx, template)| {
                let selected = idx == self.selected_index;
                let name_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };

                let mut lines = vec![
                    Line::from(Span::styled(template.name, name_style)),
                    Line::from(Span::styled(
                        template.description,
                        Style::default().fg(Color::Gray),
                    )),
                ];
                for feature in template.features {
                    lines.push(Line::from(Span::styled(
                        format!("  • {}", feature),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines.push(Line::from(""));

                ListItem::new(lines)
            })
            .collect()
    }
}

impl Widget for TemplateCardsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = self.build_items();

        let mut state = ListState::default();
        state.select(Some(self.selected_index));

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Templates "))
            .highlight_style(Style::default().bg(Color::Blue))
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CATALOG;

    #[test]
    fn test_one_item_per_template() {
        let widget = TemplateCardsWidget::new(CATALOG, 0);
        assert_eq!(widget.build_items().len(), CATALOG.len());
    }

    #[test]
    fn test_empty_catalog_builds_no_items() {
        let widget = TemplateCardsWidget::new(&[], 0);
        assert!(widget.build_items().is_empty());
    }
}
