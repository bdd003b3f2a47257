use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::tui::theme::Palette;

/// Bordered card with a caption and one emphasised value.
pub struct StatCardWidget<'a> {
    title: &'a str,
    value: String,
    accent: Color,
    palette: &'a Palette,
}

impl<'a> StatCardWidget<'a> {
    pub fn new(title: &'a str, value: impl Into<String>, palette: &'a Palette) -> Self {
        Self {
            title,
            value: value.into(),
            accent: palette.text,
            palette,
        }
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for StatCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(format!(" {} ", self.title)).centered())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.accent))
            .style(self.palette.card_style());
        let inner = block.inner(area);
        block.render(area, buf);

        // Push the value to the vertical middle of the card.
        let pad = inner.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); pad as usize];
        lines.push(Line::from(Span::styled(
            self.value,
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::LIGHT;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn renders_title_and_value() {
        let area = Rect::new(0, 0, 24, 5);
        let mut buf = Buffer::empty(area);
        StatCardWidget::new("Completed", "3", &LIGHT)
            .accent(LIGHT.cycles)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Completed"));
        assert!(text.contains('3'));
    }
}
