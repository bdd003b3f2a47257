use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs, Widget};

use crate::timer::Mode;
use crate::tui::theme::Palette;

/// Mode selector: one tab per preset, the active one highlighted.
pub struct ModeTabsWidget<'a> {
    active: Mode,
    palette: &'a Palette,
}

impl<'a> ModeTabsWidget<'a> {
    pub fn new(active: Mode, palette: &'a Palette) -> Self {
        Self { active, palette }
    }
}

impl Widget for ModeTabsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Mode::ALL
            .iter()
            .enumerate()
            .map(|(i, mode)| Line::from(format!(" {} {} ", i + 1, mode.label())))
            .collect();
        let selected = Mode::ALL
            .iter()
            .position(|mode| *mode == self.active)
            .unwrap_or(0);

        Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.palette.hint()),
            )
            .style(self.palette.hint())
            .highlight_style(
                Style::default()
                    .fg(self.palette.background)
                    .bg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .select(selected)
            .divider("│")
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::LIGHT;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn lists_all_modes_in_order() {
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        ModeTabsWidget::new(Mode::ShortBreak, &LIGHT).render(area, &mut buf);

        let text = buffer_text(&buf);
        let work = text.find("Focus time").unwrap();
        let short = text.find("Short break").unwrap();
        let long = text.find("Long break").unwrap();
        assert!(work < short && short < long);
    }

    #[test]
    fn highlights_active_mode() {
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        ModeTabsWidget::new(Mode::LongBreak, &LIGHT).render(area, &mut buf);

        let symbols: Vec<&str> = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        let col = (0..symbols.len() - 2)
            .find(|&i| symbols[i] == "3" && symbols[i + 2] == "L")
            .unwrap() as u16;
        assert_eq!(buf[(col, 0)].bg, LIGHT.accent);
        assert_ne!(buf[(0, 0)].bg, LIGHT.accent);
    }
}
