use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::timer::display::format_time;
use crate::tui::theme::Palette;

/// Countdown readout shown inside the ring: `MM:SS` plus run state.
pub struct TimerWidget<'a> {
    remaining_secs: u32,
    running: bool,
    palette: &'a Palette,
}

impl<'a> TimerWidget<'a> {
    pub fn new(remaining_secs: u32, palette: &'a Palette) -> Self {
        Self {
            remaining_secs,
            running: false,
            palette,
        }
    }

    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    fn status(&self) -> &'static str {
        if self.running {
            "▶ running"
        } else if self.remaining_secs == 0 {
            "✔ done"
        } else {
            "⏸ paused"
        }
    }
}

impl Widget for TimerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let time = Line::from(Span::styled(
            format_time(self.remaining_secs),
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ));
        let status = Line::from(Span::styled(self.status(), self.palette.hint()));

        Paragraph::new(vec![time, status])
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::LIGHT;
    use crate::tui::widgets::buffer_text;

    fn render(widget: TimerWidget) -> String {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn shows_full_work_countdown() {
        let text = render(TimerWidget::new(1500, &LIGHT));
        assert!(text.contains("25:00"));
        assert!(text.contains("paused"));
    }

    #[test]
    fn shows_running_state() {
        let text = render(TimerWidget::new(65, &LIGHT).running(true));
        assert!(text.contains("01:05"));
        assert!(text.contains("running"));
    }

    #[test]
    fn shows_done_at_zero() {
        let text = render(TimerWidget::new(0, &LIGHT));
        assert!(text.contains("00:00"));
        assert!(text.contains("done"));
    }
}
