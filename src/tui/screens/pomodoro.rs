use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tracing::{debug, info};

use crate::config::UiConfig;
use crate::timer::display::{format_time, progress_percent, ring_offset, rounded_percent};
use crate::timer::ticker::Ticker;
use crate::timer::{Mode, TickOutcome, TimerState};
use crate::tui::event::{AppEvent, EventHandler};
use crate::tui::theme::Palette;
use crate::tui::widgets::mode_tabs::ModeTabsWidget;
use crate::tui::widgets::ring::{fit_square, RingWidget};
use crate::tui::widgets::stat_card::StatCardWidget;
use crate::tui::widgets::timer::TimerWidget;
use crate::tui::Tui;

/// What the main loop should do after handling an input.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of a timer session.
pub struct PomodoroOutcome {
    pub completed_cycles: u32,
}

/// The Pomodoro screen: timer state plus the tick source that drives it.
///
/// The ticker is armed only while the state is running with time left, and
/// is cancelled on every other transition, so a tick can never land on a
/// countdown that was paused, reset or swapped out.
pub struct PomodoroScreen {
    state: TimerState,
    ticker: Ticker,
}

impl Default for PomodoroScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PomodoroScreen {
    pub fn new() -> Self {
        Self {
            state: TimerState::new(),
            ticker: Ticker::default(),
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    #[cfg(test)]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Map a key press to a timer operation.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.quit();
            }
            KeyCode::Char('q') | KeyCode::Esc => return self.quit(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.toggle_run(),
            KeyCode::Char('r') => self.state.reset(),
            KeyCode::Char('1') => self.state.switch_mode(Mode::Work),
            KeyCode::Char('2') => self.state.switch_mode(Mode::ShortBreak),
            KeyCode::Char('3') => self.state.switch_mode(Mode::LongBreak),
            KeyCode::Tab => self.state.switch_mode(self.state.mode().next()),
            KeyCode::Char('t') => self.state.toggle_theme(),
            _ => return Flow::Continue,
        }

        self.sync_ticker(now);
        Flow::Continue
    }

    /// Deliver a due tick, if any.
    pub fn poll_tick(&mut self, now: Instant) -> TickOutcome {
        if !self.ticker.poll(now) {
            return TickOutcome::Idle;
        }

        let outcome = self.state.tick();
        if let TickOutcome::Completed(mode) = outcome {
            info!(?mode, cycles = self.state.completed_cycles(), "countdown complete");
        }
        self.sync_ticker(now);
        outcome
    }

    fn sync_ticker(&mut self, now: Instant) {
        let should_tick = self.state.is_running() && self.state.remaining_secs() > 0;
        match (should_tick, self.ticker.is_armed()) {
            (true, false) => {
                debug!("ticker armed");
                self.ticker.start(now);
            }
            (false, true) => {
                debug!("ticker cancelled");
                self.ticker.cancel();
            }
            _ => {}
        }
    }

    fn quit(&mut self) -> Flow {
        self.ticker.cancel();
        Flow::Quit
    }

    fn outcome(&self) -> PomodoroOutcome {
        PomodoroOutcome {
            completed_cycles: self.state.completed_cycles(),
        }
    }
}

/// Run the Pomodoro screen until the user quits.
pub fn run(terminal: &mut Tui, ui: &UiConfig) -> anyhow::Result<PomodoroOutcome> {
    let events = EventHandler::new(ui.frame_interval());
    let mut screen = PomodoroScreen::new();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_pomodoro(frame, area, &screen, ui.show_key_hints);
        })?;

        match events.next()? {
            AppEvent::Key(key) => {
                if screen.handle_key(key, Instant::now()) == Flow::Quit {
                    return Ok(screen.outcome());
                }
            }
            AppEvent::Frame | AppEvent::Resize(_, _) => {}
        }

        screen.poll_tick(Instant::now());
    }
}

fn render_pomodoro(
    frame: &mut ratatui::Frame,
    area: Rect,
    screen: &PomodoroScreen,
    show_key_hints: bool,
) {
    let state = screen.state();
    let palette = Palette::for_theme(state.dark_theme());
    let percent = progress_percent(state);

    let theme_label = if state.dark_theme() { " ☾ dark " } else { " ☀ light " };
    let outer = Block::default()
        .title(Line::from(" ⏱ StudyFlow Timer ").left_aligned())
        .title(Line::from(theme_label).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(palette.base());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::vertical([
        Constraint::Length(2), // mode selector
        Constraint::Min(10),   // cards + ring
        Constraint::Length(1), // key hint
        Constraint::Length(1), // tagline
    ])
    .split(inner);

    frame.render_widget(ModeTabsWidget::new(state.mode(), palette), rows[0]);

    let cols = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(2, 4),
        Constraint::Ratio(1, 4),
    ])
    .split(rows[1]);

    let left = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(cols[0]);
    frame.render_widget(
        StatCardWidget::new("Completed pomodoros", format!("{} 🍅", state.completed_cycles()), palette)
            .accent(palette.cycles),
        left[0],
    );
    frame.render_widget(
        StatCardWidget::new("Current mode", state.mode().label(), palette).accent(palette.mode),
        left[1],
    );

    let ring_area = fit_square(cols[1]);
    frame.render_widget(RingWidget::new(ring_offset(percent), palette), ring_area);
    let readout = Rect {
        x: ring_area.x,
        y: ring_area.y + ring_area.height.saturating_sub(2) / 2,
        width: ring_area.width,
        height: ring_area.height.min(2),
    };
    frame.render_widget(
        TimerWidget::new(state.remaining_secs(), palette).running(state.is_running()),
        readout,
    );

    let right = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(cols[2]);
    frame.render_widget(
        StatCardWidget::new("Progress", format!("{}%", rounded_percent(percent)), palette)
            .accent(palette.progress),
        right[0],
    );
    frame.render_widget(
        StatCardWidget::new("Time left", format_time(state.remaining_secs()), palette),
        right[1],
    );

    if show_key_hints {
        let action = if state.is_running() { " pause  " } else { " start  " };
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[Space]", palette.key()),
            Span::styled(action, palette.hint()),
            Span::styled("[r]", palette.key()),
            Span::styled(" reset  ", palette.hint()),
            Span::styled("[1-3/Tab]", palette.key()),
            Span::styled(" mode  ", palette.hint()),
            Span::styled("[t]", palette.key()),
            Span::styled(" theme  ", palette.hint()),
            Span::styled("[q]", palette.key()),
            Span::styled(" quit", palette.hint()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, rows[2]);
    }

    let tagline = Paragraph::new(Span::styled(
        "Stay focused with the Pomodoro technique 🚀",
        palette.hint(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, rows[3]);
}
