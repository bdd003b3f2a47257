pub mod display;
pub mod ticker;

use tracing::{debug, info};

/// The three countdown presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

/// Static per-mode settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeConfig {
    pub duration_secs: u32,
    pub label: &'static str,
}

const WORK: ModeConfig = ModeConfig {
    duration_secs: 25 * 60,
    label: "Focus time",
};

const SHORT_BREAK: ModeConfig = ModeConfig {
    duration_secs: 5 * 60,
    label: "Short break",
};

const LONG_BREAK: ModeConfig = ModeConfig {
    duration_secs: 15 * 60,
    label: "Long break",
};

impl Mode {
    /// Registry order, used for the mode selector.
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    pub fn config(self) -> &'static ModeConfig {
        match self {
            Mode::Work => &WORK,
            Mode::ShortBreak => &SHORT_BREAK,
            Mode::LongBreak => &LONG_BREAK,
        }
    }

    pub fn duration_secs(self) -> u32 {
        self.config().duration_secs
    }

    pub fn label(self) -> &'static str {
        self.config().label
    }

    /// Next mode in registry order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Mode::Work => Mode::ShortBreak,
            Mode::ShortBreak => Mode::LongBreak,
            Mode::LongBreak => Mode::Work,
        }
    }
}

/// What a single `tick()` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running or nothing left to count; state untouched.
    Idle,
    /// One second was taken off the countdown.
    Counted,
    /// The countdown hit zero on this tick and the timer stopped.
    Completed(Mode),
}

/// All mutable state of the Pomodoro screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerState {
    mode: Mode,
    remaining_secs: u32,
    is_running: bool,
    completed_cycles: u32,
    dark_theme: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Work,
            remaining_secs: Mode::Work.duration_secs(),
            is_running: false,
            completed_cycles: 0,
            dark_theme: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    /// Start or pause. Leaves the countdown and mode alone.
    ///
    /// A finished countdown stays stopped until `reset` or `switch_mode`.
    pub fn toggle_run(&mut self) {
        if self.remaining_secs == 0 {
            self.is_running = false;
            debug!("toggle run ignored, countdown finished");
            return;
        }
        self.is_running = !self.is_running;
        debug!(running = self.is_running, remaining = self.remaining_secs, "toggle run");
    }

    /// Stop and rewind the current mode to its full duration.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_secs = self.mode.duration_secs();
        debug!(mode = ?self.mode, "reset");
    }

    /// Select a mode. Always rewinds, even when `mode` is already active.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.remaining_secs = mode.duration_secs();
        self.is_running = false;
        info!(mode = ?mode, "switched mode");
    }

    /// Advance the countdown by one second.
    ///
    /// Completion bookkeeping lives inside the 1 -> 0 decrement, so it runs
    /// exactly once per countdown no matter how often this is called
    /// afterwards.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running || self.remaining_secs == 0 {
            return TickOutcome::Idle;
        }

        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return TickOutcome::Counted;
        }

        self.is_running = false;
        if self.mode == Mode::Work {
            self.completed_cycles += 1;
        }
        info!(mode = ?self.mode, cycles = self.completed_cycles, "countdown finished");
        TickOutcome::Completed(self.mode)
    }

    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
        debug!(dark = self.dark_theme, "toggle theme");
    }
}
