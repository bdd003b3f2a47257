use std::f64::consts::PI;

use super::TimerState;

/// Radius of the progress ring, in the ring's own coordinate space
/// (a 200x200 box centred on the origin).
pub const RING_RADIUS: f64 = 90.0;

/// Length of the full ring stroke.
pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Format seconds as `MM:SS`, both fields zero-padded.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Elapsed share of the current mode, 0.0 at a fresh countdown and 100.0 at zero.
pub fn progress_percent(state: &TimerState) -> f64 {
    let duration = state.mode().duration_secs() as f64;
    let elapsed = duration - state.remaining_secs() as f64;
    (elapsed / duration) * 100.0
}

/// Integer percentage shown on the progress card.
pub fn rounded_percent(percent: f64) -> u32 {
    percent.round().clamp(0.0, 100.0) as u32
}

/// Stroke-dash offset for the ring: the un-drawn length of the circumference.
pub fn ring_offset(percent: f64) -> f64 {
    ring_circumference() * (1.0 - percent / 100.0)
}

/// Fraction of the ring to draw, derived back from the dash offset.
pub fn ring_fill_fraction(offset: f64) -> f64 {
    let circumference = ring_circumference();
    ((circumference - offset) / circumference).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Mode;

    #[test]
    fn format_time_examples() {
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(900), "15:00");
    }

    #[test]
    fn format_time_past_an_hour() {
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn progress_at_start_and_end() {
        let mut state = TimerState::new();
        assert_eq!(progress_percent(&state), 0.0);

        state.toggle_run();
        while state.is_running() {
            state.tick();
        }
        assert_eq!(progress_percent(&state), 100.0);
    }

    #[test]
    fn progress_is_relative_to_active_mode() {
        let mut state = TimerState::new();
        state.switch_mode(Mode::ShortBreak);
        state.toggle_run();
        for _ in 0..150 {
            state.tick();
        }
        assert!((progress_percent(&state) - 50.0).abs() < 1e-9);
        assert_eq!(rounded_percent(progress_percent(&state)), 50);
    }

    #[test]
    fn rounded_percent_rounds_half_up() {
        assert_eq!(rounded_percent(0.4), 0);
        assert_eq!(rounded_percent(12.5), 13);
        assert_eq!(rounded_percent(99.6), 100);
    }

    #[test]
    fn ring_offset_bounds() {
        let circumference = ring_circumference();
        assert!((ring_offset(0.0) - circumference).abs() < 1e-9);
        assert!(ring_offset(100.0).abs() < 1e-9);
        assert!((ring_offset(25.0) - circumference * 0.75).abs() < 1e-9);
    }

    #[test]
    fn fill_fraction_inverts_offset() {
        assert!((ring_fill_fraction(ring_offset(40.0)) - 0.4).abs() < 1e-9);
        assert_eq!(ring_fill_fraction(ring_offset(0.0)), 0.0);
        assert_eq!(ring_fill_fraction(ring_offset(100.0)), 1.0);
    }
}
