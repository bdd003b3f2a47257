use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::Widget;

use crate::timer::display::{ring_fill_fraction, RING_RADIUS};
use crate::tui::theme::Palette;

/// Stroke width of the ring, in ring coordinates.
const STROKE: f64 = 14.0;
const STROKE_LAYERS: usize = 5;
const STEPS_PER_TURN: usize = 360;

/// Circular progress indicator. Fills clockwise from 12 o'clock.
pub struct RingWidget<'a> {
    offset: f64,
    palette: &'a Palette,
}

impl<'a> RingWidget<'a> {
    /// `offset` is the stroke-dash offset from `timer::display::ring_offset`.
    pub fn new(offset: f64, palette: &'a Palette) -> Self {
        Self { offset, palette }
    }
}

/// Points along an arc starting at the top of the ring and running clockwise
/// for `fraction` of a full turn, spread across the stroke width.
pub fn arc_points(fraction: f64) -> Vec<(f64, f64)> {
    let fraction = fraction.clamp(0.0, 1.0);
    let steps = (STEPS_PER_TURN as f64 * fraction).round() as usize;
    if steps == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity((steps + 1) * STROKE_LAYERS);
    for layer in 0..STROKE_LAYERS {
        let radius = RING_RADIUS - STROKE / 2.0 + STROKE * layer as f64 / (STROKE_LAYERS - 1) as f64;
        for step in 0..=steps {
            let angle = FRAC_PI_2 - TAU * fraction * step as f64 / steps as f64;
            points.push((radius * angle.cos(), radius * angle.sin()));
        }
    }
    points
}

/// Largest area inside `area` that looks square on a terminal, where a cell
/// is roughly twice as tall as it is wide.
pub fn fit_square(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Widget for RingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = fit_square(area);
        if area.is_empty() {
            return;
        }

        let track = arc_points(1.0);
        let fill = arc_points(ring_fill_fraction(self.offset));
        let bound = RING_RADIUS + STROKE;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.palette.background)
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: self.palette.ring_track,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &fill,
                    color: self.palette.ring_fill,
                });
            })
            .render(area, buf);
    }
}
