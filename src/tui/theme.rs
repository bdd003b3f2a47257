use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub card: Color,
    pub ring_track: Color,
    pub ring_fill: Color,
    pub accent: Color,
    pub cycles: Color,
    pub mode: Color,
    pub progress: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 248, 243),
    text: Color::Rgb(31, 41, 55),
    muted: Color::Rgb(75, 85, 99),
    card: Color::Rgb(255, 255, 255),
    ring_track: Color::Rgb(229, 231, 235),
    ring_fill: Color::Rgb(168, 85, 247),
    accent: Color::Rgb(236, 72, 153),
    cycles: Color::Rgb(147, 51, 234),
    mode: Color::Rgb(37, 99, 235),
    progress: Color::Rgb(219, 39, 119),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(26, 26, 46),
    text: Color::Rgb(255, 255, 255),
    muted: Color::Rgb(209, 213, 219),
    card: Color::Rgb(45, 45, 68),
    ring_track: Color::Rgb(74, 74, 94),
    ring_fill: Color::Rgb(168, 85, 247),
    accent: Color::Rgb(236, 72, 153),
    cycles: Color::Rgb(192, 132, 252),
    mode: Color::Rgb(96, 165, 250),
    progress: Color::Rgb(244, 114, 182),
};

impl Palette {
    pub fn for_theme(dark: bool) -> &'static Palette {
        if dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn card_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.card)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_variant_by_flag() {
        assert_eq!(Palette::for_theme(false), &LIGHT);
        assert_eq!(Palette::for_theme(true), &DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }
}
