//! Ink-and-amber theme tokens for the page.
//!
//! Dark paper background, amber accent for headings and focus, green for
//! "after" metric bars, violet for baselines. The blend helper fades any
//! foreground toward the background, which is how the cross-fade and the
//! overlay reveal express opacity in a terminal.

use ratatui::style::{Color, Modifier, Style};

/// Page background.
pub const BG: Color = Color::Rgb(16, 16, 20);

const INK: Color = Color::Rgb(224, 222, 214);
const AMBER: Color = Color::Rgb(255, 176, 46);
const GREEN: Color = Color::Rgb(84, 214, 132);
const VIOLET: Color = Color::Rgb(155, 128, 216);
const STEEL: Color = Color::Rgb(122, 132, 150);
const ORANGE: Color = Color::Rgb(255, 140, 0);

/// Primary body text.
pub fn text() -> Style {
    Style::default().fg(INK)
}

/// Secondary text, hints, separators.
pub fn muted() -> Style {
    Style::default().fg(STEEL)
}

/// Accent for focus and highlights.
pub fn accent() -> Style {
    Style::default().fg(AMBER)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Section headings.
pub fn heading() -> Style {
    accent_bold()
}

pub fn warning() -> Style {
    Style::default().fg(ORANGE)
}

/// "After" metric bar.
pub fn after_bar() -> Style {
    Style::default().fg(GREEN)
}

/// "Baseline" metric bar.
pub fn baseline_bar() -> Style {
    Style::default().fg(VIOLET)
}

pub fn overlay_border() -> Style {
    accent()
}

/// Blend a foreground color toward the background. `alpha` 1.0 keeps the
/// color, 0.0 dissolves it into the background entirely.
pub fn blend(color: Color, alpha: f64) -> Color {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (224, 222, 214),
    };
    let (br, bg_, bb) = (16u8, 16u8, 20u8);
    let a = alpha.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| -> u8 {
        (f64::from(bg) + (f64::from(fg) - f64::from(bg)) * a).round() as u8
    };
    Color::Rgb(mix(r, br), mix(g, bg_), mix(b, bb))
}

/// Apply an opacity to a style's foreground.
pub fn faded(style: Style, alpha: f64) -> Style {
    match style.fg {
        Some(color) => style.fg(blend(color, alpha)),
        None => style.fg(blend(INK, alpha)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_full_alpha_keeps_color() {
        assert_eq!(blend(AMBER, 1.0), AMBER);
    }

    #[test]
    fn blend_zero_alpha_is_background() {
        assert_eq!(blend(AMBER, 0.0), BG);
        assert_eq!(blend(INK, 0.0), BG);
    }

    #[test]
    fn blend_clamps_alpha() {
        assert_eq!(blend(AMBER, 2.0), AMBER);
        assert_eq!(blend(AMBER, -1.0), BG);
    }

    #[test]
    fn faded_tracks_foreground() {
        let half = faded(text(), 0.5);
        assert_ne!(half.fg, text().fg);
        assert_eq!(faded(text(), 1.0).fg, text().fg);
    }
}
