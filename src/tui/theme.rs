//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::scoring::Quadrant;

/// Theme selection, from config ("dark" | "light" | "auto").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    Light,
    #[default]
    Auto,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub title_color: Color,
    pub muted: Color,
    pub gauge_filled: Color,
    pub gauge_empty: Color,
    pub yes_color: Color,
    pub no_color: Color,
    pub grid_dim: Color,
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_color: Color,
    pub popup_border: Color,
    pub input_active: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            title_color: Color::Cyan,
            muted: Color::Gray,
            gauge_filled: Color::Cyan,
            gauge_empty: Color::DarkGray,
            yes_color: Color::Green,
            no_color: Color::Red,
            grid_dim: Color::DarkGray,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_color: Color::Green,
            popup_border: Color::Cyan,
            input_active: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Self {
            title_color: Color::Blue,
            muted: Color::DarkGray,
            gauge_filled: Color::Blue,
            gauge_empty: Color::Gray,
            yes_color: Color::Green,
            no_color: Color::Red,
            grid_dim: Color::Gray,
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_color: Color::Green,
            popup_border: Color::Blue,
            input_active: Color::Magenta,
        }
    }
}

/// Resolve the configured theme, probing the terminal background for Auto.
pub fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
        Theme::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}

/// The terminal color for a quadrant's hex token.
pub fn quadrant_color(quadrant: Quadrant) -> Color {
    match quadrant {
        Quadrant::LowPriority => Color::Rgb(255, 65, 54),
        Quadrant::PotentialNeedsWork => Color::Rgb(255, 133, 27),
        Quadrant::GoodFitLimitedFunds => Color::Rgb(46, 204, 64),
        Quadrant::StrongMatch => Color::Rgb(0, 116, 217),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("auto"), Some(Theme::Auto));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn test_quadrant_colors_match_hex_tokens() {
        assert_eq!(
            quadrant_color(Quadrant::LowPriority),
            Color::Rgb(255, 65, 54)
        );
        assert_eq!(
            quadrant_color(Quadrant::StrongMatch),
            Color::Rgb(0, 116, 217)
        );
    }
}
