//! Warm earth-tone palette and preset styles.
//!
//! Colors chosen for:
//! - Calm, friendly wellbeing appearance
//! - High contrast for accessibility

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Verdict;

/// Wellbeing theme color palette.
pub struct WellbeingTheme;

impl WellbeingTheme {
    // === Primary Colors ===

    /// Burnt orange - Primary color (energy, warmth)
    pub const PRIMARY: Color = Color::Rgb(211, 107, 0); // #D36B00

    /// Terracotta for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(226, 114, 91); // #E2725B

    /// Dark umber for accents
    pub const PRIMARY_DARK: Color = Color::Rgb(99, 83, 62); // #63533E

    // === Secondary Colors ===

    /// Olive - Secondary
    pub const SECONDARY: Color = Color::Rgb(128, 117, 90); // #80755A

    /// Sand for borders
    pub const SECONDARY_LIGHT: Color = Color::Rgb(196, 178, 146); // #C4B292

    // === Semantic Colors ===

    /// Sage - Success
    pub const SUCCESS: Color = Color::Rgb(110, 168, 92); // #6EA85C

    /// Mustard - Warning
    pub const WARNING: Color = Color::Rgb(230, 180, 60); // #E6B43C

    /// Brick - Error
    pub const DANGER: Color = Color::Rgb(200, 70, 60); // #C8463C

    /// Dusty blue - Info
    pub const INFO: Color = Color::Rgb(110, 150, 180); // #6E96B4

    // === Background Colors ===

    /// Dark coffee background
    pub const BG_DARK: Color = Color::Rgb(38, 31, 24); // #261F18

    /// Slightly lighter background
    pub const BG_SURFACE: Color = Color::Rgb(58, 48, 38); // #3A3026

    // === Text Colors ===

    /// Cream text
    pub const TEXT_PRIMARY: Color = Color::Rgb(250, 243, 224); // #FAF3E0

    /// Warm gray text
    pub const TEXT_SECONDARY: Color = Color::Rgb(196, 186, 168); // #C4BAA8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(140, 128, 110); // #8C806E

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Style for selected items
    #[must_use]
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for the active page tab
    #[must_use]
    pub fn header() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::PRIMARY_DARK)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Text cursor in input fields
    #[must_use]
    pub fn primary_cursor() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    /// Bars in charts
    #[must_use]
    pub fn bar() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Get verdict style from the band color
    #[must_use]
    pub fn verdict(verdict: Verdict) -> Style {
        let (r, g, b) = verdict.color();
        Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for a correlation coefficient by strength
    #[must_use]
    pub fn correlation(r: f64) -> Style {
        if r.abs() >= 0.5 {
            Self::success()
        } else if r.abs() >= 0.2 {
            Self::warning()
        } else {
            Self::text_muted()
        }
    }
}

/// ASCII art logo
pub const LOGO: &str = r"
╦ ╦┌─┐┬  ┬  ┌┐ ┌─┐┬┌┐┌┌─┐
║║║├┤ │  │  ├┴┐├┤ │││││ ┬
╚╩╝└─┘┴─┘┴─┘└─┘└─┘┴┘└┘└─┘
";
