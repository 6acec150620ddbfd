//! Theme configuration for the TUI and CLI output.
//!
//! Centralizes all color and style definitions. Provides ratatui styles for
//! the panel renderer and ANSI escape codes for plain CLI output.

use ratatui::style::{Color, Modifier, Style};

use crate::script::LineStyle;

/// Theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (command text, plain output)
    pub text_primary: Color,
    /// Secondary/dimmed text color (hints, chrome labels)
    pub text_secondary: Color,
    /// Accent color (prompt, dock chip, banner wordmark)
    pub accent: Color,
    /// Color for info-tagged output lines
    pub info: Color,
    /// Color for success-tagged output lines
    pub success: Color,
    /// Error color (CLI output only)
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Theme {
    /// Default theme - light gray text with a green accent, standard ANSI
    /// colors for consistent rendering.
    pub fn terminal() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            info: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Classic theme - white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            info: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            info: Color::LightBlue,
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Look up a theme by name (for `--theme` and the config file).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "terminal" | "default" => Some(Self::terminal()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, wordmark).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an output line by its script style tag.
    pub fn output_style(&self, style: LineStyle) -> Style {
        match style {
            LineStyle::None => Style::default().fg(self.text_primary),
            LineStyle::Info => Style::default().fg(self.info),
            LineStyle::Success => Style::default().fg(self.success),
        }
    }

    // ANSI helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}
