//! Styled text fragments over the fixed ANSI escape protocol.
//!
//! Every fragment produced here is self-terminating: it always ends with the
//! reset sequence so styling never bleeds into later plain text.

use crate::tui::settings;

/// Closed color palette understood by the escape protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl StyleColor {
    /// Every palette entry in declaration order.
    pub const ALL: [StyleColor; 8] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Gray,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }

    /// Color-select escape sequence.
    pub fn escape(self) -> &'static str {
        match self {
            Self::Red => settings::ESC_RED,
            Self::Green => settings::ESC_GREEN,
            Self::Yellow => settings::ESC_YELLOW,
            Self::Blue => settings::ESC_BLUE,
            Self::Magenta => settings::ESC_MAGENTA,
            Self::Cyan => settings::ESC_CYAN,
            Self::White => settings::ESC_WHITE,
            Self::Gray => settings::ESC_GRAY,
        }
    }

    /// Resolve a palette entry by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }
}

/// Wrap `text` in an optional bold prefix, an optional color prefix, and a reset.
pub fn format_text(text: &str, color: Option<StyleColor>, bold: bool) -> String {
    let bold = if bold { settings::ESC_BOLD } else { "" };
    let color = color.map(StyleColor::escape).unwrap_or("");
    format!("{bold}{color}{text}{}", settings::ESC_RESET)
}

/// Name-based variant of [`format_text`]; unknown names carry no color prefix.
pub fn format_text_named(text: &str, color: &str, bold: bool) -> String {
    format_text(text, StyleColor::from_name(color), bold)
}

/// Shorthand for the bold colored fragments used throughout command output.
pub fn emphasis(text: &str, color: StyleColor) -> String {
    format_text(text, Some(color), true)
}

/// Remove escape sequences, leaving only the visible text.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            out.push(ch);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // CSI: parameters until a final byte in '@'..='~'.
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
        }
    }
    out
}
