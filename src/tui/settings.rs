//! Centralized, hardcoded UI settings for the terminal session.
//!
//! This is the single place to tweak prompt strings, glyphs, escape
//! sequences, and input control codes.

// ---------------------------------------------------------------------------
// Escape protocol
// ---------------------------------------------------------------------------

pub const ESC_RED: &str = "\x1b[31m";
pub const ESC_GREEN: &str = "\x1b[32m";
pub const ESC_YELLOW: &str = "\x1b[33m";
pub const ESC_BLUE: &str = "\x1b[34m";
pub const ESC_MAGENTA: &str = "\x1b[35m";
pub const ESC_CYAN: &str = "\x1b[36m";
pub const ESC_WHITE: &str = "\x1b[37m";
pub const ESC_GRAY: &str = "\x1b[90m";
pub const ESC_BOLD: &str = "\x1b[1m";
pub const ESC_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// Input control codes
// ---------------------------------------------------------------------------

pub const INPUT_SUBMIT: char = '\r';
pub const INPUT_ERASE: char = '\x7f';
/// Lowest code point treated as printable input.
pub const PRINTABLE_THRESHOLD: u32 = 32;

/// Visual erase of one cell: cursor back, blank, cursor back.
pub const ERASE_SEQUENCE: &str = "\x08 \x08";

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_SYMBOL: &str = " > ";
pub const PROMPT_HINT_PREFIX: &str = " Type ";
pub const PROMPT_HINT_SUFFIX: &str = " to see available commands.";
pub const WELCOME_LINE: &str = " Welcome to Sahaj's terminal portfolio!";
pub const BANNER_ART_HINT: &str =
    " *If ascii art is not displaying properly, please rotate horizontally or widen the window!";

pub const BANNER_ART: [&str; 6] = [
    "   ███████╗ █████╗ ██╗  ██╗ █████╗      ██╗    ███████╗██╗███╗   ██╗ ██████╗ ██╗  ██╗",
    "   ██╔════╝██╔══██╗██║  ██║██╔══██╗     ██║    ██╔════╝██║████╗  ██║██╔════╝ ██║  ██║",
    "   ███████╗███████║███████║███████║     ██║    ███████╗██║██╔██╗ ██║██║  ███╗███████║",
    "   ╚════██║██╔══██║██╔══██║██╔══██║██   ██║    ╚════██║██║██║╚██╗██║██║   ██║██╔══██║",
    "   ███████║██║  ██║██║  ██║██║  ██║╚█████╔╝    ███████║██║██║ ╚████║╚██████╔╝██║  ██║",
    "   ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝ ╚════╝     ╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝ ╚═╝  ╚═╝",
];

// ---------------------------------------------------------------------------
// Glyphs (FontAwesome private-use code points)
// ---------------------------------------------------------------------------

pub const GLYPH_HELP: &str = "\u{f059}";
pub const GLYPH_ABOUT: &str = "\u{f2b5}";
pub const GLYPH_PROJECTS: &str = "\u{f07b}";
pub const GLYPH_CONTACT: &str = "\u{f095}";
pub const GLYPH_RESUME: &str = "\u{f15b}";
pub const GLYPH_EMAIL: &str = "\u{f1fa}";
pub const GLYPH_WEBSITE: &str = "\u{f0ac}";
pub const GLYPH_GITHUB: &str = "\u{f09b}";
pub const GLYPH_LINKEDIN: &str = "\u{f08c}";
pub const GLYPH_CLEAR: &str = "\u{f0e2}";
pub const GLYPH_TOGGLE: &str = "\u{f186}";
pub const GLYPH_COPYRIGHT: &str = "\u{f1f9}";
pub const GLYPH_BULLET: &str = "->";

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

pub const SURFACE_EVENT_POLL_MS: u64 = 80;
pub const DEFAULT_SURFACE_COLUMNS: u16 = 120;
