//! Terminal building blocks.
//!
//! Pure pieces (style formatter, line editor, key translation, prompt text)
//! are kept apart from the crossterm-backed surface so session behavior can be
//! exercised against recording sinks.

pub mod keys;
pub mod line_editor;
pub mod prompt;
pub mod settings;
pub mod style;
pub mod surface;

pub use line_editor::{EditOutcome, LineBuffer, LineEditor};
pub use style::{emphasis, format_text, format_text_named, StyleColor};
pub use surface::{TerminalSurface, TerminalSurfaceFactory};
