//! Command dispatch for submitted lines.
//!
//! A submitted line is trimmed and looked up by exact token in the
//! [`CommandRegistry`]. Handlers write through the session's [`OutputSink`] and
//! report follow-up work to the session as a [`CommandEffect`]; they never touch
//! the line buffer or the surface lifecycle directly.

pub mod content;
pub mod handlers;
pub mod projects;
pub mod registry;

pub use registry::{CommandHandler, CommandRegistry, CommandSpec, BUILTIN_COMMANDS};

use crate::config::LinksConfig;
use crate::links::LinkOpener;
use crate::tui::style::{emphasis, StyleColor};
use crate::ui::render::OutputSink;
use crate::ui::theme::Theme;
use tracing::debug;

const NOT_FOUND_PREFIX: &str = " Command not found: ";

/// Everything a handler may read or call while it runs.
pub struct CommandContext<'a> {
    pub sink: &'a dyn OutputSink,
    pub theme: Theme,
    pub links: &'a dyn LinkOpener,
    pub destinations: &'a LinksConfig,
    pub registry: &'a CommandRegistry,
}

/// Follow-up the session performs after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Output is complete; redraw the prompt.
    None,
    /// Switch Light/Dark and rebuild the surface.
    FlipTheme,
    /// Rebuild the surface with the current theme.
    Reset,
    /// Start the repo-list fetch for this generation.
    FetchProjects,
}

/// Result of dispatching one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank line: nothing ran.
    Empty,
    /// Unregistered token; the not-found line was written.
    NotFound(String),
    Ran(CommandEffect),
}

impl Dispatch {
    /// Effect for the session; not-found and empty lines just redraw.
    pub fn effect(&self) -> CommandEffect {
        match self {
            Self::Ran(effect) => *effect,
            Self::Empty | Self::NotFound(_) => CommandEffect::None,
        }
    }
}

/// Resolve `line` against the registry and run the matching handler.
pub fn dispatch(line: &str, ctx: &CommandContext<'_>) -> Dispatch {
    let token = line.trim();
    if token.is_empty() {
        return Dispatch::Empty;
    }
    match ctx.registry.lookup(token) {
        Some(spec) => {
            debug!(command = spec.name, "dispatching command");
            Dispatch::Ran((spec.handler)(ctx))
        }
        None => {
            debug!(token, "command not found");
            ctx.sink.writeln(&format!(
                "{NOT_FOUND_PREFIX}{}",
                emphasis(token, StyleColor::Red)
            ));
            Dispatch::NotFound(token.to_string())
        }
    }
}
