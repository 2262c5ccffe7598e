//! Command registry: exact token → handler, in a stable declared order.

use super::handlers;
use super::CommandContext;
use super::CommandEffect;
use crate::tui::settings;
use crate::tui::style::StyleColor;
use std::fmt;

/// Handler invoked for one registered command.
pub type CommandHandler = fn(&CommandContext<'_>) -> CommandEffect;

/// Static command metadata plus its handler.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    /// Help text shown after `Type <name>`.
    pub description: &'static str,
    pub glyph: &'static str,
    pub color: StyleColor,
    pub handler: CommandHandler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Built-in commands in help-listing order.
pub const BUILTIN_COMMANDS: [CommandSpec; 11] = [
    CommandSpec {
        name: "help",
        description: "to list every available command.",
        glyph: settings::GLYPH_HELP,
        color: StyleColor::Green,
        handler: handlers::help,
    },
    CommandSpec {
        name: "about",
        description: "to learn more about me!",
        glyph: settings::GLYPH_ABOUT,
        color: StyleColor::Magenta,
        handler: handlers::about,
    },
    CommandSpec {
        name: "projects",
        description: "to view my projects.",
        glyph: settings::GLYPH_PROJECTS,
        color: StyleColor::Magenta,
        handler: handlers::projects,
    },
    CommandSpec {
        name: "resume",
        description: "to view my resume!",
        glyph: settings::GLYPH_RESUME,
        color: StyleColor::Cyan,
        handler: handlers::resume,
    },
    CommandSpec {
        name: "contact",
        description: "to view my contact information.",
        glyph: settings::GLYPH_CONTACT,
        color: StyleColor::Cyan,
        handler: handlers::contact,
    },
    CommandSpec {
        name: "email",
        description: "to reach me by Email.",
        glyph: settings::GLYPH_EMAIL,
        color: StyleColor::Cyan,
        handler: handlers::email,
    },
    CommandSpec {
        name: "website",
        description: "to visit my Personal Website.",
        glyph: settings::GLYPH_WEBSITE,
        color: StyleColor::Cyan,
        handler: handlers::website,
    },
    CommandSpec {
        name: "github",
        description: "to view my GitHub.",
        glyph: settings::GLYPH_GITHUB,
        color: StyleColor::Cyan,
        handler: handlers::github,
    },
    CommandSpec {
        name: "linkedin",
        description: "to view my LinkedIn.",
        glyph: settings::GLYPH_LINKEDIN,
        color: StyleColor::Cyan,
        handler: handlers::linkedin,
    },
    CommandSpec {
        name: "toggle",
        description: "to switch between light and dark mode.",
        glyph: settings::GLYPH_TOGGLE,
        color: StyleColor::Gray,
        handler: handlers::toggle,
    },
    CommandSpec {
        name: "clear",
        description: "to wipe the terminal.",
        glyph: settings::GLYPH_CLEAR,
        color: StyleColor::Red,
        handler: handlers::clear,
    },
];

/// Fixed mapping from case-sensitive command token to handler.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandRegistry {
    /// Registry holding [`BUILTIN_COMMANDS`].
    pub fn builtin() -> Self {
        Self::from_specs(BUILTIN_COMMANDS.to_vec())
    }

    /// Registry over an explicit command list; later duplicates are dropped.
    pub fn from_specs(specs: Vec<CommandSpec>) -> Self {
        let mut commands: Vec<CommandSpec> = Vec::with_capacity(specs.len());
        for spec in specs {
            if commands.iter().all(|existing| existing.name != spec.name) {
                commands.push(spec);
            }
        }
        Self { commands }
    }

    /// Exact-match lookup. No prefix matching, no case folding.
    pub fn lookup(&self, token: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| spec.name == token)
    }

    /// Commands in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|spec| spec.name).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
