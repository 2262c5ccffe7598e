//! Built-in command handlers.

use super::content::about_lines;
use super::projects::FETCHING_NOTICE;
use super::{CommandContext, CommandEffect};
use crate::tui::settings;
use crate::tui::style::{emphasis, StyleColor};
use chrono::Datelike;

const HELP_HEADER: &str = " Available commands are as follows:";
const CONTACT_HEADER: &str = " Here are ways to get in touch with me:";

/// Contact rows: token plus the wording used in the contact listing.
const CONTACT_ROWS: [(&str, &str); 4] = [
    ("email", "to contact me via Email"),
    ("website", "to visit my Personal Website"),
    ("github", "to view my GitHub"),
    ("linkedin", "to view my LinkedIn"),
];

pub fn help(ctx: &CommandContext<'_>) -> CommandEffect {
    ctx.sink.writeln(&emphasis(HELP_HEADER, StyleColor::Green));
    for spec in ctx.registry.iter() {
        ctx.sink.writeln(&format!(
            " {}  Type {} {}",
            emphasis(spec.glyph, spec.color),
            emphasis(spec.name, spec.color),
            spec.description
        ));
    }
    CommandEffect::None
}

pub fn about(ctx: &CommandContext<'_>) -> CommandEffect {
    let year = chrono::Local::now().year();
    for line in about_lines(year) {
        ctx.sink.writeln(&line);
    }
    CommandEffect::None
}

/// Announce the fetch; the session runs it off the input path.
pub fn projects(ctx: &CommandContext<'_>) -> CommandEffect {
    ctx.sink.writeln(&emphasis(FETCHING_NOTICE, StyleColor::Gray));
    CommandEffect::FetchProjects
}

pub fn resume(ctx: &CommandContext<'_>) -> CommandEffect {
    let label = format!("{} resume", settings::GLYPH_RESUME);
    ctx.sink.writeln(&format!(
        " ... Redirecting to my {} ...",
        emphasis(&label, StyleColor::Cyan)
    ));
    ctx.links.open(ctx.destinations.resume_for(ctx.theme));
    CommandEffect::None
}

pub fn contact(ctx: &CommandContext<'_>) -> CommandEffect {
    ctx.sink.writeln(CONTACT_HEADER);
    for (token, wording) in CONTACT_ROWS {
        let Some(spec) = ctx.registry.lookup(token) else {
            continue;
        };
        ctx.sink.writeln(&format!(
            " {} Type {} {wording}",
            emphasis(spec.glyph, StyleColor::Cyan),
            emphasis(spec.name, StyleColor::Cyan),
        ));
    }
    CommandEffect::None
}

pub fn email(ctx: &CommandContext<'_>) -> CommandEffect {
    redirect(ctx, settings::GLYPH_EMAIL, "email", " client..", &ctx.destinations.email)
}

pub fn website(ctx: &CommandContext<'_>) -> CommandEffect {
    redirect(
        ctx,
        settings::GLYPH_WEBSITE,
        "personal website",
        "...",
        &ctx.destinations.website,
    )
}

pub fn github(ctx: &CommandContext<'_>) -> CommandEffect {
    redirect(ctx, settings::GLYPH_GITHUB, "GitHub", "...", &ctx.destinations.github)
}

pub fn linkedin(ctx: &CommandContext<'_>) -> CommandEffect {
    redirect(
        ctx,
        settings::GLYPH_LINKEDIN,
        "LinkedIn",
        "...",
        &ctx.destinations.linkedin,
    )
}

pub fn toggle(_ctx: &CommandContext<'_>) -> CommandEffect {
    CommandEffect::FlipTheme
}

pub fn clear(_ctx: &CommandContext<'_>) -> CommandEffect {
    CommandEffect::Reset
}

fn redirect(
    ctx: &CommandContext<'_>,
    glyph: &str,
    label: &str,
    tail: &str,
    url: &str,
) -> CommandEffect {
    ctx.sink.writeln(&format!(
        " ... Redirecting to {}{tail}",
        emphasis(&format!("{glyph} {label}"), StyleColor::Gray)
    ));
    ctx.links.open(url);
    CommandEffect::None
}
