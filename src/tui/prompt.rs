//! Banner and prompt rendering for the session surface.

use crate::tui::settings;
use crate::tui::style::{emphasis, StyleColor};
use crate::ui::render::OutputSink;

/// Redraw the command hint and the input prompt (no trailing newline).
pub fn write_prompt(sink: &dyn OutputSink) {
    sink.writeln(&format!(
        "{}{}{}",
        settings::PROMPT_HINT_PREFIX,
        emphasis("help", StyleColor::Green),
        settings::PROMPT_HINT_SUFFIX
    ));
    sink.write(settings::PROMPT_SYMBOL);
}

/// Announce the session banner.
///
/// Surfaces narrower than `compact_columns` skip the ASCII-art block.
pub fn announce_banner(sink: &dyn OutputSink, compact_columns: u16) {
    if sink.columns() >= compact_columns {
        sink.writeln("");
        for row in settings::BANNER_ART {
            sink.writeln(row);
        }
        sink.writeln(&emphasis(settings::BANNER_ART_HINT, StyleColor::Gray));
    }
    sink.writeln("");
    sink.writeln("");
    sink.writeln("");
    sink.writeln(settings::WELCOME_LINE);
}
