//! Output-surface contracts consumed by the session core.
//!
//! `OutputSink` is the only thing command handlers and the line editor write
//! to. Keeping it a trait lets the terminal surface and test recorders be
//! swapped without touching dispatch logic.

use crate::error::SurfaceError;
use crate::session::EventSender;
use crate::ui::theme::Theme;
use std::sync::Arc;

/// Injectable destination for styled text.
///
/// Writes are fire-and-forget; a disposed sink silently discards them.
pub trait OutputSink: Send + Sync {
    /// Write text without a trailing line break.
    fn write(&self, text: &str);
    /// Write text followed by a line break.
    fn writeln(&self, text: &str);
    /// Clear all visible content and reset the cursor to the top.
    fn clear(&self);
    /// Current visible width in columns.
    fn columns(&self) -> u16;
    /// Re-measure layout after a viewport change. Idempotent.
    fn fit(&self) {}
    /// Release the surface and its keystroke subscription.
    fn dispose(&self) {}
}

/// Builds one output surface per session generation.
///
/// The returned surface is already bound to `theme` and forwards keystrokes
/// into `events` tagged with `generation`.
pub trait SurfaceFactory: Send {
    fn build(
        &self,
        theme: Theme,
        generation: u64,
        events: EventSender,
    ) -> Result<Arc<dyn OutputSink>, SurfaceError>;
}
