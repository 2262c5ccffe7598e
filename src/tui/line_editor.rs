//! Append/erase-only line editing over a raw keystroke stream.
//!
//! Each call to [`LineEditor::feed`] consumes exactly one input event and
//! produces at most one echo on the output sink. Nothing is queued.

use crate::tui::settings;
use crate::ui::render::OutputSink;

/// In-progress, not-yet-submitted command text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text at the end of the buffer.
    pub fn push_str(&mut self, data: &str) {
        self.text.push_str(data);
    }

    /// Remove the last char; returns `false` on an empty buffer.
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Take the current content, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Recognized classes of one raw input event, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    Submit,
    Erase,
    Printable,
    Control,
}

/// Classify one input event by its leading code point.
pub fn classify(data: &str) -> InputClass {
    match data.chars().next() {
        Some(settings::INPUT_SUBMIT) => InputClass::Submit,
        Some(settings::INPUT_ERASE) => InputClass::Erase,
        Some(ch) if u32::from(ch) >= settings::PRINTABLE_THRESHOLD => InputClass::Printable,
        _ => InputClass::Control,
    }
}

/// What happened to one fed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A completed line, already trimmed. The buffer is now empty.
    Submitted(String),
    Appended,
    Erased,
    /// Erase on an empty buffer or an unrecognized control code.
    Ignored,
}

/// Line editor owning the session's [`LineBuffer`].
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: LineBuffer,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Consume one input event, echoing locally where the event is accepted.
    pub fn feed(&mut self, data: &str, sink: &dyn OutputSink) -> EditOutcome {
        match classify(data) {
            InputClass::Submit => {
                let line = self.buffer.take();
                EditOutcome::Submitted(line.trim().to_string())
            }
            InputClass::Erase => {
                if self.buffer.pop() {
                    sink.write(settings::ERASE_SEQUENCE);
                    EditOutcome::Erased
                } else {
                    EditOutcome::Ignored
                }
            }
            InputClass::Printable => {
                self.buffer.push_str(data);
                sink.write(data);
                EditOutcome::Appended
            }
            InputClass::Control => EditOutcome::Ignored,
        }
    }
}
