//! Crossterm-backed output surface and keystroke reader.
//!
//! One [`TerminalSurface`] exists per session generation. It paints the theme
//! palette, writes styled text to stdout, and runs a reader thread that turns
//! terminal events into [`SessionEvent`]s tagged with its generation. Disposing
//! the surface stops the reader before the next surface starts its own.

use crate::error::SurfaceError;
use crate::session::{EventSender, SessionEvent};
use crate::tui::keys::{event_data, is_exit_key};
use crate::tui::settings;
use crate::ui::render::{OutputSink, SurfaceFactory};
use crate::ui::theme::{Theme, ThemePalette};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{Command, QueueableCommand};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Builds [`TerminalSurface`]s on the process's stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSurfaceFactory;

impl SurfaceFactory for TerminalSurfaceFactory {
    fn build(
        &self,
        theme: Theme,
        generation: u64,
        events: EventSender,
    ) -> Result<Arc<dyn OutputSink>, SurfaceError> {
        let surface = TerminalSurface::open(theme, generation, events)?;
        Ok(Arc::new(surface) as Arc<dyn OutputSink>)
    }
}

pub struct TerminalSurface {
    generation: u64,
    /// Escape prefix re-applied after every style reset.
    palette_sequence: String,
    columns: AtomicU16,
    disposed: Arc<AtomicBool>,
    reader: Mutex<Option<thread::JoinHandle<()>>>,
}

impl TerminalSurface {
    /// Paint the palette, clear the screen and start the keystroke reader.
    pub fn open(theme: Theme, generation: u64, events: EventSender) -> Result<Self, SurfaceError> {
        let palette_sequence = palette_sequence(theme.palette());
        paint(&mut io::stdout(), &palette_sequence)?;

        let disposed = Arc::new(AtomicBool::new(false));
        let reader = spawn_reader(generation, events, disposed.clone());
        debug!(generation, theme = theme.name(), "terminal surface opened");

        Ok(Self {
            generation,
            palette_sequence,
            columns: AtomicU16::new(measure_columns()),
            disposed,
            reader: Mutex::new(Some(reader)),
        })
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn emit(&self, text: &str) {
        if self.is_disposed() {
            return;
        }
        let rendered = to_raw_newlines(&reapply_palette(text, &self.palette_sequence));
        let mut stdout = io::stdout();
        let result = stdout
            .queue(Print(rendered))
            .and_then(|out| out.flush());
        if let Err(err) = result {
            debug!(generation = self.generation, error = %err, "surface write failed");
        }
    }
}

impl OutputSink for TerminalSurface {
    fn write(&self, text: &str) {
        self.emit(text);
    }

    fn writeln(&self, text: &str) {
        self.emit(text);
        self.emit("\n");
    }

    fn clear(&self) {
        if self.is_disposed() {
            return;
        }
        if let Err(err) = paint(&mut io::stdout(), &self.palette_sequence) {
            debug!(generation = self.generation, error = %err, "surface clear failed");
        }
    }

    fn columns(&self) -> u16 {
        self.columns.load(Ordering::Relaxed)
    }

    fn fit(&self) {
        self.columns.store(measure_columns(), Ordering::Relaxed);
    }

    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        let reader = self.reader.lock().ok().and_then(|mut slot| slot.take());
        if let Some(reader) = reader {
            if reader.join().is_err() {
                warn!(generation = self.generation, "keystroke reader panicked");
            }
        }
        let mut stdout = io::stdout();
        let _ = stdout.queue(ResetColor).and_then(|out| out.flush());
        debug!(generation = self.generation, "terminal surface disposed");
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Poll terminal events until the surface is disposed.
fn spawn_reader(
    generation: u64,
    events: EventSender,
    disposed: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let poll = Duration::from_millis(settings::SURFACE_EVENT_POLL_MS);
        while !disposed.load(Ordering::Acquire) {
            match event::poll(poll) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    warn!(generation, error = %err, "terminal event poll failed");
                    break;
                }
            }
            // Leave queued input for the next generation's reader.
            if disposed.load(Ordering::Acquire) {
                break;
            }
            let evt = match event::read() {
                Ok(evt) => evt,
                Err(err) => {
                    warn!(generation, error = %err, "terminal event read failed");
                    break;
                }
            };
            let Some(message) = session_event(generation, &evt) else {
                continue;
            };
            if events.send(message).is_err() {
                break;
            }
        }
    })
}

/// Map one terminal event to the session event it produces.
fn session_event(generation: u64, evt: &Event) -> Option<SessionEvent> {
    match evt {
        Event::Key(key) if is_exit_key(key) => Some(SessionEvent::Shutdown),
        Event::Resize(_, _) => Some(SessionEvent::Resize { generation }),
        other => event_data(other).map(|data| SessionEvent::Input { generation, data }),
    }
}

/// Apply the palette to the whole screen and home the cursor.
fn paint(out: &mut impl Write, palette_sequence: &str) -> io::Result<()> {
    out.queue(Print(palette_sequence))?;
    out.queue(Clear(ClearType::All))?;
    out.queue(Clear(ClearType::Purge))?;
    out.queue(MoveTo(0, 0))?;
    out.flush()
}

fn measure_columns() -> u16 {
    terminal::size()
        .map(|(columns, _)| columns)
        .unwrap_or(settings::DEFAULT_SURFACE_COLUMNS)
}

/// Background/foreground escape prefix for a palette.
fn palette_sequence(palette: ThemePalette) -> String {
    let mut sequence = String::new();
    let _ = SetBackgroundColor(palette.background).write_ansi(&mut sequence);
    let _ = SetForegroundColor(palette.foreground).write_ansi(&mut sequence);
    sequence
}

/// Style resets also drop the theme colors; restore them after each one.
fn reapply_palette(text: &str, palette_sequence: &str) -> String {
    if !text.contains(settings::ESC_RESET) {
        return text.to_string();
    }
    text.replace(
        settings::ESC_RESET,
        &format!("{}{palette_sequence}", settings::ESC_RESET),
    )
}

/// Raw mode needs an explicit carriage return before each line feed.
fn to_raw_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}
