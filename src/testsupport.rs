//! Shared test fixtures for session, command and config test modules.
//!
//! Fakes here stand in for the terminal surface, the link opener and the
//! repo-list endpoint so session behavior can be asserted from transcripts.

use crate::api::{RepoSource, RepoSummary};
use crate::error::{FetchError, SurfaceError};
use crate::links::LinkOpener;
use crate::session::EventSender;
use crate::tui::style::strip_ansi;
use crate::ui::render::{OutputSink, SurfaceFactory};
use crate::ui::theme::Theme;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("termfolio-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Default)]
struct SinkState {
    transcript: String,
    clears: usize,
    fits: usize,
    disposes: usize,
}

/// Output sink that records everything written to it.
///
/// `clear` is counted but keeps the transcript so tests can inspect the
/// whole history. Writes after `dispose` are discarded, like a real surface.
#[derive(Debug)]
pub struct RecordingSink {
    columns: u16,
    state: Mutex<SinkState>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::with_columns(120)
    }

    pub fn with_columns(columns: u16) -> Self {
        Self {
            columns,
            state: Mutex::new(SinkState::default()),
        }
    }

    /// Raw text written so far, escapes included.
    pub fn transcript(&self) -> String {
        self.state.lock().expect("sink lock").transcript.clone()
    }

    /// Completed lines with escapes stripped; a trailing partial line is
    /// left out.
    pub fn plain_lines(&self) -> Vec<String> {
        let plain = strip_ansi(&self.transcript());
        let mut lines: Vec<String> = plain.split('\n').map(str::to_string).collect();
        lines.pop();
        lines
    }

    pub fn clear_count(&self) -> usize {
        self.state.lock().expect("sink lock").clears
    }

    pub fn fit_count(&self) -> usize {
        self.state.lock().expect("sink lock").fits
    }

    pub fn dispose_count(&self) -> usize {
        self.state.lock().expect("sink lock").disposes
    }

    fn append(&self, text: &str) {
        let mut state = self.state.lock().expect("sink lock");
        if state.disposes == 0 {
            state.transcript.push_str(text);
        }
    }
}

impl OutputSink for RecordingSink {
    fn write(&self, text: &str) {
        self.append(text);
    }

    fn writeln(&self, text: &str) {
        self.append(text);
        self.append("\n");
    }

    fn clear(&self) {
        self.state.lock().expect("sink lock").clears += 1;
    }

    fn columns(&self) -> u16 {
        self.columns
    }

    fn fit(&self) {
        self.state.lock().expect("sink lock").fits += 1;
    }

    fn dispose(&self) {
        self.state.lock().expect("sink lock").disposes += 1;
    }
}

/// Link opener that remembers every URL it was asked to open.
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("opener lock").clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.lock().expect("opener lock").push(url.to_string());
    }
}

#[derive(Debug, Clone)]
enum StaticOutcome {
    Repos(Vec<RepoSummary>),
    Status(u16, String),
    Pending,
}

/// Repo source returning a fixed outcome.
#[derive(Debug, Clone)]
pub struct StaticRepoSource {
    outcome: StaticOutcome,
}

impl StaticRepoSource {
    pub fn ok(repos: Vec<RepoSummary>) -> Self {
        Self {
            outcome: StaticOutcome::Repos(repos),
        }
    }

    /// Fails every fetch with a non-2xx status.
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            outcome: StaticOutcome::Status(status, body.to_string()),
        }
    }

    /// Never completes.
    pub fn pending() -> Self {
        Self {
            outcome: StaticOutcome::Pending,
        }
    }
}

#[async_trait]
impl RepoSource for StaticRepoSource {
    async fn fetch_repos(&self) -> Result<Vec<RepoSummary>, FetchError> {
        match &self.outcome {
            StaticOutcome::Repos(repos) => Ok(repos.clone()),
            StaticOutcome::Status(status, body) => Err(FetchError::Status(*status, body.clone())),
            StaticOutcome::Pending => std::future::pending().await,
        }
    }
}

#[derive(Default)]
struct FactoryState {
    sinks: Vec<Arc<RecordingSink>>,
    builds: Vec<(Theme, u64)>,
}

/// Surface factory producing [`RecordingSink`]s and remembering each build.
#[derive(Clone)]
pub struct RecordingSurfaceFactory {
    columns: u16,
    state: Arc<Mutex<FactoryState>>,
}

impl RecordingSurfaceFactory {
    pub fn new(columns: u16) -> Self {
        Self {
            columns,
            state: Arc::new(Mutex::new(FactoryState::default())),
        }
    }

    /// Every sink built so far, oldest first.
    pub fn sinks(&self) -> Vec<Arc<RecordingSink>> {
        self.state.lock().expect("factory lock").sinks.clone()
    }

    /// `(theme, generation)` for every build, oldest first.
    pub fn builds(&self) -> Vec<(Theme, u64)> {
        self.state.lock().expect("factory lock").builds.clone()
    }
}

impl SurfaceFactory for RecordingSurfaceFactory {
    fn build(
        &self,
        theme: Theme,
        generation: u64,
        _events: EventSender,
    ) -> Result<Arc<dyn OutputSink>, SurfaceError> {
        let sink = Arc::new(RecordingSink::with_columns(self.columns));
        let mut state = self.state.lock().expect("factory lock");
        state.sinks.push(sink.clone());
        state.builds.push((theme, generation));
        Ok(sink as Arc<dyn OutputSink>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn recording_sink_drops_partial_line_and_writes_after_dispose() {
        let sink = RecordingSink::new();
        sink.writeln("\x1b[31mred\x1b[0m");
        sink.write(" > ");
        assert_eq!(sink.plain_lines(), vec!["red"]);
        sink.dispose();
        sink.writeln("late");
        assert_eq!(sink.transcript(), "\x1b[31mred\x1b[0m\n > ");
    }
}
