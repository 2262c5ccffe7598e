//! Theme session manager.
//!
//! Owns the active theme, the generation counter, and the one live session
//! (surface + line editor). Every theme change or reset tears the live session
//! down and builds a fresh one; nothing from an older generation is reused.
//!
//! All inputs arrive as [`SessionEvent`]s on a single channel and are handled
//! strictly one at a time. Events produced by a surface or fetch carry the
//! generation that produced them, and anything tagged with an older generation
//! is dropped on arrival.

mod tasks;

use crate::api::{RepoSource, RepoSummary};
use crate::commands::projects::{render_fetch_failure, render_projects};
use crate::commands::{dispatch, CommandContext, CommandEffect, CommandRegistry, Dispatch};
use crate::config::Config;
use crate::error::{FetchError, SurfaceError};
use crate::links::LinkOpener;
use crate::tui::line_editor::{EditOutcome, LineEditor};
use crate::tui::prompt::{announce_banner, write_prompt};
use crate::ui::render::{OutputSink, SurfaceFactory};
use crate::ui::theme::{PreferenceSubscription, Theme, ThemePreference};
use std::sync::Arc;
use tasks::{spawn_fetch_task, PendingFetch};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Sender half of the session event channel.
pub type EventSender = mpsc::UnboundedSender<SessionEvent>;
/// Receiver half of the session event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<SessionEvent>;

/// Create the channel every session input flows through.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// One input to the session manager.
#[derive(Debug)]
pub enum SessionEvent {
    /// Raw keystroke data from the surface built for `generation`.
    Input { generation: u64, data: String },
    /// Viewport changed under the surface built for `generation`.
    Resize { generation: u64 },
    /// Platform color-scheme preference changed.
    PreferenceChanged(Theme),
    /// A repo-list fetch started by `generation` completed.
    ProjectsFetched {
        generation: u64,
        result: Result<Vec<RepoSummary>, FetchError>,
    },
    /// Host asked the session to end.
    Shutdown,
}

/// Collaborators the manager builds sessions from.
pub struct SessionParts {
    pub config: Config,
    pub registry: CommandRegistry,
    pub factory: Box<dyn SurfaceFactory>,
    pub links: Arc<dyn LinkOpener>,
    pub repos: Arc<dyn RepoSource>,
}

/// The live surface plus its line editor for one generation.
struct Session {
    generation: u64,
    surface: Arc<dyn OutputSink>,
    editor: LineEditor,
}

pub struct SessionManager {
    theme: Theme,
    generation: u64,
    session: Option<Session>,
    parts: SessionParts,
    events: EventSender,
    preference: PreferenceSubscription,
    pending: Vec<PendingFetch>,
}

impl SessionManager {
    /// Read the platform preference once, subscribe to its changes and build
    /// the first session.
    ///
    /// A theme pinned in `[display]` wins over the platform preference for the
    /// initial state only; later preference changes still apply.
    pub fn start(
        parts: SessionParts,
        platform: &dyn ThemePreference,
        events: EventSender,
    ) -> Result<Self, SurfaceError> {
        let theme = parts
            .config
            .display
            .theme
            .forced()
            .unwrap_or_else(|| Theme::from_prefers_dark(platform.prefers_dark()));

        let notify = events.clone();
        let preference = platform.on_change(Arc::new(move |theme| {
            let _ = notify.send(SessionEvent::PreferenceChanged(theme));
        }));

        let mut manager = Self {
            theme,
            generation: 0,
            session: None,
            parts,
            events,
            preference,
            pending: Vec::new(),
        };
        manager.rebuild()?;
        Ok(manager)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Generation of the live session; starts at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Surface of the live session.
    pub fn surface(&self) -> Option<Arc<dyn OutputSink>> {
        self.session.as_ref().map(|session| session.surface.clone())
    }

    /// Text typed since the last submit.
    pub fn pending_line(&self) -> &str {
        self.session
            .as_ref()
            .map(|session| session.editor.buffer().as_str())
            .unwrap_or("")
    }

    /// Fetches started by the live generation that have not completed.
    pub fn pending_fetches(&self) -> usize {
        self.pending
            .iter()
            .filter(|fetch| !fetch.is_finished())
            .count()
    }

    /// Handle one event. Returns `Ok(false)` once the session should stop.
    pub fn handle(&mut self, event: SessionEvent) -> Result<bool, SurfaceError> {
        match event {
            SessionEvent::Input { generation, data } => {
                if self.is_stale(generation, "input") {
                    return Ok(true);
                }
                self.handle_input(&data)?;
            }
            SessionEvent::Resize { generation } => {
                if self.is_stale(generation, "resize") {
                    return Ok(true);
                }
                if let Some(session) = &self.session {
                    session.surface.fit();
                }
            }
            SessionEvent::PreferenceChanged(theme) => {
                info!(theme = theme.name(), "platform preference changed");
                self.theme = theme;
                self.rebuild()?;
            }
            SessionEvent::ProjectsFetched { generation, result } => {
                if self.is_stale(generation, "projects fetch") {
                    return Ok(true);
                }
                self.pending.retain(|fetch| !fetch.is_finished());
                self.finish_fetch(result);
            }
            SessionEvent::Shutdown => {
                info!(generation = self.generation, "session shutdown requested");
                self.shutdown();
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Switch Light/Dark and rebuild.
    pub fn flip_theme(&mut self) -> Result<(), SurfaceError> {
        self.theme = self.theme.flipped();
        self.rebuild()
    }

    /// Tear down the live session and build the next generation.
    ///
    /// The old surface and its keystroke reader are released before the new
    /// surface exists, and outstanding fetches are cancelled.
    pub fn rebuild(&mut self) -> Result<(), SurfaceError> {
        self.abort_pending();
        if let Some(old) = self.session.take() {
            debug!(generation = old.generation, "disposing session");
            old.surface.dispose();
        }

        self.generation += 1;
        let surface = self
            .parts
            .factory
            .build(self.theme, self.generation, self.events.clone())?;
        info!(
            generation = self.generation,
            theme = self.theme.name(),
            "session built"
        );

        announce_banner(surface.as_ref(), self.parts.config.display.compact_columns);
        write_prompt(surface.as_ref());
        self.session = Some(Session {
            generation: self.generation,
            surface,
            editor: LineEditor::new(),
        });
        Ok(())
    }

    /// Release the surface, pending fetches and the preference listener.
    /// Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.abort_pending();
        if let Some(old) = self.session.take() {
            debug!(generation = old.generation, "disposing session");
            old.surface.dispose();
        }
        std::mem::replace(&mut self.preference, PreferenceSubscription::inert()).unsubscribe();
    }

    fn is_stale(&self, generation: u64, what: &str) -> bool {
        let stale = generation != self.generation;
        if stale {
            debug!(
                event = what,
                generation,
                current = self.generation,
                "dropping stale event"
            );
        }
        stale
    }

    fn handle_input(&mut self, data: &str) -> Result<(), SurfaceError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let outcome = session.editor.feed(data, session.surface.as_ref());
        let EditOutcome::Submitted(line) = outcome else {
            return Ok(());
        };
        let surface = session.surface.clone();

        if line.is_empty() {
            surface.writeln("");
            write_prompt(surface.as_ref());
            return Ok(());
        }

        surface.writeln("");
        surface.writeln("");
        let ctx = CommandContext {
            sink: surface.as_ref(),
            theme: self.theme,
            links: self.parts.links.as_ref(),
            destinations: &self.parts.config.links,
            registry: &self.parts.registry,
        };
        let outcome = dispatch(&line, &ctx);
        if let Dispatch::NotFound(token) = &outcome {
            info!(token = token.as_str(), "unknown command");
        }

        match outcome.effect() {
            CommandEffect::None => {
                surface.writeln("");
                write_prompt(surface.as_ref());
            }
            CommandEffect::FetchProjects => {
                self.start_fetch();
                surface.writeln("");
                write_prompt(surface.as_ref());
            }
            CommandEffect::FlipTheme => self.flip_theme()?,
            CommandEffect::Reset => self.rebuild()?,
        }
        Ok(())
    }

    fn start_fetch(&mut self) {
        self.pending.retain(|fetch| !fetch.is_finished());
        debug!(generation = self.generation, "starting projects fetch");
        let fetch = spawn_fetch_task(
            self.parts.repos.clone(),
            self.generation,
            self.events.clone(),
        );
        self.pending.push(fetch);
    }

    fn finish_fetch(&mut self, result: Result<Vec<RepoSummary>, FetchError>) {
        let Some(session) = &self.session else {
            return;
        };
        let surface = session.surface.as_ref();
        match result {
            Ok(repos) => {
                info!(
                    generation = self.generation,
                    count = repos.len(),
                    "projects fetched"
                );
                render_projects(surface, self.parts.config.display.compact_columns, repos);
            }
            Err(err) => {
                warn!(generation = self.generation, error = %err, "failed to fetch projects");
                render_fetch_failure(surface, &err);
            }
        }
        // Text typed while the fetch was in flight is still buffered.
        surface.write(session.editor.buffer().as_str());
    }

    fn abort_pending(&mut self) {
        for fetch in self.pending.drain(..) {
            fetch.abort();
        }
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Drive `manager` until a shutdown event or a surface failure.
pub async fn run_session(
    mut manager: SessionManager,
    mut events: EventReceiver,
) -> Result<(), SurfaceError> {
    while let Some(event) = events.recv().await {
        if !manager.handle(event)? {
            break;
        }
    }
    manager.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_repo_list;
    use crate::config::ThemeSetting;
    use crate::testsupport::{
        RecordingOpener, RecordingSurfaceFactory, StaticRepoSource,
    };
    use crate::tui::settings;
    use crate::ui::theme::PreferenceSignal;

    struct Harness {
        manager: SessionManager,
        factory: RecordingSurfaceFactory,
        signal: PreferenceSignal,
        events: EventReceiver,
    }

    fn harness_with(config: Config, prefers_dark: bool, repos: StaticRepoSource) -> Harness {
        let factory = RecordingSurfaceFactory::new(120);
        let signal = PreferenceSignal::new(prefers_dark);
        let (tx, rx) = event_channel();
        let manager = SessionManager::start(
            SessionParts {
                config,
                registry: CommandRegistry::builtin(),
                factory: Box::new(factory.clone()),
                links: Arc::new(RecordingOpener::default()),
                repos: Arc::new(repos),
            },
            &signal,
            tx,
        )
        .expect("first build");
        Harness {
            manager,
            factory,
            signal,
            events: rx,
        }
    }

    fn harness(prefers_dark: bool) -> Harness {
        harness_with(Config::default(), prefers_dark, StaticRepoSource::ok(Vec::new()))
    }

    fn type_line(h: &mut Harness, line: &str) {
        let generation = h.manager.generation();
        for ch in line.chars() {
            h.manager
                .handle(SessionEvent::Input {
                    generation,
                    data: ch.to_string(),
                })
                .expect("input");
        }
        h.manager
            .handle(SessionEvent::Input {
                generation,
                data: settings::INPUT_SUBMIT.to_string(),
            })
            .expect("submit");
    }

    fn banner_count(sink: &crate::testsupport::RecordingSink) -> usize {
        sink.plain_lines()
            .iter()
            .filter(|line| line.as_str() == settings::WELCOME_LINE)
            .count()
    }

    #[test]
    fn initial_theme_follows_platform_preference() {
        assert_eq!(harness(true).manager.theme(), Theme::Dark);
        assert_eq!(harness(false).manager.theme(), Theme::Light);
    }

    #[test]
    fn configured_theme_wins_at_startup() {
        let mut config = Config::default();
        config.display.theme = ThemeSetting::Light;
        let h = harness_with(config, true, StaticRepoSource::ok(Vec::new()));
        assert_eq!(h.manager.theme(), Theme::Light);
    }

    #[test]
    fn first_session_announces_banner_and_prompt() {
        let h = harness(true);
        assert_eq!(h.manager.generation(), 1);
        let sinks = h.factory.sinks();
        assert_eq!(sinks.len(), 1);
        assert_eq!(banner_count(&sinks[0]), 1);
        assert!(sinks[0].transcript().ends_with(settings::PROMPT_SYMBOL));
        assert_eq!(h.factory.builds(), vec![(Theme::Dark, 1)]);
    }

    #[test]
    fn toggle_twice_restores_theme_and_announces_twice() {
        let mut h = harness(true);
        type_line(&mut h, "toggle");
        assert_eq!(h.manager.theme(), Theme::Light);
        type_line(&mut h, "toggle");
        assert_eq!(h.manager.theme(), Theme::Dark);

        let sinks = h.factory.sinks();
        assert_eq!(sinks.len(), 3);
        assert_eq!(banner_count(&sinks[1]), 1);
        assert_eq!(banner_count(&sinks[2]), 1);
        assert_eq!(sinks[0].dispose_count(), 1);
        assert_eq!(sinks[1].dispose_count(), 1);
        assert_eq!(sinks[2].dispose_count(), 0);
        assert_eq!(
            h.factory.builds(),
            vec![(Theme::Dark, 1), (Theme::Light, 2), (Theme::Dark, 3)]
        );
    }

    #[test]
    fn clear_rebuilds_without_changing_theme() {
        let mut h = harness(false);
        type_line(&mut h, "clear");
        assert_eq!(h.manager.theme(), Theme::Light);
        assert_eq!(h.manager.generation(), 2);
        assert_eq!(h.factory.sinks().len(), 2);
    }

    #[test]
    fn rebuild_resets_line_buffer() {
        let mut h = harness(true);
        h.manager
            .handle(SessionEvent::Input {
                generation: 1,
                data: "ab".into(),
            })
            .expect("input");
        assert_eq!(h.manager.pending_line(), "ab");
        h.signal.set(false);
        let event = h.events.try_recv().expect("preference event queued");
        h.manager.handle(event).expect("rebuild");
        assert_eq!(h.manager.theme(), Theme::Light);
        assert_eq!(h.manager.pending_line(), "");
    }

    #[test]
    fn stale_input_is_dropped() {
        let mut h = harness(true);
        type_line(&mut h, "clear");
        h.manager
            .handle(SessionEvent::Input {
                generation: 1,
                data: "x".into(),
            })
            .expect("stale input");
        assert_eq!(h.manager.pending_line(), "");
        assert!(!h.factory.sinks()[0].transcript().ends_with('x'));
    }

    #[test]
    fn unknown_command_then_prompt() {
        let mut h = harness(true);
        type_line(&mut h, "foobar");
        let sink = h.factory.sinks().remove(0);
        let lines = sink.plain_lines();
        let at = lines
            .iter()
            .position(|line| line == " Command not found: foobar")
            .expect("not-found line");
        assert_eq!(lines[at + 1], "");
        assert!(sink.transcript().ends_with(settings::PROMPT_SYMBOL));
    }

    #[test]
    fn empty_submit_only_redraws_prompt() {
        let mut h = harness(true);
        let sink = h.factory.sinks().remove(0);
        let before = sink.plain_lines().len();
        type_line(&mut h, "   ");
        let after = sink.plain_lines();
        // echoed spaces + newline, then the hint line
        assert_eq!(after.len(), before + 2);
        assert!(!after.iter().any(|line| line.contains("Command not found")));
    }

    #[test]
    fn preference_listener_is_not_leaked_across_rebuilds() {
        let mut h = harness(true);
        assert_eq!(h.signal.listener_count(), 1);
        for _ in 0..4 {
            type_line(&mut h, "toggle");
        }
        assert_eq!(h.signal.listener_count(), 1);
        h.manager.shutdown();
        assert_eq!(h.signal.listener_count(), 0);
    }

    #[test]
    fn resize_fits_live_surface_only() {
        let mut h = harness(true);
        type_line(&mut h, "clear");
        h.manager
            .handle(SessionEvent::Resize { generation: 1 })
            .expect("stale resize");
        h.manager
            .handle(SessionEvent::Resize { generation: 2 })
            .expect("resize");
        h.manager
            .handle(SessionEvent::Resize { generation: 2 })
            .expect("resize again");
        let sinks = h.factory.sinks();
        assert_eq!(sinks[0].fit_count(), 0);
        assert_eq!(sinks[1].fit_count(), 2);
    }

    #[test]
    fn shutdown_event_stops_and_disposes() {
        let mut h = harness(true);
        let keep_going = h.manager.handle(SessionEvent::Shutdown).expect("shutdown");
        assert!(!keep_going);
        assert_eq!(h.factory.sinks()[0].dispose_count(), 1);
        assert!(h.manager.surface().is_none());
    }

    #[tokio::test]
    async fn projects_render_sorted_by_recent_push() {
        let repos = parse_repo_list(
            r#"[
                {"name":"a","html_url":"u/a","description":"x","pushed_at":"2023-01-01"},
                {"name":"b","html_url":"u/b","description":null,"pushed_at":"2024-06-01"},
                {"name":"c","html_url":"u/c","description":"z","pushed_at":"2022-05-05"}
            ]"#,
        )
        .expect("fixture");
        let mut h = harness_with(Config::default(), true, StaticRepoSource::ok(repos));
        type_line(&mut h, "projects");

        let event = h.events.recv().await.expect("fetch completion");
        assert!(matches!(
            event,
            SessionEvent::ProjectsFetched { generation: 1, .. }
        ));
        h.manager.handle(event).expect("render");

        let sink = h.factory.sinks().remove(0);
        let names: Vec<String> = sink
            .plain_lines()
            .into_iter()
            .filter_map(|line| line.strip_prefix(" Name: ").map(str::to_string))
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(sink
            .plain_lines()
            .contains(&" Description: No description".to_string()));
        assert!(sink.transcript().ends_with(settings::PROMPT_SYMBOL));
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_on_surface() {
        let mut h = harness_with(
            Config::default(),
            true,
            StaticRepoSource::failing(503, "unavailable"),
        );
        type_line(&mut h, "projects");
        let event = h.events.recv().await.expect("fetch completion");
        h.manager.handle(event).expect("render failure");

        let sink = h.factory.sinks().remove(0);
        assert!(sink
            .plain_lines()
            .iter()
            .any(|line| line == " Failed to fetch projects: status 503: unavailable"));
        assert!(sink.transcript().ends_with(settings::PROMPT_SYMBOL));
    }

    #[tokio::test]
    async fn failure_report_starts_below_open_prompt() {
        let mut h = harness_with(
            Config::default(),
            true,
            StaticRepoSource::failing(503, "unavailable"),
        );
        type_line(&mut h, "projects");
        let event = h.events.recv().await.expect("fetch completion");
        h.manager.handle(event).expect("render failure");

        let sink = h.factory.sinks().remove(0);
        let lines = sink.plain_lines();
        let at = lines
            .iter()
            .position(|line| line == " Failed to fetch projects: status 503: unavailable")
            .expect("failure line");
        assert_eq!(lines[at - 1], settings::PROMPT_SYMBOL);
        assert_eq!(lines[at + 1], "");
    }

    #[tokio::test]
    async fn typing_during_fetch_is_echoed_after_listing() {
        let mut h = harness_with(Config::default(), true, StaticRepoSource::ok(Vec::new()));
        type_line(&mut h, "projects");
        h.manager
            .handle(SessionEvent::Input {
                generation: 1,
                data: "he".into(),
            })
            .expect("input");
        let event = h.events.recv().await.expect("fetch completion");
        h.manager.handle(event).expect("render");

        let sink = h.factory.sinks().remove(0);
        assert!(sink.transcript().ends_with(" > he"));
        assert_eq!(h.manager.pending_line(), "he");
    }

    #[tokio::test]
    async fn typing_during_failed_fetch_is_echoed_after_report() {
        let mut h = harness_with(
            Config::default(),
            true,
            StaticRepoSource::failing(503, "unavailable"),
        );
        type_line(&mut h, "projects");
        h.manager
            .handle(SessionEvent::Input {
                generation: 1,
                data: "ab".into(),
            })
            .expect("input");
        let event = h.events.recv().await.expect("fetch completion");
        h.manager.handle(event).expect("render failure");

        let sink = h.factory.sinks().remove(0);
        let lines = sink.plain_lines();
        assert!(lines.contains(&" > ab".to_string()));
        assert!(lines.contains(&" Failed to fetch projects: status 503: unavailable".to_string()));
        assert!(sink.transcript().ends_with(" > ab"));
    }

    #[tokio::test]
    async fn stale_fetch_result_is_dropped() {
        let mut h = harness(true);
        let sink = h.factory.sinks().remove(0);
        let written = sink.transcript().len();

        h.manager
            .handle(SessionEvent::ProjectsFetched {
                generation: 0,
                result: Ok(Vec::new()),
            })
            .expect("stale fetch");
        assert_eq!(sink.transcript().len(), written);
        assert_eq!(sink.clear_count(), 0);
    }

    #[tokio::test]
    async fn rebuild_cancels_outstanding_fetch() {
        let mut h = harness_with(Config::default(), true, StaticRepoSource::pending());
        type_line(&mut h, "projects");
        assert_eq!(h.manager.pending_fetches(), 1);
        type_line(&mut h, "toggle");
        assert_eq!(h.manager.pending_fetches(), 0);
        tokio::task::yield_now().await;
        assert!(h.events.try_recv().is_err());
    }
}
