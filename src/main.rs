//! Termfolio terminal host.
//!
//! Loads configuration, installs file logging, puts the terminal into raw
//! mode on the alternate screen, and drives the session until the user exits
//! with Ctrl-C or Ctrl-D.

mod cli;

use clap::Parser;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io;
use std::sync::Arc;
use termfolio::api::GitHubClient;
use termfolio::commands::CommandRegistry;
use termfolio::config::{load_config, Config, ThemeSetting};
use termfolio::error::SurfaceError;
use termfolio::links::SystemLinkOpener;
use termfolio::logging::init_logging;
use termfolio::session::{event_channel, run_session, SessionManager, SessionParts};
use termfolio::tui::TerminalSurfaceFactory;
use termfolio::ui::theme::{detect_terminal_preference, PreferenceSignal};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    apply_cli_overrides(&mut config, &args);

    match init_logging(args.log_file.as_deref()) {
        Ok(Some(path)) => info!(path = %path.display(), "logging initialized"),
        Ok(None) => {}
        Err(e) => eprintln!("warning: file logging disabled: {e}"),
    }

    if let Err(e) = run(config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Flags win over every config source.
fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if let Some(theme) = args.theme.as_deref().and_then(ThemeSetting::parse) {
        config.display.theme = theme;
    }
    if let Some(url) = &args.projects_url {
        config.projects.endpoint = url.clone();
    }
}

async fn run(config: Config) -> Result<(), SurfaceError> {
    // Terminals that do not report COLORFGBG are treated as dark. The hint is
    // read once; no producer feeds later preference changes in this host.
    let prefers_dark = detect_terminal_preference(|name| std::env::var(name).ok()).unwrap_or(true);
    let preference = PreferenceSignal::new(prefers_dark);
    let repos = Arc::new(GitHubClient::new(&config.projects));
    info!(
        endpoint = repos.endpoint(),
        prefers_dark, "starting terminal session"
    );

    enter_terminal()?;
    let result = async {
        let (tx, rx) = event_channel();
        let manager = SessionManager::start(
            SessionParts {
                config,
                registry: CommandRegistry::builtin(),
                factory: Box::new(TerminalSurfaceFactory),
                links: Arc::new(SystemLinkOpener),
                repos,
            },
            &preference,
            tx,
        )?;
        run_session(manager, rx).await
    }
    .await;

    if let Err(e) = leave_terminal() {
        warn!(error = %e, "failed to restore terminal");
    }
    result
}

fn enter_terminal() -> Result<(), SurfaceError> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(())
}

fn leave_terminal() -> io::Result<()> {
    execute!(
        io::stdout(),
        ResetColor,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()
}
