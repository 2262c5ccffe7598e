//! Termfolio: an interactive terminal portfolio shell.
//!
//! The crate hosts a small command shell: keystrokes are assembled into lines
//! by a line editor, lines are resolved against a fixed command registry, and
//! output is written as styled text to a themed surface. Switching between the
//! light and dark themes rebuilds the surface from scratch.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use termfolio::api::GitHubClient;
//! use termfolio::commands::CommandRegistry;
//! use termfolio::config::load_config;
//! use termfolio::links::SystemLinkOpener;
//! use termfolio::session::{event_channel, run_session, SessionManager, SessionParts};
//! use termfolio::tui::TerminalSurfaceFactory;
//! use termfolio::ui::theme::PreferenceSignal;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let repos = Arc::new(GitHubClient::new(&config.projects));
//! let (tx, rx) = event_channel();
//! let manager = SessionManager::start(
//!     SessionParts {
//!         config,
//!         registry: CommandRegistry::builtin(),
//!         factory: Box::new(TerminalSurfaceFactory),
//!         links: Arc::new(SystemLinkOpener),
//!         repos,
//!     },
//!     &PreferenceSignal::new(true),
//!     tx,
//! )
//! .unwrap();
//! run_session(manager, rx).await.unwrap();
//! # }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod links;
pub mod logging;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;
