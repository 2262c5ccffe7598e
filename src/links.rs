//! Link-opening collaborator.
//!
//! Opening a link is fire-and-forget: the session never consults the result,
//! failures are only logged. The launcher is waited on from a background
//! thread so it never lingers as a defunct process.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Desktop launcher backed by the platform's standard opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) {
        match spawn_reaped(launcher_command(url)) {
            Ok(_) => debug!(url, "opened link"),
            Err(err) => warn!(url, error = %err, "failed to open link"),
        }
    }
}

/// Start `command` without blocking and reap it on a background thread.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command.spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                debug!(%status, "link launcher exited unsuccessfully");
            }
            Some(status)
        }
        Err(err) => {
            warn!(error = %err, "failed to wait on link launcher");
            None
        }
    }))
}

/// Build the platform launcher without running it.
fn launcher_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut command = Command::new("open");
        command.arg(url);
        command
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    };
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };
    // Launcher chatter must not land on the raw-mode surface.
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}
