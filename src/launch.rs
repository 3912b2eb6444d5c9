//! Opening links in the system browser.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::state::AppState;

/// Opener candidates probed in order.
const OPENERS: [&str; 3] = ["xdg-open", "open", "wslview"];

/// First opener binary present on PATH.
fn opener_binary() -> Option<PathBuf> {
    OPENERS.iter().find_map(|candidate| which::which(candidate).ok())
}

/// What: Navigate to the link with `id`: record its usage, then hand the
/// URL to the system opener.
///
/// Inputs:
/// - `app`: Application state
/// - `id`: Link id; unknown ids are a no-op
///
/// Output:
/// - Updates and persists the recently-used list, then spawns the opener
///   detached. In dry-run mode the URL is logged instead. Failures only
///   produce a footer message and a log line.
///
/// Details:
/// - Usage is recorded before spawning, mirroring the write-through
///   contract; the on-screen recent section refreshes on the next
///   derived rebuild, not here.
pub fn open_link(app: &mut AppState, id: &str) {
    let Some(record) = app.link(id).cloned() else {
        return;
    };
    crate::logic::record_usage(app, id);

    if app.dry_run {
        tracing::info!(url = %record.url, "[Launch] dry run, not opening");
        app.status_message = Some(format!("dry run: {}", record.url));
        return;
    }

    let Some(bin) = opener_binary() else {
        tracing::warn!("[Launch] no opener (xdg-open/open/wslview) found on PATH");
        app.status_message = Some("No opener found on PATH".to_string());
        return;
    };
    match Command::new(&bin)
        .arg(&record.url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_) => {
            tracing::info!(url = %record.url, opener = %bin.display(), "[Launch] opened link");
            app.status_message = Some(format!("Opened {}", record.label));
        }
        Err(e) => {
            tracing::warn!(url = %record.url, error = %e, "[Launch] failed to spawn opener");
            app.status_message = Some(format!("Failed to open {}: {e}", record.label));
        }
    }
}
