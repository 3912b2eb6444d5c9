//! Runtime event loop: terminal lifecycle, state initialization, input
//! pumping, and rendering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::args::Args;
use crate::events::handle_event;
use crate::state::AppState;
use crate::ui::ui;

use super::persist;
use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Redraw cadence when no input arrives.
const TICK: Duration = Duration::from_millis(250);

/// What: Spawn the thread that pumps crossterm events into the runtime.
///
/// Inputs:
/// - `headless`: When `true` no thread is spawned (no TTY to read from)
/// - `event_tx`: Channel the thread forwards events into
/// - `cancelled`: Flag checked between polls for prompt shutdown
///
/// Details:
/// - Polls with a short timeout instead of blocking so the thread can
///   observe cancellation and a closed channel.
fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "failed to poll terminal events");
                    break;
                }
            }
        }
    });
}

/// What: Run the linkdeck TUI end-to-end: initialize the terminal and
/// state, load the catalog and persisted lists, drive the event loop, and
/// restore the terminal on exit.
///
/// Inputs:
/// - `args`: Parsed command line (dry-run flag, catalog override)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   or catalog errors.
///
/// Details:
/// - State: reads the three persisted id lists, builds the derived
///   sections, applies the persisted collapse state, and seeds the
///   search filter with the empty term so everything starts visible.
/// - Input: a dedicated thread forwards crossterm events over a channel;
///   the loop redraws after every event and on a periodic tick.
/// - `LINKDECK_TEST_HEADLESS=1` bypasses raw-mode setup and rendering so
///   smoke tests can exercise initialization without a TTY.
pub async fn run(args: &Args) -> Result<()> {
    let headless = std::env::var("LINKDECK_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        dry_run: args.dry_run,
        ..Default::default()
    };

    let catalog_path = args
        .catalog
        .clone()
        .unwrap_or_else(|| crate::theme::config_dir().join("links.toml"));
    tracing::info!(
        catalog = %catalog_path.display(),
        favorites = %app.favorites_path.display(),
        recent = %app.recent_path.display(),
        collapsed = %app.collapsed_path.display(),
        "resolved state file paths"
    );

    let loaded = crate::catalog::load_or_init(&catalog_path);
    let catalog = match loaded {
        Ok(c) => c,
        Err(e) => {
            if !headless {
                let _ = restore_terminal();
            }
            return Err(e);
        }
    };
    app.records = catalog.records;
    app.sections = catalog.sections;

    persist::load_lists(&mut app);
    crate::logic::rebuild_derived_sections(&mut app);
    crate::logic::apply_search(&mut app);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let cancelled = Arc::new(AtomicBool::new(false));
    spawn_event_thread(headless, event_tx, cancelled.clone());

    loop {
        if let Some(term) = terminal.as_mut() {
            term.draw(|f| ui(f, &mut app))?;
        }
        select! {
            maybe_ev = event_rx.recv() => {
                match maybe_ev {
                    Some(ev) => {
                        if handle_event(ev, &mut app) {
                            break;
                        }
                    }
                    // Sender gone (headless): idle until the task is
                    // cancelled from outside.
                    None => sleep(TICK).await,
                }
            }
            () = sleep(TICK) => {}
        }
    }

    cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
