//! Route-tree file watching for `solidus watch`.

use std::ffi::OsString;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};

/// Debounce window for editor save bursts.
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Watches the route tree and reruns `on_change` after every debounced
/// modification until Ctrl+C.
///
/// The input file itself may not exist yet, so its parent directory is
/// watched (non-recursively) and creation counts as a change. Changes landing
/// inside the debounce window are coalesced into one trailing pass rather
/// than dropped. The watcher handle is scoped to this call and released on
/// every exit path.
pub async fn watch_input(input: &Path, mut on_change: impl FnMut()) -> Result<()> {
    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    let file_name: OsString = input
        .file_name()
        .map(|name| name.to_os_string())
        .with_context(|| format!("Input path has no file name: {}", input.display()))?;

    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            // Only process modify and create events for the input file itself
            if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
                && event
                    .paths
                    .iter()
                    .any(|path| path.file_name() == Some(file_name.as_os_str()))
            {
                let _ = tx.blocking_send(());
            }
        }
    })?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;
    println!("  {} Watching: {}", "👀".cyan(), input.display());
    println!();

    let mut debounce = Debounce::new(DEBOUNCE, Instant::now());
    let mut regenerate = || {
        println!("{} Route tree changed", "🔄".yellow());
        on_change();
    };

    loop {
        let wake = debounce.deadline().unwrap_or_else(Instant::now);
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.recv() => {
                match changed {
                    Some(()) => {
                        if debounce.observe(Instant::now()) {
                            regenerate();
                        }
                    }
                    None => break,
                }
            }
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(wake)),
                if debounce.deadline().is_some() =>
            {
                if debounce.expire(Instant::now()) {
                    regenerate();
                }
            }
        }
    }

    drop(watcher);
    Ok(())
}

/// Debounce state for change events.
///
/// The first event after a quiet window runs a pass immediately. Events
/// landing inside the window schedule a single deferred pass at the end of
/// the window, so a save that races a just-finished pass still regenerates
/// instead of leaving stale output until the next change.
struct Debounce {
    window: Duration,
    last_pass: Instant,
    deferred: Option<Instant>,
}

impl Debounce {
    /// Starts with `now` as the last pass, matching the initial generation
    /// run before the watcher loop.
    fn new(window: Duration, now: Instant) -> Self {
        Self {
            window,
            last_pass: now,
            deferred: None,
        }
    }

    /// Records a change event. Returns `true` when a pass should run now;
    /// inside the window the pass is deferred to [`Self::deadline`] instead.
    fn observe(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_pass) >= self.window {
            self.last_pass = now;
            self.deferred = None;
            true
        } else {
            self.deferred = Some(self.last_pass + self.window);
            false
        }
    }

    /// Instant the pending deferred pass is due, if any.
    fn deadline(&self) -> Option<Instant> {
        self.deferred
    }

    /// Consumes the deferred pass once its deadline has been reached.
    fn expire(&mut self, now: Instant) -> bool {
        match self.deferred {
            Some(due) if now >= due => {
                self.last_pass = now;
                self.deferred = None;
                true
            }
            _ => false,
        }
    }
}
