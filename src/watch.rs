// src/watch.rs

//! Watch mode: recompute the layout when the input file changes.
//!
//! The watcher turns filesystem events into [`WatchEvent::InputChanged`]
//! messages on a channel; the run loop in `lib.rs` is the only consumer. It
//! knows nothing about tables or layouts; it only says "the input file was
//! touched". Content hashing lives here too, so the run loop can skip
//! recomputing when an editor fired an event without changing the bytes.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use blake3::Hasher;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Events sent into the watch-mode run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// The input file was created, modified or replaced.
    InputChanged,
    /// Ctrl-C was received.
    ShutdownRequested,
}

/// Handle for the filesystem watcher.
///
/// Exists so the underlying `RecommendedWatcher` stays alive for as long as
/// needed. Dropping this handle stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher for a single input file.
///
/// We watch the file's parent directory rather than the file itself:
/// editors and exporters typically save by writing a temp file and renaming
/// it over the target, which unbinds a watch placed on the old inode.
/// Events are filtered back down to the input's file name before anything
/// is forwarded.
pub fn spawn_watcher(
    input: impl Into<PathBuf>,
    events_tx: mpsc::Sender<WatchEvent>,
) -> Result<WatcherHandle> {
    let input = input.into();
    let file_name = input
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| anyhow!("input path {:?} has no file name", input))?;
    let parent = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    // Channel from the blocking notify callback into the async world.
    let (raw_tx, mut raw_rx) = tokio::sync::mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = raw_tx.send(event) {
                    // tracing isn't usable from this callback; fall back to stderr.
                    eprintln!("plandag: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("plandag: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&parent, RecursiveMode::NonRecursive)?;

    info!("file watcher started on {:?}", input);

    // Async task that filters raw events down to the input file and forwards
    // them to the run loop.
    tokio::spawn(async move {
        while let Some(event) = raw_rx.recv().await {
            debug!("received notify event: {:?}", event);

            let touches_input = event
                .paths
                .iter()
                .any(|path| path.file_name() == Some(file_name.as_os_str()));

            if !touches_input {
                continue;
            }

            if let Err(err) = events_tx.send(WatchEvent::InputChanged).await {
                warn!("failed to send WatchEvent::InputChanged: {err}");
                // Run loop is gone; no point keeping this task alive.
                return;
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Compute a content hash of the input file.
///
/// Used by the run loop to skip recomputation when a filesystem event fired
/// but the bytes did not change (editors love doing that).
pub fn content_hash(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut hasher = Hasher::new();

    let mut file =
        File::open(path).with_context(|| format!("opening input for hashing: {:?}", path))?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let hash = hasher.finalize().to_hex().to_string();
    debug!(hash = %hash, "computed input hash");
    Ok(hash)
}
