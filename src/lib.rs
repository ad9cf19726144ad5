// src/lib.rs

pub mod cli;
pub mod errors;
pub mod id;
pub mod layout;
pub mod logging;
pub mod render;
pub mod table;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::{CliArgs, OutputFormat};
use crate::layout::{assign_levels, plan_positions};
use crate::table::model::PrecedenceMap;
use crate::watch::WatchEvent;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - table loading + validation
/// - the leveling / position core
/// - the chosen renderer
/// - (optional) file watching + Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let input = PathBuf::from(&args.input);

    if args.dry_run {
        let map = table::load_and_validate(&input)?;
        print_dry_run(&map);
        return Ok(());
    }

    if !args.watch {
        print!("{}", compute(&input, &args)?);
        return Ok(());
    }

    run_watch(&input, &args).await
}

/// Run the full pipeline once: load + validate, level, position, render.
///
/// Everything is recomputed from scratch; no state survives from a
/// previous input, so the returned rendering is always a whole replacement
/// for whatever was shown before.
fn compute(input: &Path, args: &CliArgs) -> Result<String> {
    let map = table::load_and_validate(input)?;

    let levels = assign_levels(&map);
    let positions = plan_positions(&levels);

    debug!(tasks = map.len(), "layout computed");

    Ok(match args.format {
        OutputFormat::Text => render::render_text(&map, &levels, &positions, args.scale),
        OutputFormat::Dot => render::render_dot(&map, &positions, args.scale),
    })
}

/// Watch-mode event loop.
///
/// Single consumer: the watcher and the Ctrl-C handler are the only
/// producers, and each `InputChanged` triggers one full synchronous
/// recompute. A rejected input is reported and skipped; the previous
/// rendering stands until a good save arrives.
async fn run_watch(input: &Path, args: &CliArgs) -> Result<()> {
    let (events_tx, mut events_rx) = mpsc::channel::<WatchEvent>(16);

    let _watcher_handle = watch::spawn_watcher(input, events_tx.clone())?;

    // Ctrl-C -> graceful shutdown through the same channel.
    {
        let tx = events_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(WatchEvent::ShutdownRequested).await;
        });
    }

    let mut last_hash = match compute(input, args) {
        Ok(output) => {
            print!("{output}");
            watch::content_hash(input).ok()
        }
        Err(err) => {
            warn!("initial input rejected: {err:#}");
            None
        }
    };

    info!("watching {:?} for changes", input);

    while let Some(event) = events_rx.recv().await {
        match event {
            WatchEvent::InputChanged => {
                let hash = watch::content_hash(input).ok();
                if hash.is_some() && hash == last_hash {
                    debug!("input touched but content unchanged; skipping");
                    continue;
                }

                match compute(input, args) {
                    Ok(output) => {
                        last_hash = hash;
                        print!("{output}");
                    }
                    Err(err) => {
                        // Half-written saves usually settle into a good file
                        // moments later; keep the previous rendering.
                        warn!("input rejected, keeping previous layout: {err:#}");
                    }
                }
            }
            WatchEvent::ShutdownRequested => {
                info!("shutdown requested, stopping watch loop");
                break;
            }
        }
    }

    Ok(())
}

/// Simple dry-run output: print tasks and their predecessor lists.
fn print_dry_run(map: &PrecedenceMap) {
    println!("plandag dry-run");
    println!();

    println!("tasks ({}):", map.len());
    for (task, predecessors) in map.iter() {
        println!("  - {task}");
        if !predecessors.is_empty() {
            let preds: Vec<String> = predecessors.iter().map(|p| p.to_string()).collect();
            println!("      preceded by: {}", preds.join(", "));
        }
    }

    debug!("dry-run complete (no layout computed)");
}
