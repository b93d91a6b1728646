//! Command handlers for the `gclip` binary.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use gc_app::AppPaths;
use gc_core::ports::AppDirsPort;
use gc_core::{ClipKey, CopiedContent};
use gc_platform::app_dirs::DirsAppDirsAdapter;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::bootstrap::{load_config, wire_dependencies, AppRuntime};
use crate::cli::{Cli, Command};

/// Longest single-line preview printed by `list`.
const PREVIEW_CHARS: usize = 80;

pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        db,
        command,
    } = cli;
    let open = || open_runtime(config.as_deref(), db.as_deref());

    match command {
        Command::Normalize { input } => normalize(input, &mut io::stdout().lock()),
        Command::Watch { events } => watch(&open()?, events).await,
        Command::List { limit, json } => list(&open()?, limit, json).await,
        Command::Current { json } => current(&open()?, json).await,
        Command::Add { text } => add(&open()?, text).await,
        Command::Restore { key } => restore(&open()?, ClipKey(key)).await,
        Command::Delete { key } => delete(&open()?, ClipKey(key)).await,
        Command::Clear => clear(&open()?).await,
    }
}

fn open_runtime(config_path: Option<&Path>, db: Option<&Path>) -> Result<AppRuntime> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&app_dirs);
    let config = load_config(config_path.unwrap_or(&paths.config_path))?;
    wire_dependencies(config, &paths, db)
}

fn read_arg_or_stdin(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Print the normalized record for a JSON payload. Never opens the history.
pub fn normalize(input: Option<String>, out: &mut impl Write) -> Result<()> {
    let payload = read_arg_or_stdin(input)?;
    let record = CopiedContent::normalize(payload).context("Failed to normalize payload")?;
    writeln!(out, "{}", record.to_json()?)?;
    Ok(())
}

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut preview: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if preview.len() < text.trim_end().len() {
        preview.push('…');
    }
    preview
}

fn print_record(record: &CopiedContent, json: bool) -> Result<()> {
    if json {
        println!("{}", record.to_json()?);
    } else {
        let key = record.key.as_ref().map(ToString::to_string).unwrap_or_default();
        println!("{key}\t{}", preview(record.value.as_deref().unwrap_or_default()));
    }
    Ok(())
}

async fn watch(runtime: &AppRuntime, print_events: bool) -> Result<()> {
    let mut events = runtime.subscribe();
    runtime.usecases().start_clipboard_watcher().execute().await?;
    info!("Watching clipboard, press Ctrl-C to stop");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            signal = &mut ctrl_c => {
                signal.context("Failed to listen for Ctrl-C")?;
                break;
            }
            event = events.recv() => match event {
                Ok(event) if print_events => println!("{}", serde_json::to_string(&event)?),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Event output fell behind"),
                Err(RecvError::Closed) => break,
            },
        }
    }

    runtime.usecases().stop_clipboard_watcher().execute().await?;
    Ok(())
}

async fn list(runtime: &AppRuntime, limit: Option<usize>, json: bool) -> Result<()> {
    let records = runtime.usecases().list_history().execute(limit).await?;
    for record in &records {
        print_record(record, json)?;
    }
    Ok(())
}

async fn current(runtime: &AppRuntime, json: bool) -> Result<()> {
    match runtime.usecases().get_current_content().execute().await? {
        Some(record) if json => println!("{}", record.to_json()?),
        Some(record) => println!("{}", record.value.unwrap_or_default()),
        None => eprintln!("History is empty"),
    }
    Ok(())
}

async fn add(runtime: &AppRuntime, text: Option<String>) -> Result<()> {
    let text = read_arg_or_stdin(text)?;
    match runtime.usecases().record_copied_content().execute(&text).await? {
        Some(record) => print_record(&record, false),
        None => bail!("Nothing to add: text is empty"),
    }
}

async fn restore(runtime: &AppRuntime, key: ClipKey) -> Result<()> {
    let record = runtime.usecases().restore_history_entry().execute(key).await?;
    print_record(&record, false)
}

async fn delete(runtime: &AppRuntime, key: ClipKey) -> Result<()> {
    if !runtime.usecases().delete_history_entry().execute(key).await? {
        bail!("No history item with key {key}");
    }
    Ok(())
}

async fn clear(runtime: &AppRuntime) -> Result<()> {
    let removed = runtime.usecases().clear_history().execute().await?;
    println!("Removed {removed} item(s)");
    Ok(())
}
