use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gclip")]
#[command(about = "Clipboard history manager", long_about = None, version)]
pub struct Cli {
    /// Config file [default: <config_dir>/gclip/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// History database, overrides `storage.database_path`
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Record clipboard changes until Ctrl-C
    Watch {
        /// Print history events as JSON lines
        #[arg(long)]
        events: bool,
    },
    /// List history, newest first
    List {
        /// Show at most N items
        #[arg(short, long)]
        limit: Option<usize>,
        /// One JSON record per line
        #[arg(long)]
        json: bool,
    },
    /// Print the newest history item
    Current {
        #[arg(long)]
        json: bool,
    },
    /// Record TEXT, or stdin when omitted
    Add { text: Option<String> },
    /// Put a history item back on the clipboard
    Restore { key: u64 },
    /// Remove a history item
    Delete { key: u64 },
    /// Remove every history item
    Clear,
    /// Normalize a JSON payload (argument or stdin) into a `{key, value}` record
    Normalize { input: Option<String> },
}
