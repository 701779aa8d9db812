use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bayline - signal wiring and link-consistency tool for bay engineering
#[derive(Parser, Debug)]
#[command(name = "bayline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Project document (falls back to bayline.toml, then errors)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run structural validation over a bay or the whole project
    Validate {
        /// Limit validation to one bay
        #[arg(long)]
        bay: Option<String>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict: bool,
    },

    /// Count pending endpoints per bay and device
    Pending {
        /// Limit the report to one bay
        #[arg(long)]
        bay: Option<String>,
    },

    /// Replicate a whole bay with identity remapping
    Replicate {
        /// Source bay id
        #[arg(short, long)]
        source: String,

        /// Display name for the new bay
        #[arg(short, long)]
        name: String,

        /// Token substituted case-insensitively in ids, names, and texts
        #[arg(long, default_value = "")]
        src_token: String,

        /// Replacement for the source token
        #[arg(long, default_value = "")]
        dst_token: String,

        /// Canvas offset for copied device positions
        #[arg(long)]
        dx: Option<f64>,

        #[arg(long)]
        dy: Option<f64>,

        /// Re-point now-external links at EXTERNO instead of keeping names
        #[arg(long)]
        mask_external: bool,

        /// Write here instead of overwriting the project document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a signal and every endpoint referencing it
    RemoveSignal {
        /// Bay holding the signal
        #[arg(long)]
        bay: String,

        /// Signal id to remove
        #[arg(long)]
        signal: String,

        /// Remove across every bay, not just the named one
        #[arg(long)]
        all_bays: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
