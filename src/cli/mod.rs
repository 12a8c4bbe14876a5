// ABOUTME: CLI argument parsing and command routing for atelier
//
// Provides command-line interface for:
// - Launching the storefront TUI (tui, default)
// - Printing the order summary without the TUI (summary)

pub mod summary;

use clap::{Parser, Subcommand, ValueEnum};

/// Atelier storefront - bespoke garments checkout in the terminal
#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Print the order summary for the items in the bag
    Summary,
}
