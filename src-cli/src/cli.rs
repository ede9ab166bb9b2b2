//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "yo", version, about = "Type a short keyword, get a URL")]
pub struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub db: Option<PathBuf>,

    /// Don't load the default mappings into an empty store
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Submit text: a command (`set k url`, `clear all`, `init`) or a keyword
    Go {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show the keyword the text would complete to
    Suggest {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// List mappings
    List {
        /// Most used first
        #[arg(long)]
        ranked: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read one submission per line from stdin
    Shell,
    /// Print the effective configuration
    Config,
}
