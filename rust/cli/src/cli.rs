//! Command-line argument definitions.

use crate::config::{OutputFormat, SymbolStyle};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fivecard",
    version,
    about = "Classify and compare five-card poker hands"
)]
pub struct FivecardCli {
    /// Output format (overrides FIVECARD_FORMAT and the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suit glyphs used in text output (overrides FIVECARD_SYMBOLS)
    #[arg(long, global = true, value_enum)]
    pub symbols: Option<SymbolStyle>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one hand, e.g. `fivecard classify Ah Kh Qh Jh Th`
    Classify {
        /// Five cards, as separate arguments or one quoted string
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Compare two hands; prints 1 if A wins, -1 if B wins, 0 on a tie
    Compare {
        /// First hand, e.g. "Ah Ad Ac As Kh"
        #[arg(long)]
        a: String,
        /// Second hand
        #[arg(long)]
        b: String,
    },
    /// Classify every hand in a file (one hand per line) and emit JSONL records
    Batch {
        /// Input file with one hand per line
        #[arg(long)]
        input: String,
        /// Write records to this file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// List the ten hand categories with their strength
    Categories,
    /// Display the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Classify { .. } => "classify",
            Commands::Compare { .. } => "compare",
            Commands::Batch { .. } => "batch",
            Commands::Categories => "categories",
            Commands::Cfg => "cfg",
        }
    }
}
