//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing. One subcommand
//! per page of the portfolio, mirroring the site's navigation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// Folio - Render a personal portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors, no Unicode)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", value_enum)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ./folio.toml, then ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Get the effective output format.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }

        if let Some(fmt) = self.output_format {
            return fmt;
        }

        if self.machine {
            return OutputFormat::Json;
        }

        OutputFormat::Human
    }

    /// Check if plain mode is forced via CLI flags or color mode.
    #[must_use]
    pub fn force_plain(&self) -> bool {
        self.plain || self.color == Some(ColorMode::Never)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the whole single-page portfolio
    Home(commands::home::HomeArgs),

    /// Show the about section
    About(commands::about::AboutArgs),

    /// Show skills as proficiency meters, flat or grouped by category
    Skills(commands::skills::SkillsArgs),

    /// List projects, with optional expansion
    Projects(commands::projects::ProjectsArgs),

    /// Show the blog section
    Blog(commands::blog::BlogArgs),

    /// Show contact links
    Contact(commands::contact::ContactArgs),

    /// Scaffold a new portfolio in the current directory
    Init(commands::init::InitArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}
