//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod about;
pub mod blog;
pub mod completions;
pub mod contact;
pub mod home;
pub mod init;
pub mod projects;
pub mod skills;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Home(args) => home::run(ctx, args),
        Commands::About(args) => about::run(ctx, args),
        Commands::Skills(args) => skills::run(ctx, args),
        Commands::Projects(args) => projects::run(ctx, args),
        Commands::Blog(args) => blog::run(ctx, args),
        Commands::Contact(args) => contact::run(ctx, args),
        Commands::Init(args) => init::run_without_context(ctx.format, args),
        Commands::Completions(args) => completions::run(args),
    }
}
