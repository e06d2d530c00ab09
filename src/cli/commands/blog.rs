//! folio blog - Placeholder until there are posts

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, terminal_width};
use crate::error::Result;

const COMING_SOON: &str = "Coming soon! Here you'll find posts about data science, \
analytics, learning journeys, and more. Stay tuned for updates.";

#[derive(Args, Debug)]
pub struct BlogArgs {}

pub fn run(ctx: &AppContext, _args: &BlogArgs) -> Result<()> {
    if ctx.machine_mode() {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "posts": [],
            "message": COMING_SOON,
        }));
    }

    println!("{}", "Blog".bold());
    println!();
    println!("{}", textwrap::fill(COMING_SOON, terminal_width()));

    Ok(())
}
