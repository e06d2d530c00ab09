//! folio about - The about section

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, terminal_width};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AboutArgs {}

pub fn run(ctx: &AppContext, _args: &AboutArgs) -> Result<()> {
    let profile = &ctx.config.profile;

    if ctx.machine_mode() {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "name": profile.name,
            "tagline": profile.tagline,
            "about": profile.about,
            "resume": profile.resume,
        }));
    }

    let wrap_width = terminal_width();
    println!("{}", "About Me".bold());
    println!();

    if profile.about.is_empty() {
        println!("{}", "Nothing here yet".dimmed());
        println!();
        println!("Add [profile] about paragraphs to folio.toml");
        return Ok(());
    }

    for (i, paragraph) in profile.about.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", textwrap::fill(paragraph, wrap_width));
    }

    if let Some(ref resume) = profile.resume {
        println!();
        println!("{} {resume}", "Resume:".dimmed());
    }

    Ok(())
}
