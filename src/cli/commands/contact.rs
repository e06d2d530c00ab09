//! folio contact - Static contact links

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_json, HumanLayout};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ContactArgs {}

pub fn run(ctx: &AppContext, _args: &ContactArgs) -> Result<()> {
    let links = &ctx.config.contact.links;

    if ctx.machine_mode() {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "count": links.len(),
            "links": links,
        }));
    }

    if links.is_empty() {
        println!("{}", "No contact links configured".dimmed());
        println!();
        println!("Add [[contact.links]] entries to folio.toml");
        return Ok(());
    }

    let mut layout = HumanLayout::new();
    layout
        .title("Contact")
        .push_line("Let's connect! Reach out via any of the methods below.")
        .blank();
    for link in links {
        layout.kv(&link.label, &link.target);
    }
    emit_human(layout);

    Ok(())
}
