//! folio home - The whole single-page portfolio in one run

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::aggregate;
use crate::app::AppContext;
use crate::cli::formatters::{ProjectCard, SkillMeterList};
use crate::cli::output::{emit_json, terminal_width, Formattable, OutputFormat};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct HomeArgs {}

pub fn run(ctx: &AppContext, _args: &HomeArgs) -> Result<()> {
    if ctx.machine_mode() {
        return home_machine(ctx);
    }
    home_human(ctx);
    Ok(())
}

fn home_human(ctx: &AppContext) {
    let profile = &ctx.config.profile;
    let wrap_width = terminal_width();

    // Hero
    println!("{}", format!("Welcome, I'm {}", profile.name).bold());
    if !profile.tagline.is_empty() {
        println!("{}", textwrap::fill(&profile.tagline, wrap_width).dimmed());
    }

    // About
    if let Some(intro) = profile.about.first() {
        section("About Me");
        println!("{}", textwrap::fill(intro, wrap_width));
        if let Some(ref resume) = profile.resume {
            println!();
            println!("{} {resume}", "Resume:".dimmed());
        }
    }

    // Skills, percent-descending with meters
    let flat = aggregate::sort_by_percent_desc(&ctx.content.skills);
    if !flat.is_empty() {
        section("Skills");
        let view = SkillMeterList {
            skills: &flat,
            width: ctx.config.display.meter_width,
        };
        println!("{}", view.format(OutputFormat::Human));
    }

    // Projects, collapsed
    if !ctx.content.projects.is_empty() {
        section("Projects");
        let cards = ctx
            .content
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                ProjectCard {
                    project,
                    index: i + 1,
                    expanded: false,
                    wrap_width,
                }
                .format(OutputFormat::Human)
            })
            .join("\n");
        println!("{cards}");
        println!();
        println!(
            "{}",
            "Expand one with: folio projects --expand <number>".dimmed()
        );
    }

    // Contact
    if !ctx.config.contact.links.is_empty() {
        section("Contact Me");
        for link in &ctx.config.contact.links {
            println!("{} {}", format!("{}:", link.label).cyan(), link.target);
        }
    }
}

fn home_machine(ctx: &AppContext) -> Result<()> {
    emit_json(&serde_json::json!({
        "status": "ok",
        "profile": ctx.config.profile,
        "skills": aggregate::sort_by_percent_desc(&ctx.content.skills),
        "projects": ctx.content.projects,
        "contact": ctx.config.contact.links,
    }))
}

fn section(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "-".repeat(title.len().max(3)));
}
