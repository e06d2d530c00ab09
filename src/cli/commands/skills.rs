//! folio skills - Proficiency meters, flat or grouped by category

use clap::Args;
use colored::Colorize;

use crate::aggregate;
use crate::app::AppContext;
use crate::cli::formatters::{GroupedSkillsView, SkillMeterList};
use crate::cli::output::{emit, OutputFormat};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// Group skills by category using the configured display order
    #[arg(long, short)]
    pub grouped: bool,

    /// Sort order for the flat view
    #[arg(long, value_enum, default_value_t = SortKey::Percent)]
    pub sort: SortKey,

    /// Hide the soft skills block
    #[arg(long)]
    pub no_soft: bool,
}

/// Flat view ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Proficiency percent, descending
    Percent,
    /// Name, ascending
    Name,
}

pub fn run(ctx: &AppContext, args: &SkillsArgs) -> Result<()> {
    let skills = &ctx.content.skills;
    let width = ctx.config.display.meter_width;

    if skills.is_empty() && ctx.format == OutputFormat::Human {
        print_empty_state(ctx, args);
        return Ok(());
    }

    if args.grouped {
        let sections = aggregate::grouped_view(skills, &ctx.config.display.category_order);
        if sections.is_empty() && ctx.format == OutputFormat::Human {
            print_empty_state(ctx, args);
            return Ok(());
        }
        let view = GroupedSkillsView {
            sections: &sections,
            width,
        };
        if ctx.format == OutputFormat::Human {
            println!("{}", "Skills".bold());
            println!();
        }
        emit(&view, ctx.format);
    } else {
        let flat = match args.sort {
            SortKey::Percent => aggregate::sort_by_percent_desc(skills),
            SortKey::Name => aggregate::sort_by_name(skills),
        };
        let view = SkillMeterList {
            skills: &flat,
            width,
        };
        if ctx.format == OutputFormat::Human {
            println!("{}", "Skills".bold());
            println!();
        }
        emit(&view, ctx.format);
    }

    if ctx.format == OutputFormat::Human && !args.no_soft {
        print_soft_skills(ctx);
    }

    Ok(())
}

fn print_empty_state(ctx: &AppContext, args: &SkillsArgs) {
    println!("{}", "No skills found".dimmed());
    println!();
    println!("Add entries to {}", ctx.config.content.skills);
    if !args.no_soft {
        print_soft_skills(ctx);
    }
}

fn print_soft_skills(ctx: &AppContext) {
    let soft = &ctx.config.display.soft_skills;
    if soft.is_empty() {
        return;
    }
    println!();
    println!("{}", "Soft Skills".bold());
    println!("{}", "-".repeat("Soft Skills".len()));
    for skill in soft {
        println!("- {skill}");
    }
}
