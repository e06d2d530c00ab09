//! folio projects - Collapsible project cards

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::app::AppContext;
use crate::cli::formatters::ProjectCard;
use crate::cli::output::{emit_json, terminal_width, Formattable, OutputFormat};
use crate::content::ProjectRecord;
use crate::error::{FolioError, Result};

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Expand one project by number or title substring
    #[arg(long, short)]
    pub expand: Option<String>,

    /// Expand every project
    #[arg(long)]
    pub expand_all: bool,
}

pub fn run(ctx: &AppContext, args: &ProjectsArgs) -> Result<()> {
    let projects = &ctx.content.projects;

    let expanded_index = match args.expand.as_deref() {
        Some(selector) => Some(resolve_selector(projects, selector)?),
        None => None,
    };

    if ctx.format == OutputFormat::Json {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "count": projects.len(),
            "projects": projects,
        }));
    }

    if projects.is_empty() {
        if ctx.format == OutputFormat::Human {
            println!("{}", "No projects found".dimmed());
            println!();
            println!("Add entries to {}", ctx.config.content.projects);
        }
        return Ok(());
    }

    let wrap_width = terminal_width();
    if ctx.format == OutputFormat::Human {
        println!("{}", "Projects".bold());
        println!();
    }

    let mut cards = projects.iter().enumerate().map(|(i, project)| {
        let expanded = args.expand_all || expanded_index == Some(i);
        ProjectCard {
            project,
            index: i + 1,
            expanded,
            wrap_width,
        }
        .format(ctx.format)
    });

    let separator = if ctx.format == OutputFormat::Human {
        "\n\n"
    } else {
        "\n"
    };
    println!("{}", cards.join(separator));

    if ctx.format == OutputFormat::Human && expanded_index.is_none() && !args.expand_all {
        println!();
        println!(
            "{}",
            "Expand one with: folio projects --expand <number>".dimmed()
        );
    }

    Ok(())
}

/// Resolve `--expand` input to a 0-based index: a 1-based number when it
/// parses, otherwise the first case-insensitive title substring match.
fn resolve_selector(projects: &[ProjectRecord], selector: &str) -> Result<usize> {
    if let Ok(number) = selector.parse::<usize>() {
        return number
            .checked_sub(1)
            .filter(|i| *i < projects.len())
            .ok_or_else(|| {
                FolioError::ProjectNotFound(format!(
                    "project {number} does not exist (have {})",
                    projects.len()
                ))
            });
    }

    let needle = selector.to_lowercase();
    projects
        .iter()
        .position(|p| p.title.to_lowercase().contains(&needle))
        .ok_or_else(|| FolioError::ProjectNotFound(format!("no project title matches {selector:?}")))
}
