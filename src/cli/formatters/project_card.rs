//! Project card formatter - collapsed and expanded project entries

use console::style;
use itertools::Itertools;

use crate::cli::output::{Formattable, OutputFormat};
use crate::content::ProjectRecord;

/// One project, rendered collapsed (title and tech row) or expanded
/// (description and links underneath).
#[derive(Debug, Clone)]
pub struct ProjectCard<'a> {
    pub project: &'a ProjectRecord,
    /// 1-based position in the list, shown to make `--expand N` usable.
    pub index: usize,
    pub expanded: bool,
    /// Wrap width for the description.
    pub wrap_width: usize,
}

impl ProjectCard<'_> {
    fn format_human(&self) -> String {
        let marker = if self.expanded { "▴" } else { "▾" };
        let tech = self.project.tech.iter().join(", ");
        let mut lines = vec![if tech.is_empty() {
            format!(
                "{}. {} {marker}",
                self.index,
                style(&self.project.title).bold()
            )
        } else {
            format!(
                "{}. {} {} {marker}",
                self.index,
                style(&self.project.title).bold(),
                style(&tech).dim()
            )
        }];

        if self.expanded {
            if !self.project.description.is_empty() {
                let wrapped = textwrap::fill(
                    &self.project.description,
                    self.wrap_width.saturating_sub(3).max(20),
                );
                for line in wrapped.lines() {
                    lines.push(format!("   {line}"));
                }
            }
            for link in &self.project.links {
                lines.push(format!(
                    "   {} {}",
                    style(format!("{}:", link.label)).cyan(),
                    link.url
                ));
            }
        }

        lines.join("\n")
    }

    fn format_plain(&self) -> String {
        let tech = self.project.tech.iter().join(", ");
        let mut out = if tech.is_empty() {
            self.project.title.clone()
        } else {
            format!("{} ({tech})", self.project.title)
        };
        if self.expanded {
            if !self.project.description.is_empty() {
                out.push('\n');
                out.push_str(&self.project.description);
            }
            for link in &self.project.links {
                out.push('\n');
                out.push_str(&format!("{}: {}", link.label, link.url));
            }
        }
        out
    }

    fn format_tsv(&self) -> String {
        let description = self
            .project
            .description
            .replace('\t', " ")
            .replace('\n', " ");
        let links = self
            .project
            .links
            .iter()
            .map(|l| format!("{}={}", l.label, l.url))
            .join(",");

        format!(
            "{}\t{}\t{}\t{}",
            self.project.title,
            self.project.tech.iter().join(","),
            description,
            links
        )
    }
}

impl Formattable for ProjectCard<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self.project).unwrap_or_default()
            }
            OutputFormat::Jsonl => serde_json::to_string(self.project).unwrap_or_default(),
            OutputFormat::Plain => self.format_plain(),
            OutputFormat::Tsv => self.format_tsv(),
        }
    }
}
