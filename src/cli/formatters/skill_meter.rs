//! Skill meter formatter - proficiency bars for the skills views

use console::style;
use itertools::Itertools;

use crate::cli::output::{Formattable, OutputFormat};
use crate::content::SkillRecord;

/// A flat list of skills rendered as proficiency meters.
#[derive(Debug, Clone)]
pub struct SkillMeterList<'a> {
    pub skills: &'a [SkillRecord],
    /// Meter width in cells.
    pub width: usize,
}

/// The grouped view: ordered (category, skills) sections.
#[derive(Debug, Clone)]
pub struct GroupedSkillsView<'a> {
    pub sections: &'a [(String, Vec<SkillRecord>)],
    pub width: usize,
}

/// Render the bar itself: filled cells proportional to percent.
fn meter_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    let colored = if percent >= 80.0 {
        style(bar).green()
    } else if percent >= 50.0 {
        style(bar).yellow()
    } else {
        style(bar).red()
    };
    colored.to_string()
}

/// Two-line human rendering of one skill: name/level header, then meter.
fn meter_lines(skill: &SkillRecord, width: usize) -> [String; 2] {
    let name = style(&skill.name).bold().to_string();
    let header = if skill.level.is_empty() {
        name
    } else {
        let pad = width.saturating_sub(skill.name.chars().count());
        format!("{name}{:pad$} {}", "", style(&skill.level).dim())
    };
    let bar = format!("{} {:>3.0}%", meter_bar(skill.percent, width), skill.percent);
    [header, bar]
}

fn format_human(skills: &[SkillRecord], width: usize) -> String {
    skills
        .iter()
        .flat_map(|skill| {
            let [header, bar] = meter_lines(skill, width);
            [header, bar, String::new()]
        })
        .join("\n")
}

fn format_plain(skills: &[SkillRecord]) -> String {
    skills
        .iter()
        .map(|s| format!("{} {} {:.0}%", s.name, s.level, s.percent))
        .join("\n")
}

fn format_tsv(skills: &[SkillRecord]) -> String {
    skills
        .iter()
        .map(|s| {
            format!(
                "{}\t{}\t{}\t{:.0}",
                s.name,
                s.category.as_deref().unwrap_or("-"),
                s.level,
                s.percent
            )
        })
        .join("\n")
}

impl Formattable for SkillMeterList<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => format_human(self.skills, self.width),
            OutputFormat::Json => serde_json::to_string_pretty(self.skills).unwrap_or_default(),
            OutputFormat::Jsonl => self
                .skills
                .iter()
                .map(|s| serde_json::to_string(s).unwrap_or_default())
                .join("\n"),
            OutputFormat::Plain => format_plain(self.skills),
            OutputFormat::Tsv => format_tsv(self.skills),
        }
    }
}

impl Formattable for GroupedSkillsView<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self
                .sections
                .iter()
                .map(|(category, skills)| {
                    format!(
                        "{}\n{}\n{}",
                        style(category).bold(),
                        "-".repeat(category.len().max(3)),
                        format_human(skills, self.width)
                    )
                })
                .join("\n"),
            OutputFormat::Json => {
                let sections: Vec<serde_json::Value> = self
                    .sections
                    .iter()
                    .map(|(category, skills)| {
                        serde_json::json!({ "category": category, "skills": skills })
                    })
                    .collect();
                serde_json::to_string_pretty(&sections).unwrap_or_default()
            }
            OutputFormat::Jsonl => self
                .sections
                .iter()
                .map(|(category, skills)| {
                    serde_json::json!({ "category": category, "skills": skills }).to_string()
                })
                .join("\n"),
            OutputFormat::Plain => self
                .sections
                .iter()
                .map(|(category, skills)| format!("{category}:\n{}", format_plain(skills)))
                .join("\n\n"),
            OutputFormat::Tsv => self
                .sections
                .iter()
                .flat_map(|(_, skills)| skills)
                .map(|s| {
                    format!(
                        "{}\t{}\t{}\t{:.0}",
                        s.category.as_deref().unwrap_or("-"),
                        s.name,
                        s.level,
                        s.percent
                    )
                })
                .join("\n"),
        }
    }
}
