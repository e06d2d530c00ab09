//! folio init - Scaffold a new portfolio in the current directory

use std::fs;
use std::path::Path;

use clap::Args;
use colored::Colorize;

use crate::cli::output::{emit_json, OutputFormat};
use crate::error::{FolioError, Result};

const SAMPLE_CONFIG: &str = r#"[profile]
name = "Your Name"
tagline = "A passionate Data Scientist turning complex data into meaningful insights."
about = [
    "Hi! I'm a driven Data Scientist with a background in Software Engineering. My journey into data began with a love for solving complex problems and a curiosity for how data shapes the world around us.",
    "I'm always learning, experimenting, and building. My goal is to use data to create real-world impact and continuously grow as a data professional.",
]
resume = "resume.pdf"

[content]
skills = "data/skills.json"
projects = "data/projects.json"

[display]
category_order = [
    "Programming Languages",
    "Machine Learning & AI",
    "Data Analysis & Visualization",
    "Databases",
    "Cloud & Tools",
]
soft_skills = [
    "Leadership",
    "Communication",
    "Collaboration",
    "Problem Solving",
    "Continuous Learning",
    "Adaptability",
]
meter_width = 40

[[contact.links]]
label = "Email"
target = "mailto:your-email@example.com"

[[contact.links]]
label = "LinkedIn"
target = "https://www.linkedin.com/in/your-linkedin"

[[contact.links]]
label = "GitHub"
target = "https://github.com/your-github"

[[contact.links]]
label = "Phone"
target = "tel:+1234567890"
"#;

const SAMPLE_SKILLS: &str = r#"[
  { "name": "Python", "category": "Programming Languages", "level": "Advanced", "percent": 90 },
  { "name": "SQL", "category": "Programming Languages", "level": "Advanced", "percent": 85 },
  { "name": "Pandas", "category": "Data Analysis & Visualization", "level": "Advanced", "percent": 88 },
  { "name": "Tableau", "category": "Data Analysis & Visualization", "level": "Intermediate", "percent": 75 },
  { "name": "Scikit-learn", "category": "Machine Learning & AI", "level": "Advanced", "percent": 80 },
  { "name": "MySQL", "category": "Databases", "level": "Advanced", "percent": 80 },
  { "name": "Oracle", "category": "Databases", "level": "Intermediate", "percent": 60 },
  { "name": "Git", "category": "Cloud & Tools", "level": "Advanced", "percent": 85 }
]
"#;

const SAMPLE_PROJECTS: &str = r#"[
  {
    "title": "Customer Churn Model",
    "tech": ["Python", "Scikit-learn", "Pandas"],
    "description": "End-to-end churn prediction: feature engineering on customer activity, model selection, and a weekly scoring job feeding the retention team.",
    "links": [
      { "label": "GitHub", "url": "https://github.com/your-github/churn-model" }
    ]
  },
  {
    "title": "Sales Dashboard",
    "tech": ["Tableau", "SQL"],
    "description": "Interactive regional sales dashboard with drill-down by product line, refreshed nightly from the warehouse.",
    "links": [
      { "label": "Demo", "url": "https://example.com/sales-dashboard" }
    ]
  }
]
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long, short)]
    pub force: bool,
}

/// Runs before the AppContext exists: init must work in a directory that
/// has no config yet.
pub fn run_without_context(format: OutputFormat, args: &InitArgs) -> Result<()> {
    let root = std::env::current_dir()?;
    let config_path = root.join("folio.toml");

    if config_path.exists() && !args.force {
        if format.is_machine_readable() {
            return emit_json(&serde_json::json!({
                "status": "error",
                "message": "Already initialized",
                "path": config_path.display().to_string(),
            }));
        }
        println!(
            "{} Already initialized at {}",
            "!".yellow(),
            config_path.display()
        );
        println!("  Use --force to reinitialize");
        return Ok(());
    }

    let created = scaffold(&root, args.force)?;

    if format.is_machine_readable() {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "created": created,
        }));
    }

    for path in &created {
        println!("{} Wrote {path}", "✓".green());
    }
    println!();
    println!("Preview your portfolio with: {}", "folio home".bold());

    Ok(())
}

fn scaffold(root: &Path, force: bool) -> Result<Vec<String>> {
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir)?;

    let files = [
        (root.join("folio.toml"), SAMPLE_CONFIG),
        (data_dir.join("skills.json"), SAMPLE_SKILLS),
        (data_dir.join("projects.json"), SAMPLE_PROJECTS),
    ];

    let mut created = Vec::new();
    for (path, body) in files {
        if path.exists() && !force {
            return Err(FolioError::ValidationFailed(format!(
                "{} already exists (use --force)",
                path.display()
            )));
        }
        fs::write(&path, body)?;
        let display = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .display()
            .to_string();
        created.push(display);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_writes_all_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let created = scaffold(dir.path(), false).unwrap();
        assert_eq!(created.len(), 3);
        assert!(dir.path().join("folio.toml").exists());
        assert!(dir.path().join("data/skills.json").exists());
        assert!(dir.path().join("data/projects.json").exists());
    }

    #[test]
    fn sample_config_parses() {
        let parsed: crate::config::Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(parsed.display.meter_width, 40);
        assert_eq!(parsed.contact.links.len(), 4);
    }

    #[test]
    fn sample_content_parses_as_arrays() {
        let skills: serde_json::Value = serde_json::from_str(SAMPLE_SKILLS).unwrap();
        assert!(skills.as_array().is_some());
        let projects: serde_json::Value = serde_json::from_str(SAMPLE_PROJECTS).unwrap();
        assert!(projects.as_array().is_some());
    }

    #[test]
    fn scaffold_refuses_to_clobber_without_force() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), false).unwrap();
        assert!(scaffold(dir.path(), false).is_err());
        assert!(scaffold(dir.path(), true).is_ok());
    }
}
