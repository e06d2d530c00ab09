use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            content: ContentConfig::default(),
            display: DisplayConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration in layers: defaults, then the global file, then
    /// the project file, then `FOLIO_*` environment overrides.
    /// An explicit path (flag or `FOLIO_CONFIG`) replaces the file layers.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            } else {
                return Err(FolioError::MissingConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(base) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&base.join("folio/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join("folio.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FolioError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.profile {
            self.profile.merge(patch);
        }
        if let Some(patch) = patch.content {
            self.content.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
        if let Some(patch) = patch.contact {
            self.contact.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("FOLIO_SKILLS") {
            self.content.skills = value;
        }
        if let Some(value) = env_string("FOLIO_PROJECTS") {
            self.content.projects = value;
        }
        if let Some(values) = env_list("FOLIO_CATEGORY_ORDER") {
            self.display.category_order = values;
        }
        if let Some(value) = env_usize("FOLIO_METER_WIDTH") {
            self.display.meter_width = value;
        }
    }
}

/// The portfolio owner's identity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub tagline: String,
    /// About paragraphs, rendered in order.
    pub about: Vec<String>,
    /// Path to a downloadable resume, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            tagline: "A short line about what you do.".to_string(),
            about: Vec::new(),
            resume: None,
        }
    }
}

impl ProfileConfig {
    fn merge(&mut self, patch: ProfileConfigPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(tagline) = patch.tagline {
            self.tagline = tagline;
        }
        if let Some(about) = patch.about {
            self.about = about;
        }
        if let Some(resume) = patch.resume {
            self.resume = Some(resume);
        }
    }
}

/// Where the content files live, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub skills: String,
    pub projects: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            skills: "data/skills.json".to_string(),
            projects: "data/projects.json".to_string(),
        }
    }
}

impl ContentConfig {
    fn merge(&mut self, patch: ContentConfigPatch) {
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
    }
}

/// Presentation knobs, including the grouped view's category allow-list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Categories shown by the grouped skills view, in display order.
    /// Categories in the data but not listed here are not shown.
    pub category_order: Vec<String>,
    /// Unmeasured skills rendered as a plain list after the meters.
    pub soft_skills: Vec<String>,
    /// Width of a proficiency meter, in cells.
    pub meter_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            category_order: vec![
                "Programming Languages".to_string(),
                "Machine Learning & AI".to_string(),
                "Data Analysis & Visualization".to_string(),
                "Databases".to_string(),
                "Cloud & Tools".to_string(),
            ],
            soft_skills: Vec::new(),
            meter_width: 40,
        }
    }
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayConfigPatch) {
        if let Some(order) = patch.category_order {
            self.category_order = order;
        }
        if let Some(soft) = patch.soft_skills {
            self.soft_skills = soft;
        }
        if let Some(width) = patch.meter_width {
            self.meter_width = width;
        }
    }
}

/// Static contact links, rendered as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactLink {
    pub label: String,
    /// A mailto:, https:, or tel: target.
    pub target: String,
}

impl ContactConfig {
    fn merge(&mut self, patch: ContactConfigPatch) {
        if let Some(links) = patch.links {
            self.links = links;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    profile: Option<ProfileConfigPatch>,
    content: Option<ContentConfigPatch>,
    display: Option<DisplayConfigPatch>,
    contact: Option<ContactConfigPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileConfigPatch {
    name: Option<String>,
    tagline: Option<String>,
    about: Option<Vec<String>>,
    resume: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentConfigPatch {
    skills: Option<String>,
    projects: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DisplayConfigPatch {
    category_order: Option<Vec<String>>,
    soft_skills: Option<Vec<String>>,
    meter_width: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ContactConfigPatch {
    links: Option<Vec<ContactLink>>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_list(key: &str) -> Option<Vec<String>> {
    env_string(key).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect()
    })
}

fn env_usize(key: &str) -> Option<usize> {
    env_string(key).and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.content.skills, "data/skills.json");
        assert_eq!(config.display.meter_width, 40);
        assert!(config.display.category_order.contains(&"Databases".to_string()));
        assert!(config.contact.links.is_empty());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut config = Config::default();
        let patch: ConfigPatch = toml::from_str(
            r#"
            [profile]
            name = "Pruthvi"

            [display]
            category_order = ["Databases"]
            "#,
        )
        .unwrap();
        config.merge_patch(patch);

        assert_eq!(config.profile.name, "Pruthvi");
        assert_eq!(config.display.category_order, vec!["Databases"]);
        // Untouched fields keep their defaults.
        assert_eq!(config.display.meter_width, 40);
        assert_eq!(config.content.projects, "data/projects.json");
    }

    #[test]
    fn full_project_file_parses() {
        let patch: ConfigPatch = toml::from_str(
            r#"
            [profile]
            name = "Pruthvi"
            tagline = "Data scientist"
            about = ["First paragraph.", "Second paragraph."]
            resume = "resume.pdf"

            [content]
            skills = "content/skills.json"
            projects = "content/projects.json"

            [display]
            category_order = ["Programming Languages", "Databases"]
            soft_skills = ["Leadership", "Communication"]
            meter_width = 30

            [[contact.links]]
            label = "Email"
            target = "mailto:your-email@example.com"
            "#,
        )
        .unwrap();
        let mut config = Config::default();
        config.merge_patch(patch);

        assert_eq!(config.profile.about.len(), 2);
        assert_eq!(config.profile.resume.as_deref(), Some("resume.pdf"));
        assert_eq!(config.content.skills, "content/skills.json");
        assert_eq!(config.display.meter_width, 30);
        assert_eq!(config.contact.links.len(), 1);
        assert_eq!(config.contact.links[0].label, "Email");
    }

    #[test]
    fn load_missing_project_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.profile.name, "Your Name");
    }

    #[test]
    fn load_explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn load_broken_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("folio.toml"), "not = [valid").unwrap();
        assert!(Config::load(None, dir.path()).is_err());
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = Config::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.display.category_order, config.display.category_order);
    }
}
