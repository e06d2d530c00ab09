//! Portfolio content - the skill and project records and their loader.
//!
//! Content lives in two JSON files named by the configuration. Both are
//! read once at startup into an immutable [`ContentStore`]; nothing in the
//! crate mutates them afterwards. Decoding is lenient: a missing file, a
//! non-array document, or a malformed entry degrades to an empty or
//! shortened collection with a debug log, never an error. The files are
//! the owner's own hand-maintained data, so a typo should cost one entry,
//! not the whole page.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;

/// One skill or credential entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillRecord {
    /// Display name, unique within its category by convention.
    pub name: String,
    /// Category label; `None` when missing or not a string in the source.
    /// Blank values survive loading and are filtered at grouping time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Human-readable proficiency label, e.g. "Advanced".
    pub level: String,
    /// Proficiency percent, clamped to 0-100. Drives the flat view only.
    pub percent: f64,
}

/// A labelled external link on a project.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// One project entry, passed through to presentation unchanged.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    /// Technologies used, in display order.
    pub tech: Vec<String>,
    pub description: String,
    pub links: Vec<ProjectLink>,
}

/// The loaded, immutable portfolio content.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub skills: Vec<SkillRecord>,
    pub projects: Vec<ProjectRecord>,
}

impl ContentStore {
    /// Load both content files named by the config, relative to `root`.
    #[must_use]
    pub fn load(config: &Config, root: &Path) -> Self {
        let skills_path = resolve(root, &config.content.skills);
        let projects_path = resolve(root, &config.content.projects);

        let skills = read_array(&skills_path)
            .iter()
            .filter_map(decode_skill)
            .collect();
        let projects = read_array(&projects_path)
            .iter()
            .filter_map(decode_project)
            .collect();

        Self { skills, projects }
    }

    /// Find a project by 1-based index or case-insensitive title substring.
    #[must_use]
    pub fn find_project(&self, selector: &str) -> Option<&ProjectRecord> {
        if let Ok(index) = selector.parse::<usize>() {
            return index.checked_sub(1).and_then(|i| self.projects.get(i));
        }
        let needle = selector.to_lowercase();
        self.projects
            .iter()
            .find(|p| p.title.to_lowercase().contains(&needle))
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}

/// Read a JSON file and return its top-level array, or empty when the file
/// is absent, unreadable, or not an array.
fn read_array(path: &Path) -> Vec<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            debug!(path = %path.display(), %err, "content file not readable, using empty list");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            debug!(path = %path.display(), "content file is not a JSON array, using empty list");
            Vec::new()
        }
        Err(err) => {
            debug!(path = %path.display(), %err, "content file is not valid JSON, using empty list");
            Vec::new()
        }
    }
}

/// Decode one skill entry. Entries that are not objects or lack a string
/// `name` are dropped; every other field degrades to a default.
fn decode_skill(value: &Value) -> Option<SkillRecord> {
    let Some(object) = value.as_object() else {
        debug!("skipping non-object skill entry");
        return None;
    };
    let Some(name) = object.get("name").and_then(Value::as_str) else {
        debug!("skipping skill entry without a string name");
        return None;
    };

    // Non-string categories read as absent; grouping drops them later.
    let category = object
        .get("category")
        .and_then(Value::as_str)
        .map(String::from);
    let level = object
        .get("level")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let percent = object
        .get("percent")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);

    Some(SkillRecord {
        name: name.to_string(),
        category,
        level,
        percent,
    })
}

/// Decode one project entry. Requires a string `title`; list fields keep
/// only their well-formed elements.
fn decode_project(value: &Value) -> Option<ProjectRecord> {
    let Some(object) = value.as_object() else {
        debug!("skipping non-object project entry");
        return None;
    };
    let Some(title) = object.get("title").and_then(Value::as_str) else {
        debug!("skipping project entry without a string title");
        return None;
    };

    let tech = object
        .get("tech")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();
    let description = object
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let links = object
        .get("links")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(decode_link).collect())
        .unwrap_or_default();

    Some(ProjectRecord {
        title: title.to_string(),
        tech,
        description,
        links,
    })
}

fn decode_link(value: &Value) -> Option<ProjectLink> {
    let object = value.as_object()?;
    let label = object.get("label").and_then(Value::as_str)?;
    let url = object.get("url").and_then(Value::as_str)?;
    Some(ProjectLink {
        label: label.to_string(),
        url: url.to_string(),
    })
}
