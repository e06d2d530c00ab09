use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A folio invocation isolated from the developer's own config and env.
fn folio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("FOLIO_CONFIG")
        .env_remove("FOLIO_SKILLS")
        .env_remove("FOLIO_PROJECTS")
        .env_remove("FOLIO_CATEGORY_ORDER")
        .env_remove("FOLIO_METER_WIDTH");
    cmd
}

/// Scaffolded portfolio directory.
fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    folio(&dir).arg("init").assert().success();
    dir
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is not valid JSON")
}

#[test]
fn init_scaffolds_portfolio() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio.toml"));

    assert!(dir.path().join("folio.toml").exists());
    assert!(dir.path().join("data/skills.json").exists());
    assert!(dir.path().join("data/projects.json").exists());
}

#[test]
fn init_twice_reports_already_initialized() {
    let dir = initialized();
    folio(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn init_force_rewrites() {
    let dir = initialized();
    std::fs::write(dir.path().join("data/skills.json"), "[]").unwrap();
    folio(&dir).args(["init", "--force"]).assert().success();
    let raw = std::fs::read_to_string(dir.path().join("data/skills.json")).unwrap();
    assert!(raw.contains("Python"));
}

#[test]
fn skills_machine_output_is_sorted_by_percent() {
    let dir = initialized();
    let output = folio(&dir).args(["-m", "skills"]).output().unwrap();
    assert!(output.status.success());

    let skills = stdout_json(&output.stdout);
    let skills = skills.as_array().expect("expected a JSON array");
    assert!(!skills.is_empty());
    assert_eq!(skills[0]["name"], "Python");

    let percents: Vec<f64> = skills
        .iter()
        .map(|s| s["percent"].as_f64().unwrap())
        .collect();
    assert!(percents.windows(2).all(|p| p[0] >= p[1]));
}

#[test]
fn skills_grouped_follows_category_order() {
    let dir = initialized();
    let output = folio(&dir)
        .args(["-O", "json", "skills", "--grouped"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let sections = stdout_json(&output.stdout);
    let sections = sections.as_array().expect("expected a JSON array");
    let categories: Vec<&str> = sections
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories[0], "Programming Languages");
    assert!(categories.contains(&"Databases"));

    // Within a category, members are sorted by name.
    let databases = sections
        .iter()
        .find(|s| s["category"] == "Databases")
        .unwrap();
    let names: Vec<&str> = databases["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn skills_grouped_drops_unlisted_categories() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("data/skills.json"),
        r#"[
            {"name": "Python", "category": "Programming Languages", "level": "Advanced", "percent": 90},
            {"name": "Surprise", "category": "Unlisted Category", "level": "Advanced", "percent": 99}
        ]"#,
    )
    .unwrap();

    let output = folio(&dir)
        .args(["-O", "json", "skills", "--grouped"])
        .output()
        .unwrap();
    let sections = stdout_json(&output.stdout);
    let categories: Vec<&str> = sections
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Programming Languages"]);
}

#[test]
fn skills_flat_keeps_uncategorized_entries() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("data/skills.json"),
        r#"[
            {"name": "Python", "category": "Programming Languages", "level": "Advanced", "percent": 90},
            {"name": "Bad", "category": "", "level": "", "percent": 50}
        ]"#,
    )
    .unwrap();

    let output = folio(&dir).args(["-m", "skills"]).output().unwrap();
    let skills = stdout_json(&output.stdout);
    assert_eq!(skills.as_array().unwrap().len(), 2);
}

#[test]
fn skills_tsv_has_four_columns() {
    let dir = initialized();
    let output = folio(&dir).args(["-O", "tsv", "skills"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    for line in stdout.lines().filter(|l| !l.is_empty()) {
        assert_eq!(line.split('\t').count(), 4, "bad TSV line: {line}");
    }
}

#[test]
fn skills_human_shows_meters_and_soft_skills() {
    let dir = initialized();
    folio(&dir)
        .arg("skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("█"))
        .stdout(predicate::str::contains("Soft Skills"))
        .stdout(predicate::str::contains("Leadership"));
}

#[test]
fn skills_empty_directory_shows_empty_state() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .arg("skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("No skills found"));
}

#[test]
fn plain_output_has_no_ansi_escapes() {
    let dir = initialized();
    let output = folio(&dir).args(["--plain", "skills"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn projects_human_collapsed_by_default() {
    let dir = initialized();
    folio(&dir)
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Churn Model"))
        .stdout(predicate::str::contains("▾"))
        .stdout(predicate::str::contains("github.com").not());
}

#[test]
fn projects_expand_by_number_shows_details() {
    let dir = initialized();
    folio(&dir)
        .args(["projects", "--expand", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("churn"))
        .stdout(predicate::str::contains("github.com"));
}

#[test]
fn projects_expand_by_title_substring() {
    let dir = initialized();
    folio(&dir)
        .args(["projects", "--expand", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com/sales-dashboard"));
}

#[test]
fn projects_expand_unknown_selector_fails() {
    let dir = initialized();
    folio(&dir)
        .args(["projects", "--expand", "no-such-project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found"));
}

#[test]
fn projects_machine_output_lists_all() {
    let dir = initialized();
    let output = folio(&dir).args(["-m", "projects"]).output().unwrap();
    let parsed = stdout_json(&output.stdout);
    assert_eq!(parsed["status"], "ok");
    assert_eq!(
        parsed["count"].as_u64().unwrap() as usize,
        parsed["projects"].as_array().unwrap().len()
    );
}

#[test]
fn home_renders_every_section() {
    let dir = initialized();
    folio(&dir)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, I'm"))
        .stdout(predicate::str::contains("About Me"))
        .stdout(predicate::str::contains("Skills"))
        .stdout(predicate::str::contains("Projects"))
        .stdout(predicate::str::contains("Contact"));
}

#[test]
fn home_machine_output_bundles_the_page() {
    let dir = initialized();
    let output = folio(&dir).args(["-m", "home"]).output().unwrap();
    let parsed = stdout_json(&output.stdout);
    assert_eq!(parsed["status"], "ok");
    assert!(parsed["profile"]["name"].is_string());
    assert!(parsed["skills"].is_array());
    assert!(parsed["projects"].is_array());
    assert!(parsed["contact"].is_array());
}

#[test]
fn about_shows_paragraphs_and_resume() {
    let dir = initialized();
    folio(&dir)
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("About Me"))
        .stdout(predicate::str::contains("Resume:"));
}

#[test]
fn contact_machine_output_has_all_links() {
    let dir = initialized();
    let output = folio(&dir).args(["-m", "contact"]).output().unwrap();
    let parsed = stdout_json(&output.stdout);
    assert_eq!(parsed["count"], 4);
    assert_eq!(parsed["links"][0]["label"], "Email");
}

#[test]
fn blog_is_a_placeholder() {
    let dir = initialized();
    folio(&dir)
        .arg("blog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coming soon"));
}

#[test]
fn broken_config_is_a_hard_error() {
    let dir = initialized();
    std::fs::write(dir.path().join("folio.toml"), "not = [valid").unwrap();
    folio(&dir)
        .arg("skills")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn broken_content_is_not_an_error() {
    let dir = initialized();
    std::fs::write(dir.path().join("data/skills.json"), "{{{ nope").unwrap();
    folio(&dir)
        .arg("skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("No skills found"));
}

#[test]
fn env_override_points_at_other_content() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("alt.json"),
        r#"[{"name": "Rust", "category": "Programming Languages", "level": "Learning", "percent": 40}]"#,
    )
    .unwrap();

    let output = folio(&dir)
        .env("FOLIO_SKILLS", "alt.json")
        .args(["-m", "skills"])
        .output()
        .unwrap();
    let skills = stdout_json(&output.stdout);
    assert_eq!(skills.as_array().unwrap().len(), 1);
    assert_eq!(skills[0]["name"], "Rust");
}

#[test]
fn completions_emit_a_script() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}
