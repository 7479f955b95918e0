#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FULL_README: &str = r#"# Widget

Widget is a small library for rendering dashboards from JSON data.

## Installation

```bash
npm install widget
```

## Usage

```js
const widget = require('widget');
widget.render({ title: 'Sales' });
```

## Contributing

Pull requests are welcome. Please open an issue first.

## License

MIT
"#;

/// Binary isolated from the developer's home config and API key.
fn ranker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readme-ranker").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn repo_with_readme(content: &str) -> TempDir {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("README.md"), content).expect("README should write");
    dir
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    ranker(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("readme-ranker"));
}

#[test]
fn cli_help_lists_subcommands() {
    let dir = TempDir::new().expect("temp dir should be created");
    ranker(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn analyze_json_emits_export_record() {
    let dir = repo_with_readme(FULL_README);
    ranker(&dir)
        .args(["analyze", ".", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"maxScore\": 154.0"))
        .stdout(predicate::str::contains("\"timestamp\""))
        .stdout(predicate::str::contains("\"qualityMetrics\""));
}

#[test]
fn analyze_text_report_by_default() {
    let dir = repo_with_readme("# Hi");
    ranker(&dir)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade: F"))
        .stdout(predicate::str::contains("## Category Breakdown"));
}

#[test]
fn analyze_accepts_absolute_path() {
    let dir = repo_with_readme(FULL_README);
    let elsewhere = TempDir::new().expect("temp dir should be created");
    ranker(&elsewhere)
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"grade\""));
}

#[test]
fn analyze_scores_non_utf8_readme() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("README.md"),
        b"# Caf\xE9\n\n## Installation\nnpm install cafe\n",
    )
    .expect("README should write");
    ranker(&dir)
        .args(["analyze", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"grade\""));
}

#[test]
fn analyze_missing_readme_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    ranker(&dir)
        .arg("analyze")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("README not found"));
}

#[test]
fn analyze_fail_under_exits_with_threshold_code() {
    let dir = repo_with_readme("# Hi");
    ranker(&dir)
        .args(["analyze", "--fail-under", "99"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("below the required"));
}

#[test]
fn analyze_fail_under_zero_passes() {
    let dir = repo_with_readme("# Hi");
    ranker(&dir)
        .args(["analyze", "--fail-under", "0"])
        .assert()
        .success();
}

#[test]
fn analyze_ai_without_key_falls_back_to_local_suggestions() {
    let dir = repo_with_readme(FULL_README);
    ranker(&dir)
        .args(["analyze", "--ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Prioritized Suggestions"));
}

#[test]
fn analyze_ai_with_local_provider_from_config() {
    let dir = repo_with_readme(FULL_README);
    let config = dir.path().join("ci.toml");
    fs::write(&config, "[ai]\nenabled = true\nprovider = \"local\"\n")
        .expect("config should write");
    ranker(&dir)
        .arg("--config")
        .arg(&config)
        .args(["analyze", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"suggestions\""));
}

#[test]
fn missing_explicit_config_is_runtime_failure() {
    let dir = repo_with_readme(FULL_README);
    ranker(&dir)
        .args(["--config", "nope.toml", "analyze"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn validate_reports_issues_with_warning_code() {
    let dir = repo_with_readme("# Hi");
    ranker(&dir)
        .args(["validate", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("README is too short"))
        .stdout(predicate::str::contains("No section headings found"));
}

#[test]
fn validate_passes_well_formed_readme() {
    let dir = repo_with_readme(FULL_README);
    ranker(&dir)
        .args(["validate", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("looks good"));
}

#[test]
fn config_init_writes_once() {
    let dir = TempDir::new().expect("temp dir should be created");
    ranker(&dir).args(["config", "init"]).assert().success();

    let written =
        fs::read_to_string(dir.path().join(".readme-ranker.toml")).expect("config should exist");
    assert!(written.contains("Essential Documentation"));

    ranker(&dir)
        .args(["config", "init"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_show_reflects_project_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join(".readme-ranker.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .expect("config should write");
    ranker(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format = \"json\""));
}

#[test]
fn unknown_target_shape_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    ranker(&dir)
        .args(["analyze", "owner/repo/extra/parts"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid repository target"));
}
