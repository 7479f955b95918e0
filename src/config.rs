use crate::error::{RankerError, Result};
use crate::rubric::table::CATEGORY_WEIGHTS;
use crate::types::config::RankerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = ".readme-ranker.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/readme-ranker/config.toml";

/// Merges the global file, the project file in `root`, then `explicit`.
/// Missing global/project files are skipped; a missing explicit file is an
/// error.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<RankerConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<RankerConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(RankerError::ConfigNotFound(path.display().to_string()));
        }
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: RankerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RankerError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RankerError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Default config with the built-in category weights written out, so editing
/// a weight starts from the value actually in use.
pub fn default_config() -> RankerConfig {
    RankerConfig::with_weights(
        CATEGORY_WEIGHTS
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect(),
    )
}

pub fn init_config(root: &Path) -> Result<PathBuf> {
    let path = root.join(DEFAULT_CONFIG_FILE);
    if path.exists() {
        return Err(RankerError::ConfigExists(path.display().to_string()));
    }
    std::fs::write(&path, render_config(&default_config())?)?;
    Ok(path)
}

pub fn render_config(cfg: &RankerConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::{OutputFormat, Provider};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(!cfg.ai.enabled);
        assert!(cfg.scoring.weights.is_empty());
    }

    #[test]
    fn load_config_merges_global_project_and_explicit_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        let explicit_path = root.path().join("ci.toml");

        fs::write(
            &global_path,
            r#"
[ai]
enabled = true
model = "global-model"

[scoring.weights]
"Visual & Demo" = 0.5
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[ai]
provider = "local"

[scoring.weights]
"Advanced Features" = 1.5
"#,
        )
        .expect("project config should write");

        fs::write(
            &explicit_path,
            r#"
[output]
format = "json"
"#,
        )
        .expect("explicit config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path), Some(&explicit_path))
            .expect("load should succeed");

        assert!(cfg.ai.enabled);
        assert_eq!(cfg.ai.model, "global-model");
        assert_eq!(cfg.ai.provider, Provider::Local);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.scoring.weights.get("Visual & Demo"), Some(&0.5));
        assert_eq!(cfg.scoring.weights.get("Advanced Features"), Some(&1.5));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_config_with_global(dir.path(), None, Some(&dir.path().join("nope.toml")))
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, RankerError::ConfigNotFound(_)));
    }

    #[test]
    fn malformed_project_config_reports_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[ai\nenabled = ")
            .expect("broken config should write");
        let err = load_config_with_global(dir.path(), None, None).expect_err("should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn init_writes_loadable_defaults_once() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = init_config(dir.path()).expect("init should succeed");
        assert!(path.exists());

        let cfg = load_config_with_global(dir.path(), None, None).expect("written config loads");
        let weights = &cfg.scoring.weights;
        assert_eq!(weights.get("Essential Documentation"), Some(&1.2));
        assert_eq!(weights.len(), CATEGORY_WEIGHTS.len());

        let err = init_config(dir.path()).expect_err("second init should fail");
        assert!(matches!(err, RankerError::ConfigExists(_)));
    }
}
