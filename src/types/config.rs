use crate::error::RankerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RankerConfig {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    Local,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: Provider,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_provider(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_provider() -> Provider {
    Provider::Gemini
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub verbose: bool,
}

impl RankerConfig {
    /// Config with the built-in category weights spelled out, as written by
    /// `config init`.
    pub fn with_weights(weights: BTreeMap<String, f64>) -> Self {
        Self {
            scoring: ScoringConfig { weights },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RankerError> {
        for (category, weight) in &self.scoring.weights {
            if !(weight.is_finite() && *weight > 0.0) {
                return Err(RankerError::ConfigParse(format!(
                    "scoring weight for '{category}' must be positive, got {weight}"
                )));
            }
        }
        if self.ai.timeout_secs == 0 {
            return Err(RankerError::ConfigParse(
                "ai.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg: RankerConfig = toml::from_str("").expect("empty config should parse");
        assert!(!cfg.ai.enabled);
        assert_eq!(cfg.ai.provider, Provider::Gemini);
        assert_eq!(cfg.ai.model, DEFAULT_MODEL);
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert!(cfg.scoring.weights.is_empty());
    }

    #[test]
    fn validate_rejects_non_positive_weight() {
        let cfg: RankerConfig = toml::from_str(
            r#"
[scoring.weights]
"Visual & Demo" = 0.0
"#,
        )
        .expect("config should parse");

        let err = cfg.validate().expect_err("zero weight should be rejected");
        assert!(err.to_string().contains("Visual & Demo"));
    }

    #[test]
    fn unknown_provider_fails_to_parse() {
        let parsed: Result<RankerConfig, _> = toml::from_str(
            r#"
[ai]
provider = "openai"
"#,
        );
        assert!(parsed.is_err());
    }
}
