pub mod gemini;
pub mod local;
pub mod parse;
pub mod prompt;

use crate::error::EnhancerError;
use crate::types::analysis::AnalysisResult;
use crate::types::config::{AiConfig, Provider};
use gemini::GeminiEnhancer;
use local::LocalEnhancer;
use std::time::Duration;
use tracing::{info, warn};

/// A source of improvement suggestions for a finished analysis.
pub trait SuggestionEnhancer {
    fn name(&self) -> &'static str;

    fn enhance(
        &self,
        analysis: &AnalysisResult,
        content: &str,
    ) -> Result<Vec<String>, EnhancerError>;
}

/// Picks the backend for `ai`. Gemini without an API key degrades to the
/// local generator.
pub fn select_enhancer(ai: &AiConfig) -> Box<dyn SuggestionEnhancer> {
    match ai.provider {
        Provider::Local => Box::new(LocalEnhancer),
        Provider::Gemini => {
            let timeout = Duration::from_secs(ai.timeout_secs);
            match GeminiEnhancer::from_env(ai.model.clone(), timeout) {
                Ok(enhancer) => Box::new(enhancer),
                Err(err) => {
                    info!(reason = %err, "gemini unavailable, using local suggestions");
                    Box::new(LocalEnhancer)
                }
            }
        }
    }
}

/// Runs `enhancer`; any failure or empty result yields the local
/// suggestions instead.
pub fn enhance_suggestions(
    enhancer: &dyn SuggestionEnhancer,
    analysis: &AnalysisResult,
    content: &str,
) -> Vec<String> {
    match enhancer.enhance(analysis, content) {
        Ok(suggestions) if !suggestions.is_empty() => suggestions,
        Ok(_) => {
            warn!(
                enhancer = enhancer.name(),
                "enhancer returned no suggestions, using local fallback"
            );
            local::local_suggestions(analysis, content)
        }
        Err(err) => {
            warn!(
                enhancer = enhancer.name(),
                error = %err,
                "enhancer unavailable, using local fallback"
            );
            local::local_suggestions(analysis, content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::Rubric;

    struct FailingEnhancer;

    impl SuggestionEnhancer for FailingEnhancer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn enhance(&self, _: &AnalysisResult, _: &str) -> Result<Vec<String>, EnhancerError> {
            Err(EnhancerError::Status {
                status: 503,
                body: "overloaded".to_string(),
            })
        }
    }

    struct SilentEnhancer;

    impl SuggestionEnhancer for SilentEnhancer {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn enhance(&self, _: &AnalysisResult, _: &str) -> Result<Vec<String>, EnhancerError> {
            Ok(Vec::new())
        }
    }

    struct FixedEnhancer;

    impl SuggestionEnhancer for FixedEnhancer {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn enhance(&self, _: &AnalysisResult, _: &str) -> Result<Vec<String>, EnhancerError> {
            Ok(vec!["Add a quick start section".to_string()])
        }
    }

    const CONTENT: &str = "# Widget\nA small node library.\n";

    #[test]
    fn failing_enhancer_falls_back_to_local_list() {
        let analysis = Rubric::standard().expect("rubric").analyze(CONTENT);
        let expected = local::local_suggestions(&analysis, CONTENT);

        let first = enhance_suggestions(&FailingEnhancer, &analysis, CONTENT);
        let second = enhance_suggestions(&FailingEnhancer, &analysis, CONTENT);
        assert_eq!(first, expected);
        assert_eq!(first, second);
        assert!(first.len() <= local::MAX_LOCAL_SUGGESTIONS);
    }

    #[test]
    fn empty_enhancer_output_falls_back() {
        let analysis = Rubric::standard().expect("rubric").analyze(CONTENT);
        let suggestions = enhance_suggestions(&SilentEnhancer, &analysis, CONTENT);
        assert_eq!(suggestions, local::local_suggestions(&analysis, CONTENT));
    }

    #[test]
    fn fallback_only_replaces_suggestions() {
        let analysis = Rubric::standard().expect("rubric").analyze(CONTENT);
        let suggestions = enhance_suggestions(&FailingEnhancer, &analysis, CONTENT);
        let enhanced = analysis.clone().with_suggestions(suggestions.clone());

        assert_eq!(enhanced.suggestions, suggestions);
        assert_eq!(enhanced.score, analysis.score);
        assert_eq!(enhanced.found, analysis.found);
        assert_eq!(enhanced.categories, analysis.categories);
        assert_eq!(enhanced.quality_metrics, analysis.quality_metrics);
    }

    #[test]
    fn successful_enhancer_output_is_used() {
        let analysis = Rubric::standard().expect("rubric").analyze(CONTENT);
        let suggestions = enhance_suggestions(&FixedEnhancer, &analysis, CONTENT);
        assert_eq!(suggestions, vec!["Add a quick start section".to_string()]);
    }

    #[test]
    fn local_provider_selects_local_enhancer() {
        let ai = AiConfig {
            provider: Provider::Local,
            ..AiConfig::default()
        };
        assert_eq!(select_enhancer(&ai).name(), "local");
    }
}
