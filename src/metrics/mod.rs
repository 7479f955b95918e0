pub mod accessibility;
pub mod maintainability;
pub mod professionalism;
pub mod readability;

use crate::types::analysis::{AnalysisResult, QualityMetrics};
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s").expect("heading regex is valid"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

pub const CODE_FENCE: &str = "```";

pub fn quality_metrics(content: &str, result: &AnalysisResult) -> QualityMetrics {
    let lines: Vec<&str> = content.split('\n').collect();
    QualityMetrics {
        readability: readability::readability_score(content, &lines),
        completeness: completeness_score(result),
        professionalism: professionalism::professionalism_score(content, result),
        accessibility: accessibility::accessibility_score(content),
        maintainability: maintainability::maintainability_score(content, result),
    }
}

pub fn completeness_score(result: &AnalysisResult) -> f64 {
    result.percentage / 100.0
}

pub fn has_heading(content: &str) -> bool {
    HEADING_LINE.is_match(content)
}

/// Pieces between whitespace runs, counting empty leading and trailing
/// pieces, so `""` counts as one word.
pub fn word_count(content: &str) -> usize {
    WHITESPACE_RUN.split(content).count()
}
