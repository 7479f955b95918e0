use super::CODE_FENCE;
use crate::rubric::table::{CONTRIBUTING, LICENSE};
use crate::types::analysis::AnalysisResult;
use once_cell::sync::Lazy;
use regex::Regex;

static BADGE_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[.*\]\(https://.*badge").expect("badge regex is valid"));

pub fn professionalism_score(content: &str, result: &AnalysisResult) -> f64 {
    let mut score: f64 = 0.0;
    if BADGE_IMAGE.is_match(content) {
        score += 0.3;
    }
    if content.contains(CODE_FENCE) {
        score += 0.2;
    }
    if result.is_found(LICENSE) {
        score += 0.2;
    }
    if result.is_found(CONTRIBUTING) {
        score += 0.3;
    }
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::Rubric;

    #[test]
    fn badges_code_license_and_contributing_all_count() {
        let content = "# Tool\n![build](https://img.shields.io/badge/build-passing-green)\n```\nrun\n```\n## Contributing\nPull requests welcome.\n## License\nMIT";
        let result = Rubric::standard().expect("rubric").analyze(content);
        assert!((result.quality_metrics.professionalism - 1.0).abs() < 1e-9);
    }

    #[test]
    fn badge_host_must_be_https() {
        assert!(!BADGE_IMAGE.is_match("![b](http://example.com/badge.svg)"));
        assert!(BADGE_IMAGE.is_match("![b](https://example.com/badge.svg)"));
    }
}
