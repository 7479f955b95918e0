use crate::rubric::table::CONTRIBUTING;
use crate::types::analysis::AnalysisResult;

pub fn maintainability_score(content: &str, result: &AnalysisResult) -> f64 {
    let lowered = content.to_lowercase();
    let mut score: f64 = 0.0;
    if lowered.contains("version") {
        score += 0.2;
    }
    if lowered.contains("changelog") {
        score += 0.3;
    }
    if result.is_found(CONTRIBUTING) {
        score += 0.3;
    }
    if lowered.contains("issue") {
        score += 0.2;
    }
    score.clamp(0.0, 1.0)
}
