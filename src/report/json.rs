use crate::types::analysis::{AnalysisResult, CategoryAggregate, NamedMap, QualityMetrics};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// The machine-readable export. Field names are a compatibility contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord<'a> {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub grade: &'a str,
    pub found: &'a [String],
    pub missing: &'a [String],
    pub suggestions: &'a [String],
    pub categories: &'a NamedMap<CategoryAggregate>,
    pub quality_metrics: &'a QualityMetrics,
    pub timestamp: String,
}

impl<'a> ExportRecord<'a> {
    pub fn new(analysis: &'a AnalysisResult, timestamp: String) -> Self {
        Self {
            score: analysis.score,
            max_score: analysis.max_score,
            percentage: analysis.percentage,
            grade: &analysis.grade,
            found: &analysis.found,
            missing: &analysis.missing,
            suggestions: &analysis.suggestions,
            categories: &analysis.categories,
            quality_metrics: &analysis.quality_metrics,
            timestamp,
        }
    }
}

pub fn to_json(analysis: &AnalysisResult) -> Result<String, serde_json::Error> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    serde_json::to_string_pretty(&ExportRecord::new(analysis, timestamp))
}
