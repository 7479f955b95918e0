pub mod json;
pub mod text;

use crate::error::RankerError;
use crate::types::analysis::AnalysisResult;
use crate::types::config::OutputFormat;

pub fn render(
    analysis: &AnalysisResult,
    source: &str,
    format: OutputFormat,
) -> Result<String, RankerError> {
    match format {
        OutputFormat::Json => json::to_json(analysis).map_err(RankerError::Json),
        OutputFormat::Text => Ok(text::to_text(analysis, source)),
    }
}
