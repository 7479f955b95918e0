use crate::types::analysis::AnalysisResult;

const CONTENT_PREVIEW_CHARS: usize = 2000;
const WEAKEST_IN_PROMPT: usize = 3;
const MISSING_IN_PROMPT: usize = 5;

pub fn build_prompt(analysis: &AnalysisResult, content: &str) -> String {
    let weakest = analysis
        .weakest_categories()
        .into_iter()
        .take(WEAKEST_IN_PROMPT)
        .map(|(name, agg)| format!("{name}: {:.1}%", agg.percentage))
        .collect::<Vec<_>>()
        .join(", ");
    let missing = analysis
        .missing
        .iter()
        .take(MISSING_IN_PROMPT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a CLI tool providing brief, actionable README improvement suggestions. Analyze this README and provide 5-7 concise suggestions.

ANALYSIS CONTEXT:
Score: {score:.1}/{max:.1} ({percentage:.1}%)
Grade: {grade}
Weakest areas: {weakest}
Missing: {missing}

README CONTENT:
{preview}

REQUIREMENTS:
- Provide 5-7 brief, specific suggestions (1-2 sentences each)
- Focus on the weakest categories and missing sections
- Use simple emojis (like 📖 💻 🚀) but NO markdown formatting
- Be direct and actionable
- Each suggestion should be 50-150 characters

Example format:
🚀 Add installation instructions with npm/yarn commands
📖 Include code examples showing basic usage
🔧 Add troubleshooting section for common issues

Respond with numbered suggestions only, no headers or explanations:",
        score = analysis.score,
        max = analysis.max_score,
        percentage = analysis.percentage,
        grade = analysis.grade,
        preview = content_preview(content),
    )
}

/// First 2000 characters, with `...` appended when the text was cut.
pub fn content_preview(content: &str) -> String {
    match content.char_indices().nth(CONTENT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
