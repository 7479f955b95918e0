use super::SuggestionEnhancer;
use crate::error::EnhancerError;
use crate::metrics::{word_count, CODE_FENCE};
use crate::rubric::table::{
    ADVANCED, COMMUNITY, ESSENTIAL, QUALITY, TITLE_DESCRIPTION, USAGE, USAGE_EXAMPLES, VISUAL,
    VISUAL_DEMOS,
};
use crate::types::analysis::{AnalysisResult, CategoryAggregate};

pub const MAX_LOCAL_SUGGESTIONS: usize = 8;
const WEAK_CATEGORY_COUNT: usize = 2;
const WEAK_CATEGORY_PERCENT: f64 = 70.0;
const BRIEF_WORD_COUNT: usize = 300;

/// Deterministic suggestions built from the analysis alone. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEnhancer;

impl SuggestionEnhancer for LocalEnhancer {
    fn name(&self) -> &'static str {
        "local"
    }

    fn enhance(
        &self,
        analysis: &AnalysisResult,
        content: &str,
    ) -> Result<Vec<String>, EnhancerError> {
        Ok(local_suggestions(analysis, content))
    }
}

pub fn local_suggestions(analysis: &AnalysisResult, content: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let lowered = content.to_lowercase();
    let has_code_blocks = content.contains(CODE_FENCE);
    let has_images = content.contains("![");

    for (name, category) in analysis
        .weakest_categories()
        .into_iter()
        .take(WEAK_CATEGORY_COUNT)
    {
        out.extend(category_advice(name, category, analysis));
    }

    if word_count(content) < BRIEF_WORD_COUNT {
        out.push("📝 Your README appears quite brief. Consider expanding with more detailed explanations, use cases, and background information to help users understand the full value of your project.".to_string());
    }

    if !has_code_blocks && analysis.detail_score(USAGE_EXAMPLES) == Some(0.0) {
        out.push("💻 Add formatted code blocks with syntax highlighting using ``` to make examples more readable and professional.".to_string());
    }

    if !has_images && analysis.detail_score(VISUAL_DEMOS) == Some(0.0) {
        out.push("🖼️ Visual content significantly improves engagement. Consider adding screenshots showing your project in action, workflow diagrams, or architecture overviews.".to_string());
    }

    if analysis.percentage < 60.0 {
        out.push("📚 Consider studying high-quality READMEs from popular projects in your domain for inspiration on structure and content depth.".to_string());
    }

    let metrics = &analysis.quality_metrics;
    if metrics.readability < 0.6 {
        out.push("📖 Improve readability by using clear headings, bullet points, and shorter paragraphs. Consider adding a table of contents for longer READMEs.".to_string());
    }
    if metrics.professionalism < 0.7 {
        out.push("💼 Enhance professionalism by adding status badges, consistent formatting, proper grammar, and a clear project structure.".to_string());
    }
    if metrics.accessibility < 0.6 {
        out.push("♿ Improve accessibility by adding descriptive alt text for images, using clear link text, and maintaining good heading hierarchy.".to_string());
    }

    if (lowered.contains("node") || lowered.contains("npm")) && !content.contains("npm install") {
        out.push("📦 For Node.js projects, include clear npm installation commands and specify Node.js version requirements.".to_string());
    }
    if (lowered.contains("python") || lowered.contains("pip")) && !content.contains("pip install") {
        out.push("🐍 For Python projects, include pip installation commands and Python version compatibility information.".to_string());
    }

    if analysis.grade == "F" || analysis.percentage < 40.0 {
        out.push("🔧 Consider using a README template or generator to establish a solid foundation, then customize for your specific project needs.".to_string());
    }

    out.truncate(MAX_LOCAL_SUGGESTIONS);
    out
}

fn category_advice(
    name: &str,
    category: &CategoryAggregate,
    analysis: &AnalysisResult,
) -> Vec<String> {
    let mut advice = Vec::new();
    if category.percentage >= WEAK_CATEGORY_PERCENT {
        return advice;
    }

    match name {
        ESSENTIAL => {
            advice.push("📋 Essential Documentation needs attention: Ensure you have a compelling project title, clear description, and comprehensive installation instructions. These are the first things users see and critical for adoption.".to_string());
            if analysis
                .detail_score(TITLE_DESCRIPTION)
                .is_some_and(|score| score < 10.0)
            {
                advice.push("🎯 Craft a compelling one-liner that immediately communicates what your project does and why someone should care. Follow with a paragraph explaining the problem it solves.".to_string());
            }
        }
        USAGE => advice.push("💻 Usage & Examples need improvement: Add multiple code examples showing common use cases, from basic to advanced scenarios. Include expected outputs and real-world applications.".to_string()),
        VISUAL => advice.push("🖼️ Visual demonstrations are missing: Add screenshots of your application, GIFs showing workflows, or links to live demos. Visual content increases user engagement by 80%.".to_string()),
        QUALITY => advice.push("⭐ Project Quality indicators need work: Add status badges (build, coverage, version), document your testing approach, and include changelog information to build user confidence.".to_string()),
        COMMUNITY => advice.push("👥 Community & Legal aspects need attention: Add contributing guidelines, specify your license clearly, and provide contact information to encourage community participation.".to_string()),
        // only worth raising once the basics are in place
        ADVANCED if analysis.percentage > 70.0 => advice.push("🚀 Advanced Features documentation is missing: Consider adding configuration options, troubleshooting guides, performance information, and security considerations for power users.".to_string()),
        _ => {}
    }
    advice
}
