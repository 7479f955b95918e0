use crate::rubric::table::{INSTALLATION, TITLE_DESCRIPTION, USAGE_EXAMPLES};
use crate::types::analysis::{AnalysisResult, CategoryAggregate, CriterionResult};

const BAR_WIDTH: usize = 20;
const STRONG_RATIO: f64 = 0.8;
const ESSENTIAL_CRITERIA: [&str; 3] = [TITLE_DESCRIPTION, INSTALLATION, USAGE_EXAMPLES];

pub fn to_text(analysis: &AnalysisResult, source: &str) -> String {
    let mut output = String::new();
    output.push_str("README Ranker Analysis\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    if source != "local" {
        output.push_str(&format!("Repository: {source}\n"));
    }
    output.push_str(&format!(
        "Overall score: {:.1}/{:.1} ({:.1}%)\n",
        analysis.score, analysis.max_score, analysis.percentage
    ));
    output.push_str(&format!("Grade: {}\n\n", analysis.grade));

    push_metrics(&mut output, analysis);
    push_categories(&mut output, analysis);
    push_strong_areas(&mut output, analysis);
    push_improvements(&mut output, analysis);
    push_suggestions(&mut output, analysis);

    output.push_str("## Final Assessment\n\n");
    output.push_str(&interpretation(analysis));
    output.push_str("\n\n## Recommended Next Steps\n\n");
    for (index, step) in next_steps(analysis).iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", index + 1, step));
    }

    output
}

fn push_metrics(output: &mut String, analysis: &AnalysisResult) {
    let metrics = &analysis.quality_metrics;
    output.push_str("## Quality Metrics\n\n");
    for (label, value) in [
        ("Readability", metrics.readability),
        ("Completeness", metrics.completeness),
        ("Professionalism", metrics.professionalism),
        ("Accessibility", metrics.accessibility),
        ("Maintainability", metrics.maintainability),
    ] {
        output.push_str(&format!(
            "  {:<17}{} {:.1}%\n",
            format!("{label}:"),
            metric_bar(value),
            value * 100.0
        ));
    }
    output.push('\n');
}

pub fn metric_bar(value: f64) -> String {
    let filled = ((value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn push_categories(output: &mut String, analysis: &AnalysisResult) {
    output.push_str("## Category Breakdown\n\n");
    for (name, category) in analysis.categories.iter() {
        output.push_str(&format!(
            "  {name}: {:.1}/{:.1} ({:.1}%)\n",
            category.score, category.max_score, category.percentage
        ));
    }
    output.push('\n');
}

fn push_strong_areas(output: &mut String, analysis: &AnalysisResult) {
    output.push_str("## Strong Areas\n\n");
    let mut strong: Vec<(&str, &CriterionResult)> = analysis
        .found
        .iter()
        .filter_map(|name| Some((name.as_str(), analysis.details.get(name)?)))
        .filter(|(_, detail)| detail.ratio() >= STRONG_RATIO)
        .collect();
    strong.sort_by(|a, b| b.1.ratio().total_cmp(&a.1.ratio()));

    if strong.is_empty() {
        output.push_str("  No sections with strong coverage found\n\n");
        return;
    }
    for (name, detail) in strong {
        push_criterion_line(output, "+", name, detail);
        if let Some(sub_scores) = &detail.sub_scores {
            for (sub, score) in sub_scores.iter().filter(|(_, score)| **score > 0.0) {
                output.push_str(&format!("      - {sub}: {score:.1} pts\n"));
            }
        }
    }
    output.push('\n');
}

fn push_improvements(output: &mut String, analysis: &AnalysisResult) {
    let mut weak: Vec<(&str, &CriterionResult)> = analysis
        .details
        .iter()
        .filter(|(_, detail)| detail.ratio() < STRONG_RATIO)
        .collect();
    if weak.is_empty() {
        return;
    }
    weak.sort_by(|a, b| a.1.ratio().total_cmp(&b.1.ratio()));

    output.push_str("## Areas for Improvement\n\n");
    for (name, detail) in weak {
        let marker = if detail.score == 0.0 { "x" } else { "~" };
        push_criterion_line(output, marker, name, detail);
        if let Some(sub_scores) = &detail.sub_scores {
            for (sub, score) in sub_scores.iter() {
                output.push_str(&format!("      - {sub}: {score:.1} pts\n"));
            }
        }
    }
    output.push('\n');
}

fn push_criterion_line(output: &mut String, marker: &str, name: &str, detail: &CriterionResult) {
    output.push_str(&format!(
        "  [{marker}] {name} ({:.1}/{} pts) - {}\n",
        detail.score, detail.max_score, detail.reason
    ));
}

/// Suggestions line up with `missing` by position; after enhancement they
/// may not, and unmatched entries get the base priority.
pub fn suggestion_priority(analysis: &AnalysisResult, index: usize) -> f64 {
    let Some(name) = analysis.missing.get(index) else {
        return 5.0;
    };
    let Some(detail) = analysis.details.get(name) else {
        return 5.0;
    };
    let boost = if ESSENTIAL_CRITERIA.contains(&name.as_str()) {
        5.0
    } else {
        0.0
    };
    detail.max_score + boost
}

fn push_suggestions(output: &mut String, analysis: &AnalysisResult) {
    if analysis.suggestions.is_empty() {
        return;
    }
    let mut ranked: Vec<(f64, &String)> = analysis
        .suggestions
        .iter()
        .enumerate()
        .map(|(index, text)| (suggestion_priority(analysis, index), text))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    output.push_str("## Prioritized Suggestions\n\n");
    for (index, (priority, text)) in ranked.into_iter().enumerate() {
        let marker = if priority >= 15.0 {
            "!!"
        } else if priority >= 10.0 {
            "*"
        } else {
            "-"
        };
        output.push_str(&format!("  {}. {marker} {text}\n", index + 1));
    }
    output.push('\n');
}

/// Ties go to the later category in rubric order.
fn extreme_category(
    analysis: &AnalysisResult,
    strongest: bool,
) -> Option<(&str, &CategoryAggregate)> {
    analysis.categories.iter().reduce(|best, next| {
        let better = if strongest {
            next.1.percentage >= best.1.percentage
        } else {
            next.1.percentage <= best.1.percentage
        };
        if better {
            next
        } else {
            best
        }
    })
}

pub fn interpretation(analysis: &AnalysisResult) -> String {
    let percentage = analysis.percentage;
    let mut text = if percentage >= 95.0 {
        "Outstanding! Your README is exemplary and sets a high standard for documentation quality."
    } else if percentage >= 90.0 {
        "Excellent! Your README is comprehensive and professional."
    } else if percentage >= 80.0 {
        "Great work! Your README covers most essential areas effectively."
    } else if percentage >= 70.0 {
        "Good foundation! Focus on adding the missing key sections to reach excellence."
    } else if percentage >= 60.0 {
        "Decent start! Your README has potential but needs significant improvements."
    } else if percentage >= 40.0 {
        "Your README needs major improvements to be effective for users."
    } else {
        "Your README requires substantial work to meet basic documentation standards."
    }
    .to_string();

    if let (Some(strongest), Some(weakest)) = (
        extreme_category(analysis, true),
        extreme_category(analysis, false),
    ) {
        text.push_str(&format!(
            "\n\nStrongest area: {} ({:.1}%)\nFocus area: {} ({:.1}%)",
            strongest.0, strongest.1.percentage, weakest.0, weakest.1.percentage
        ));
    }
    text
}

pub fn next_steps(analysis: &AnalysisResult) -> Vec<String> {
    let base: [&str; 3] = if analysis.percentage < 60.0 {
        [
            "Start with essential documentation: clear title, description, and installation instructions",
            "Add basic usage examples with code snippets",
            "Include a simple getting started guide",
        ]
    } else if analysis.percentage < 80.0 {
        [
            "Add visual demonstrations (screenshots, GIFs, or videos)",
            "Document your API or main features comprehensively",
            "Include contributing guidelines to encourage community involvement",
        ]
    } else {
        [
            "Add advanced features like troubleshooting guides and performance information",
            "Include security considerations and best practices",
            "Consider adding benchmarks and comparison with alternatives",
        ]
    };
    let mut steps: Vec<String> = base.iter().map(|step| step.to_string()).collect();

    if let Some((name, weakest)) = extreme_category(analysis, false) {
        if weakest.percentage < 70.0 {
            steps.push(format!(
                "Prioritize improvements in {name} (currently {:.1}%)",
                weakest.percentage
            ));
        }
    }
    steps
}
