use crate::types::analysis::CriterionResult;

fn canned_advice(criterion: &str) -> Option<&'static str> {
    let advice = match criterion {
        "Project Title & Description" => "Add a compelling project title and clear description that explains what your project does and its main benefits",
        "Installation Instructions" => "Include comprehensive installation instructions with package manager commands, prerequisites, and step-by-step setup guide",
        "Usage Examples" => "Provide multiple code examples showing basic and advanced usage scenarios with expected outputs",
        "API Documentation" => "Document your API methods, functions, or main features with parameters and return values",
        "Visual Demonstrations" => "Add screenshots, GIFs, or diagrams to visually demonstrate your project's functionality",
        "Live Demo Links" => "Include links to live demos, playgrounds, or hosted versions of your project",
        "Status Badges" => "Add status badges for build status, test coverage, version, downloads, and other quality metrics",
        "Testing Information" => "Document your testing approach, how to run tests, and include coverage information",
        "Changelog/Versioning" => "Maintain a changelog and document version history and release notes",
        "Contributing Guidelines" => "Create detailed contributing guidelines including code style, development setup, and submission process",
        "License Information" => "Clearly specify your project's license and include copyright information",
        "Contact Information" => "Provide maintainer contact information and support channels",
        "Configuration Documentation" => "Document configuration options, settings, and customization possibilities",
        "Troubleshooting" => "Include a troubleshooting section or FAQ addressing common issues and solutions",
        "Performance & Benchmarks" => "Share performance characteristics, benchmarks, or optimization information",
        "Security Information" => "Document security considerations, best practices, or vulnerability reporting procedures",
        _ => return None,
    };
    Some(advice)
}

/// Suggestion for a criterion that scored zero. Sub-criteria that also
/// scored exactly zero are named so the reader knows where to start.
pub fn missing_criterion_suggestion(criterion: &str, result: &CriterionResult) -> String {
    let mut suggestion = match canned_advice(criterion) {
        Some(advice) => advice.to_string(),
        None => format!(
            "Consider improving the {} section",
            criterion.to_lowercase()
        ),
    };

    if let Some(sub_scores) = &result.sub_scores {
        let empty: Vec<&str> = sub_scores
            .iter()
            .filter(|(_, score)| **score == 0.0)
            .map(|(name, _)| name)
            .collect();
        if !empty.is_empty() {
            suggestion.push_str(&format!(". Focus particularly on: {}", empty.join(", ")));
        }
    }

    suggestion
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::analysis::NamedMap;

    fn result(sub_scores: Option<NamedMap<f64>>) -> CriterionResult {
        CriterionResult {
            score: 0.0,
            max_score: 10.0,
            found: false,
            confidence: 0.0,
            reason: "No relevant content detected".to_string(),
            sub_scores,
            found_patterns: vec![],
        }
    }

    #[test]
    fn known_criterion_uses_canned_text() {
        let text = missing_criterion_suggestion("Troubleshooting", &result(None));
        assert!(text.starts_with("Include a troubleshooting section"));
        assert!(!text.contains("Focus particularly"));
    }

    #[test]
    fn unknown_criterion_gets_generic_text() {
        let text = missing_criterion_suggestion("Roadmap Notes", &result(None));
        assert_eq!(text, "Consider improving the roadmap notes section");
    }

    #[test]
    fn zero_sub_scores_are_listed_in_order() {
        let mut subs = NamedMap::new();
        subs.insert("Clear Title", 0.0);
        subs.insert("Project Description", 2.5);
        subs.insert("Purpose/Problem Statement", 0.0);

        let text = missing_criterion_suggestion("Project Title & Description", &result(Some(subs)));
        assert!(text.ends_with(
            ". Focus particularly on: Clear Title, Purpose/Problem Statement"
        ));
    }
}
