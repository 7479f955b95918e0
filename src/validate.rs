use crate::metrics::CODE_FENCE;
use once_cell::sync::Lazy;
use regex::Regex;

static MAIN_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#\s+").expect("title regex is valid"));

const MIN_LENGTH: usize = 100;

/// Structural problems found without scoring. `strict` adds title, section
/// and code block checks.
pub fn validate_structure(content: &str, strict: bool) -> Vec<String> {
    let mut issues = Vec::new();

    if content.chars().count() < MIN_LENGTH {
        issues.push(format!(
            "README is too short (less than {MIN_LENGTH} characters)"
        ));
    }
    if !content.contains('#') {
        issues.push("No headings found".to_string());
    }

    if strict {
        if !MAIN_TITLE.is_match(content) {
            issues.push("Missing main title (# heading)".to_string());
        }
        if !content.contains("##") {
            issues.push("No section headings found (## headings)".to_string());
        }
        if !content.contains(CODE_FENCE) {
            issues.push("No code blocks found".to_string());
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_body() -> String {
        "Words for padding the document past the minimum length. ".repeat(3)
    }

    #[test]
    fn short_document_without_headings_has_two_issues() {
        let issues = validate_structure("tiny", false);
        assert_eq!(
            issues,
            vec![
                "README is too short (less than 100 characters)".to_string(),
                "No headings found".to_string(),
            ]
        );
    }

    #[test]
    fn well_formed_document_passes_strict_mode() {
        let content = format!("# Title\n\n{}\n## Usage\n```\nrun\n```\n", long_body());
        assert!(validate_structure(&content, true).is_empty());
    }

    #[test]
    fn strict_mode_flags_missing_structure() {
        let content = format!("Intro #tag\n{}", long_body());
        assert!(validate_structure(&content, false).is_empty());
        assert_eq!(
            validate_structure(&content, true),
            vec![
                "Missing main title (# heading)".to_string(),
                "No section headings found (## headings)".to_string(),
                "No code blocks found".to_string(),
            ]
        );
    }
}
