use super::{has_heading, CODE_FENCE};
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[*\-+]\s").expect("list regex is valid"));

const MAX_MEAN_LINE_LENGTH: f64 = 120.0;

pub fn readability_score(content: &str, lines: &[&str]) -> f64 {
    let mut score: f64 = 0.0;
    if has_heading(content) {
        score += 0.3;
    }
    if content.contains(CODE_FENCE) {
        score += 0.2;
    }
    if LIST_ITEM.is_match(content) {
        score += 0.2;
    }
    if mean_line_length(lines) < MAX_MEAN_LINE_LENGTH {
        score += 0.3;
    }
    score.clamp(0.0, 1.0)
}

/// Blank lines count toward the mean.
fn mean_line_length(lines: &[&str]) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let total: usize = lines.iter().map(|line| line.chars().count()).sum();
    total as f64 / lines.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(content: &str) -> f64 {
        let lines: Vec<&str> = content.split('\n').collect();
        readability_score(content, &lines)
    }

    #[test]
    fn structured_document_scores_full_marks() {
        let content = "# Title\n\n- item\n\n```\ncode\n```";
        assert!((score(content) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn short_plain_text_only_earns_line_length() {
        assert!((score("just prose") - 0.3).abs() < 1e-9);
    }

    #[test]
    fn long_lines_lose_line_length_credit() {
        let content = "x".repeat(200);
        assert_eq!(score(&content), 0.0);
    }
}
