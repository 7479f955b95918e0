use super::has_heading;
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]").expect("image regex is valid"));
static LINK_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("link regex is valid"));

// Token lengths include the surrounding `![`/`[` and `]`.
const MIN_IMAGE_TOKEN_LEN: usize = 4;
const MIN_LINK_TOKEN_LEN: usize = 6;

pub fn accessibility_score(content: &str) -> f64 {
    let mut score: f64 = 0.0;

    if let Some(ratio) = long_token_ratio(&IMAGE_TOKEN, content, MIN_IMAGE_TOKEN_LEN) {
        score += 0.4 * ratio;
    }
    if has_heading(content) {
        score += 0.3;
    }
    if let Some(ratio) = long_token_ratio(&LINK_TOKEN, content, MIN_LINK_TOKEN_LEN) {
        score += 0.3 * ratio;
    }

    score.clamp(0.0, 1.0)
}

/// Fraction of tokens longer than `min_len`; `None` when there are no tokens.
fn long_token_ratio(pattern: &Regex, content: &str, min_len: usize) -> Option<f64> {
    let lengths: Vec<usize> = pattern
        .find_iter(content)
        .map(|token| token.as_str().chars().count())
        .collect();
    if lengths.is_empty() {
        return None;
    }
    let long = lengths.iter().filter(|len| **len > min_len).count();
    Some(long as f64 / lengths.len() as f64)
}
