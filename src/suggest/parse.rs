use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_PARSED_SUGGESTIONS: usize = 7;
const MAX_SENTENCE_SUGGESTIONS: usize = 5;
const MIN_LINE_SUGGESTIONS: usize = 3;

static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("numbered regex"));
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s*").expect("bullet regex"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("code regex"));
static MD_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link regex"));
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence regex"));

/// Turns a free-text reply into discrete suggestions. List-like lines win;
/// with fewer than three of those the reply is split into sentences.
pub fn parse_suggestions(reply: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    for line in reply.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !is_list_line(line) {
            continue;
        }
        let cleaned = clean_line(line);
        let len = cleaned.chars().count();
        if len > 15 && len < 200 {
            suggestions.push(cleaned);
        }
    }

    if suggestions.len() < MIN_LINE_SUGGESTIONS {
        return sentence_suggestions(reply);
    }

    suggestions.truncate(MAX_PARSED_SUGGESTIONS);
    suggestions
}

fn is_list_line(line: &str) -> bool {
    NUMBERED.is_match(line)
        || line.starts_with('-')
        || line.starts_with('*')
        || line.chars().next().is_some_and(is_pictograph)
}

// Emoji and other symbol-plane characters that models use as bullets.
fn is_pictograph(c: char) -> bool {
    matches!(c as u32, 0x2190..=0x2BFF | 0x1F000..=0x1FAFF)
}

fn strip_markup(text: &str) -> String {
    let text = text.replace("**", "").replace('*', "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    text.into_owned()
}

fn clean_line(line: &str) -> String {
    let line = NUMBERED.replace(line, "");
    let line = BULLET.replace(&line, "");
    let line = strip_markup(&line);
    MD_LINK.replace_all(&line, "$1").trim().to_string()
}

fn sentence_suggestions(reply: &str) -> Vec<String> {
    let plain = strip_markup(reply);
    SENTENCE_END
        .split(&plain)
        .map(str::trim)
        .filter(|sentence| {
            let len = sentence.chars().count();
            len > 20 && len < 150
        })
        .take(MAX_SENTENCE_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}
