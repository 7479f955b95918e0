use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    // whole-document equality; no built-in criterion uses it
    #[allow(dead_code)]
    Exact,
    Contains,
    Regex,
}

/// One weighted piece of evidence. `pattern` is case-insensitive text for
/// `Exact`/`Contains` and a regex source for `Regex`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternRule {
    pub pattern: String,
    pub weight: f64,
    pub mode: MatchMode,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>, weight: f64, mode: MatchMode) -> Self {
        Self {
            pattern: pattern.into(),
            weight,
            mode,
        }
    }

    #[cfg(test)]
    pub fn exact(pattern: &str, weight: f64) -> Self {
        Self::new(pattern, weight, MatchMode::Exact)
    }

    pub fn contains(pattern: &str, weight: f64) -> Self {
        Self::new(pattern, weight, MatchMode::Contains)
    }

    pub fn regex(pattern: &str, weight: f64) -> Self {
        Self::new(pattern, weight, MatchMode::Regex)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubCriterion {
    pub name: String,
    pub points: f64,
    pub patterns: Vec<PatternRule>,
}

impl SubCriterion {
    pub fn new(name: &str, points: f64, patterns: Vec<PatternRule>) -> Self {
        Self {
            name: name.to_string(),
            points,
            patterns,
        }
    }
}

/// A named rubric item. When `sub_criteria` is non-empty the score comes
/// from the sub-criteria alone; top-level patterns only feed diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub name: String,
    pub category: String,
    pub points: f64,
    pub patterns: Vec<PatternRule>,
    pub sub_criteria: Vec<SubCriterion>,
}

impl Criterion {
    pub fn new(name: &str, category: &str, points: f64, patterns: Vec<PatternRule>) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            points,
            patterns,
            sub_criteria: Vec::new(),
        }
    }

    pub fn with_sub_criteria(mut self, sub_criteria: Vec<SubCriterion>) -> Self {
        self.sub_criteria = sub_criteria;
        self
    }
}
