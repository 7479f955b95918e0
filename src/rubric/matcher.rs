use crate::error::RubricError;
use crate::types::rubric::{MatchMode, PatternRule};
use regex::{Regex, RegexBuilder};

const EXACT_CONFIDENCE: f64 = 1.0;
const CONTAINS_CONFIDENCE: f64 = 0.8;
const REGEX_CONFIDENCE_PER_HIT: f64 = 0.3;

/// The text under evaluation, in both the forms the matchers need.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub original: &'a str,
    pub lowered: String,
}

impl<'a> Document<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lowered: original.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternMatch {
    pub matched: bool,
    pub confidence: f64,
}

impl PatternMatch {
    const MISS: PatternMatch = PatternMatch {
        matched: false,
        confidence: 0.0,
    };
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact(String),
    Contains(String),
    Regex(Regex),
}

/// A `PatternRule` with its needle lower-cased or its regex compiled.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    rule: PatternRule,
    matcher: Matcher,
}

impl CompiledPattern {
    pub fn compile(criterion: &str, rule: &PatternRule) -> Result<Self, RubricError> {
        if !(rule.weight.is_finite() && rule.weight > 0.0) {
            return Err(RubricError::NonPositiveWeight {
                criterion: criterion.to_string(),
                pattern: rule.pattern.clone(),
            });
        }

        let matcher = match rule.mode {
            MatchMode::Exact => Matcher::Exact(rule.pattern.to_lowercase()),
            MatchMode::Contains => Matcher::Contains(rule.pattern.to_lowercase()),
            MatchMode::Regex => {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| RubricError::InvalidRegex {
                        criterion: criterion.to_string(),
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                Matcher::Regex(regex)
            }
        };

        Ok(Self {
            rule: rule.clone(),
            matcher,
        })
    }

    pub fn rule(&self) -> &PatternRule {
        &self.rule
    }

    pub fn weight(&self) -> f64 {
        self.rule.weight
    }

    /// Regex rules see the original text so anchors like `^# ` keep their
    /// meaning; the others see the lower-cased copy.
    pub fn evaluate(&self, doc: &Document<'_>) -> PatternMatch {
        match &self.matcher {
            Matcher::Exact(needle) => {
                if doc.lowered == *needle {
                    PatternMatch {
                        matched: true,
                        confidence: EXACT_CONFIDENCE,
                    }
                } else {
                    PatternMatch::MISS
                }
            }
            Matcher::Contains(needle) => {
                if doc.lowered.contains(needle.as_str()) {
                    PatternMatch {
                        matched: true,
                        confidence: CONTAINS_CONFIDENCE,
                    }
                } else {
                    PatternMatch::MISS
                }
            }
            Matcher::Regex(regex) => {
                let hits = regex.find_iter(doc.original).count();
                if hits == 0 {
                    PatternMatch::MISS
                } else {
                    PatternMatch {
                        matched: true,
                        confidence: (hits as f64 * REGEX_CONFIDENCE_PER_HIT).min(1.0),
                    }
                }
            }
        }
    }
}
