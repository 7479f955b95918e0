pub mod advice;
pub mod criterion;
pub mod grade;
pub mod matcher;
pub mod table;

use crate::error::RubricError;
use crate::metrics;
use crate::types::analysis::{AnalysisResult, CategoryAggregate, NamedMap, QualityMetrics};
use crate::types::rubric::Criterion;
use criterion::CompiledCriterion;
use matcher::Document;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s+(.+)$").expect("header regex is valid"));

const DEFAULT_CATEGORY_WEIGHT: f64 = 1.0;

/// Category name to multiplier. Categories without an entry weigh 1.0.
#[derive(Debug, Clone, Default)]
pub struct CategoryWeights {
    weights: HashMap<String, f64>,
}

impl CategoryWeights {
    pub fn standard() -> Self {
        table::CATEGORY_WEIGHTS
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect()
    }

    pub fn weight(&self, category: &str) -> f64 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
    }

    pub fn set(&mut self, category: &str, weight: f64) {
        self.weights.insert(category.to_string(), weight);
    }
}

impl FromIterator<(String, f64)> for CategoryWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// A compiled rubric. Every regex is compiled in `Rubric::new`, so a bad
/// table fails at startup instead of mid-analysis.
#[derive(Debug, Clone)]
pub struct Rubric {
    criteria: Vec<CompiledCriterion>,
    weights: CategoryWeights,
}

impl Rubric {
    pub fn new(criteria: &[Criterion], weights: CategoryWeights) -> Result<Self, RubricError> {
        if criteria.is_empty() {
            return Err(RubricError::Empty);
        }
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(criteria.len());
        for criterion in criteria {
            if !seen.insert(criterion.name.as_str()) {
                return Err(RubricError::DuplicateCriterion(criterion.name.clone()));
            }
            compiled.push(CompiledCriterion::compile(criterion)?);
        }
        Ok(Self {
            criteria: compiled,
            weights,
        })
    }

    pub fn standard() -> Result<Self, RubricError> {
        Self::new(&table::standard_criteria(), CategoryWeights::standard())
    }

    /// Applies configured weight overrides. Overrides naming a category the
    /// rubric doesn't have are ignored.
    pub fn with_weight_overrides(mut self, overrides: &BTreeMap<String, f64>) -> Self {
        let known: HashSet<&str> = self.criteria.iter().map(|c| c.category()).collect();
        for (category, weight) in overrides {
            if known.contains(category.as_str()) {
                self.weights.set(category, *weight);
            } else {
                warn!(category = %category, "ignoring weight for unknown category");
            }
        }
        self
    }

    #[cfg(test)]
    pub fn category_weight(&self, category: &str) -> f64 {
        self.weights.weight(category)
    }

    /// Distinct categories in rubric order.
    #[cfg(test)]
    pub fn categories(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = Vec::new();
        for criterion in &self.criteria {
            if !ordered.contains(&criterion.category()) {
                ordered.push(criterion.category());
            }
        }
        ordered
    }

    #[cfg(test)]
    pub fn criterion_names(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|criterion| criterion.name())
    }

    pub fn analyze(&self, content: &str) -> AnalysisResult {
        let doc = Document::new(content);
        let headers = extract_headers(content);
        debug!(headers = headers.len(), "scanning document");

        let mut score = 0.0;
        let mut max_score = 0.0;
        let mut found = Vec::new();
        let mut missing = Vec::new();
        let mut suggestions = Vec::new();
        let mut details = NamedMap::new();
        let mut categories: NamedMap<CategoryAggregate> = NamedMap::new();

        for criterion in &self.criteria {
            let result = criterion.evaluate(&doc);
            let weight = self.weights.weight(criterion.category());
            let weighted_score = result.score * weight;
            let weighted_max = criterion.points() * weight;

            score += weighted_score;
            max_score += weighted_max;

            let aggregate = categories.get_or_insert_with(criterion.category(), Default::default);
            aggregate.score += weighted_score;
            aggregate.max_score += weighted_max;
            aggregate.criteria.push(criterion.name().to_string());

            debug!(
                criterion = criterion.name(),
                score = result.score,
                found = result.found,
                "criterion evaluated"
            );

            if result.found {
                found.push(criterion.name().to_string());
            } else {
                missing.push(criterion.name().to_string());
                suggestions.push(advice::missing_criterion_suggestion(
                    criterion.name(),
                    &result,
                ));
            }
            details.insert(criterion.name(), result);
        }

        for aggregate in categories.values_mut() {
            aggregate.percentage = percentage_of(aggregate.score, aggregate.max_score);
        }

        let percentage = percentage_of(score, max_score);
        let mut result = AnalysisResult {
            score,
            max_score,
            percentage,
            grade: grade::grade_for(percentage).to_string(),
            found,
            missing,
            suggestions,
            details,
            categories,
            quality_metrics: QualityMetrics::default(),
        };
        result.quality_metrics = metrics::quality_metrics(content, &result);
        result
    }
}

fn percentage_of(score: f64, max_score: f64) -> f64 {
    if max_score > 0.0 {
        100.0 * score / max_score
    } else {
        0.0
    }
}

/// Lower-cased text of every `#`-style header line, in document order.
pub fn extract_headers(content: &str) -> Vec<String> {
    HEADER_LINE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|text| text.as_str().trim_end_matches('\r').to_lowercase())
        .collect()
}
