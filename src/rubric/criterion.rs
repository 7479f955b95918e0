use super::matcher::{CompiledPattern, Document};
use crate::error::RubricError;
use crate::types::analysis::{CriterionResult, NamedMap};
use crate::types::rubric::{Criterion, SubCriterion};

#[derive(Debug, Clone)]
struct CompiledSubCriterion {
    name: String,
    points: f64,
    patterns: Vec<CompiledPattern>,
}

impl CompiledSubCriterion {
    fn compile(parent: &str, sub: &SubCriterion) -> Result<Self, RubricError> {
        let patterns = sub
            .patterns
            .iter()
            .map(|rule| CompiledPattern::compile(parent, rule))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: sub.name.clone(),
            points: sub.points,
            patterns,
        })
    }

    // Normalised by pattern count, not weight sum. This differs from the
    // top-level normalisation and is kept for score compatibility.
    fn score(&self, doc: &Document<'_>) -> f64 {
        if self.patterns.is_empty() {
            return 0.0;
        }
        let matched: f64 = self
            .patterns
            .iter()
            .filter(|pattern| pattern.evaluate(doc).matched)
            .map(CompiledPattern::weight)
            .sum();
        (matched / self.patterns.len() as f64).min(1.0) * self.points
    }
}

#[derive(Debug, Clone)]
pub struct CompiledCriterion {
    criterion: Criterion,
    patterns: Vec<CompiledPattern>,
    sub_criteria: Vec<CompiledSubCriterion>,
}

impl CompiledCriterion {
    pub fn compile(criterion: &Criterion) -> Result<Self, RubricError> {
        if !(criterion.points.is_finite() && criterion.points > 0.0) {
            return Err(RubricError::NonPositivePoints(criterion.name.clone()));
        }
        let patterns = criterion
            .patterns
            .iter()
            .map(|rule| CompiledPattern::compile(&criterion.name, rule))
            .collect::<Result<Vec<_>, _>>()?;
        let sub_criteria = criterion
            .sub_criteria
            .iter()
            .map(|sub| CompiledSubCriterion::compile(&criterion.name, sub))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            criterion: criterion.clone(),
            patterns,
            sub_criteria,
        })
    }

    pub fn name(&self) -> &str {
        &self.criterion.name
    }

    pub fn category(&self) -> &str {
        &self.criterion.category
    }

    pub fn points(&self) -> f64 {
        self.criterion.points
    }

    pub fn evaluate(&self, doc: &Document<'_>) -> CriterionResult {
        let mut total_weight = 0.0;
        let mut confidence_sum = 0.0;
        let mut found_patterns = Vec::new();

        for pattern in &self.patterns {
            let hit = pattern.evaluate(doc);
            if hit.matched {
                total_weight += pattern.weight();
                confidence_sum += hit.confidence;
                found_patterns.push(pattern.rule().pattern.clone());
            }
        }

        let confidence = if self.patterns.is_empty() {
            0.0
        } else {
            confidence_sum / self.patterns.len() as f64
        };

        let possible_weight: f64 = self.patterns.iter().map(CompiledPattern::weight).sum();
        let pattern_score = if possible_weight > 0.0 {
            (total_weight / possible_weight).min(1.0)
        } else {
            0.0
        };

        let points = self.criterion.points;
        let (score, sub_scores) = if self.sub_criteria.is_empty() {
            ((pattern_score * points).min(points), None)
        } else {
            let mut sub_scores = NamedMap::new();
            let mut total = 0.0;
            for sub in &self.sub_criteria {
                let sub_score = sub.score(doc);
                total += sub_score;
                sub_scores.insert(sub.name.clone(), sub_score);
            }
            (total.min(points), Some(sub_scores))
        };

        CriterionResult {
            score,
            max_score: points,
            found: score > 0.0,
            confidence,
            reason: coverage_reason(score / points, found_patterns.len()),
            sub_scores,
            found_patterns,
        }
    }
}

pub fn coverage_reason(ratio: f64, matched: usize) -> String {
    let label = if ratio >= 0.8 {
        "Excellent"
    } else if ratio >= 0.6 {
        "Good"
    } else if ratio >= 0.4 {
        "Partial"
    } else if ratio > 0.0 {
        "Limited"
    } else {
        return "No relevant content detected".to_string();
    };
    format!("{label} coverage found ({matched} patterns matched)")
}
