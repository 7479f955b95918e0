use serde::{Serialize, Serializer};

/// Insertion-ordered string-keyed map. Rubric order is observable in the
/// JSON export and in tie-breaks when ranking categories, so a hash map
/// won't do.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for NamedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> NamedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let index = match self.entries.iter().position(|(name, _)| name == key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_string(), make()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<V: Serialize> Serialize for NamedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, value)| (name, value)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    pub score: f64,
    pub max_score: f64,
    pub found: bool,
    pub confidence: f64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_scores: Option<NamedMap<f64>>,
    pub found_patterns: Vec<String>,
}

impl CriterionResult {
    pub fn ratio(&self) -> f64 {
        if self.max_score > 0.0 {
            self.score / self.max_score
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub criteria: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub readability: f64,
    pub completeness: f64,
    pub professionalism: f64,
    pub accessibility: f64,
    pub maintainability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub grade: String,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
    pub details: NamedMap<CriterionResult>,
    pub categories: NamedMap<CategoryAggregate>,
    pub quality_metrics: QualityMetrics,
}

impl AnalysisResult {
    /// Replaces the suggestion list and leaves every scored field untouched.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn is_found(&self, criterion: &str) -> bool {
        self.found.iter().any(|name| name == criterion)
    }

    pub fn detail_score(&self, criterion: &str) -> Option<f64> {
        self.details.get(criterion).map(|detail| detail.score)
    }

    /// Categories sorted by ascending percentage; ties keep rubric order.
    pub fn weakest_categories(&self) -> Vec<(&str, &CategoryAggregate)> {
        let mut ranked: Vec<_> = self.categories.iter().collect();
        ranked.sort_by(|a, b| a.1.percentage.total_cmp(&b.1.percentage));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_map_serializes_in_insertion_order() {
        let mut map = NamedMap::new();
        map.insert("zeta", 1.0);
        map.insert("alpha", 2.0);
        map.insert("zeta", 3.0);

        let rendered = serde_json::to_string(&map).expect("map should serialize");
        assert_eq!(rendered, r#"{"zeta":3.0,"alpha":2.0}"#);
    }

    #[test]
    fn weakest_categories_is_stable_on_ties() {
        let mut categories = NamedMap::new();
        for (name, percentage) in [("b", 10.0), ("a", 0.0), ("c", 0.0)] {
            categories.insert(
                name,
                CategoryAggregate {
                    percentage,
                    ..CategoryAggregate::default()
                },
            );
        }
        let analysis = AnalysisResult {
            score: 0.0,
            max_score: 1.0,
            percentage: 0.0,
            grade: "F".to_string(),
            found: vec![],
            missing: vec![],
            suggestions: vec![],
            details: NamedMap::new(),
            categories,
            quality_metrics: QualityMetrics::default(),
        };

        let order: Vec<_> = analysis
            .weakest_categories()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }
}
