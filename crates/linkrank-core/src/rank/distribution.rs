//! Probability distribution over the pages of a graph

use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-node tolerance used when checking that a distribution sums to one
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Mapping from page to probability; iterates in sorted page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    probs: BTreeMap<String, f64>,
}

impl Distribution {
    /// Pair dense per-`NodeId` values with the graph's node names
    pub(crate) fn from_dense(graph: &LinkGraph, values: &[f64]) -> Self {
        debug_assert_eq!(graph.node_count(), values.len());
        let probs = graph
            .nodes()
            .zip(values.iter().copied())
            .map(|(name, p)| (name.to_string(), p))
            .collect();
        Self { probs }
    }

    /// Uniform `1/n` distribution over the graph's nodes
    pub fn uniform(graph: &LinkGraph) -> Result<Self> {
        graph.ensure_non_empty()?;
        let n = graph.node_count();
        Ok(Self::from_dense(graph, &vec![1.0 / n as f64; n]))
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.probs.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// `(page, probability)` pairs sorted by page
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, f64)> + '_ {
        self.probs.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn total(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Largest absolute per-page difference; pages missing on one side count as 0
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.probs
            .keys()
            .chain(other.probs.keys())
            .map(|k| (self.get(k).unwrap_or(0.0) - other.get(k).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }

    /// Pages ordered by descending probability, ties broken by name
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Check that all values are non-negative and sum to one within
    /// `SUM_TOLERANCE` scaled by the node count.
    pub fn validate(&self) -> Result<()> {
        if let Some((page, p)) = self.iter().find(|(_, p)| !p.is_finite() || *p < 0.0) {
            return Err(LinkRankError::InvariantViolation(format!(
                "probability of {} is {}",
                page, p
            )));
        }
        check_total(self.total(), self.len())
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.probs
    }
}

pub(crate) fn check_total(total: f64, n: usize) -> Result<()> {
    let tolerance = SUM_TOLERANCE * n.max(1) as f64;
    if (total - 1.0).abs() > tolerance {
        return Err(LinkRankError::InvariantViolation(format!(
            "distribution sums to {} over {} nodes",
            total, n
        )));
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (&'a String, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.probs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> LinkGraph {
        LinkGraph::from_links([("b", vec!["a"]), ("a", vec![]), ("c", vec!["a"])])
    }

    #[test]
    fn test_uniform() {
        let dist = Distribution::uniform(&graph()).unwrap();
        assert_eq!(dist.len(), 3);
        for (_, p) in dist.iter() {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
        dist.validate().unwrap();
    }

    #[test]
    fn test_uniform_empty_graph_fails() {
        let empty = LinkGraph::default();
        assert!(matches!(
            Distribution::uniform(&empty),
            Err(LinkRankError::EmptyGraph)
        ));
    }

    #[test]
    fn test_ranked_orders_by_probability() {
        let dist = Distribution::from_dense(&graph(), &[0.5, 0.25, 0.25]);
        let ranked = dist.ranked();
        assert_eq!(ranked[0], ("a", 0.5));
        assert_eq!(ranked[1].0, "b");
        assert_eq!(ranked[2].0, "c");
    }

    #[test]
    fn test_validate_rejects_bad_total() {
        let dist = Distribution::from_dense(&graph(), &[0.5, 0.25, 0.1]);
        assert!(matches!(
            dist.validate(),
            Err(LinkRankError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_max_abs_diff() {
        let g = graph();
        let a = Distribution::from_dense(&g, &[0.5, 0.25, 0.25]);
        let b = Distribution::from_dense(&g, &[0.4, 0.3, 0.3]);
        assert!((a.max_abs_diff(&b) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_as_map() {
        let dist = Distribution::from_dense(&graph(), &[0.5, 0.25, 0.25]);
        let yaml = serde_yaml::to_string(&dist).unwrap();
        assert!(yaml.starts_with("a: 0.5"));
    }
}
