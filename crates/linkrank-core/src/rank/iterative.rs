//! Fixed-point PageRank by repeated application of the recurrence

use super::distribution::{check_total, Distribution};
use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;

/// Outcome of [`iterate_pagerank_with_report`]
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub ranks: Distribution,
    /// Number of full passes computed
    pub passes: usize,
    /// Largest per-page change in the final pass
    pub max_delta: f64,
}

/// Compute PageRank by iterating until no page changes by more than
/// `config.tolerance` between passes.
pub fn iterate_pagerank(graph: &LinkGraph, config: &RankConfig) -> Result<Distribution> {
    iterate_pagerank_with_report(graph, config).map(|report| report.ranks)
}

/// [`iterate_pagerank`] returning pass statistics alongside the ranks.
///
/// Every pass reads only the previous pass's ranks:
///
/// ```text
/// new_rank(p) = (1 - d) / N + d * Σ_{i -> p} rank(i) / outdegree(i)
/// ```
///
/// where a dangling page counts as linking to every page, itself included.
pub fn iterate_pagerank_with_report(
    graph: &LinkGraph,
    config: &RankConfig,
) -> Result<IterationReport> {
    graph.ensure_non_empty()?;
    config.validate_damping()?;
    if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
        return Err(LinkRankError::InvalidTolerance(config.tolerance));
    }

    let n = graph.node_count();
    let n_f64 = n as f64;
    let damping = config.damping;
    let teleport = (1.0 - damping) / n_f64;
    let out_degrees: Vec<f64> = (0..n).map(|i| graph.out_degree(i) as f64).collect();
    let dangling: Vec<usize> = graph.dangling_nodes().collect();

    let mut ranks = vec![1.0 / n_f64; n];
    let mut next = vec![0.0; n];
    let mut passes = 0;

    loop {
        passes += 1;

        let dangling_share: f64 = dangling.iter().map(|&i| ranks[i]).sum::<f64>() / n_f64;
        for (page, slot) in next.iter_mut().enumerate() {
            let inbound: f64 = graph
                .incoming(page)
                .iter()
                .map(|&i| ranks[i] / out_degrees[i])
                .sum();
            *slot = teleport + damping * (inbound + dangling_share);
        }

        let max_delta = ranks
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        std::mem::swap(&mut ranks, &mut next);

        check_total(ranks.iter().sum(), n)?;
        tracing::trace!(pass = passes, max_delta, "PageRank pass");

        if max_delta <= config.tolerance {
            tracing::debug!(
                "PageRank converged after {} passes (max delta {:e})",
                passes,
                max_delta
            );
            return Ok(IterationReport {
                ranks: Distribution::from_dense(graph, &ranks),
                passes,
                max_delta,
            });
        }

        if passes >= config.max_passes {
            return Err(LinkRankError::NotConverged { passes, max_delta });
        }
    }
}
