//! One-step random surfer transition model

use super::distribution::Distribution;
use crate::config::validate_damping;
use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, NodeId};

/// Distribution over the page a random surfer visits after `page`.
///
/// With probability `damping` the surfer follows one of `page`'s links
/// chosen uniformly, otherwise it jumps to any page uniformly. A dangling
/// page behaves as if it linked to every page, giving `1/N` everywhere.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    let from = graph
        .id(page)
        .ok_or_else(|| LinkRankError::UnknownNode(page.to_string()))?;

    let mut weights = Vec::with_capacity(graph.node_count());
    transition_weights(graph, from, damping, &mut weights)?;
    Ok(Distribution::from_dense(graph, &weights))
}

/// Index-level form of [`transition_model`].
///
/// Overwrites `out` with `N` probabilities indexed by [`NodeId`], reusing
/// its allocation.
pub fn transition_weights(
    graph: &LinkGraph,
    from: NodeId,
    damping: f64,
    out: &mut Vec<f64>,
) -> Result<()> {
    graph.ensure_non_empty()?;
    validate_damping(damping)?;

    let n = graph.node_count();
    if from >= n {
        return Err(LinkRankError::UnknownNode(format!("#{}", from)));
    }

    out.clear();
    if graph.is_dangling(from) {
        out.resize(n, 1.0 / n as f64);
        return Ok(());
    }

    out.resize(n, (1.0 - damping) / n as f64);
    let share = damping / graph.out_degree(from) as f64;
    for &target in graph.links(from) {
        out[target] += share;
    }
    Ok(())
}
