//! Monte-Carlo PageRank estimate from a random surfer walk

use super::distribution::Distribution;
use super::transition::transition_weights;
use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution as _;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Estimate PageRank by visiting `config.samples` pages.
///
/// The first page is chosen uniformly and counts as the first sample; each
/// following page is drawn from the transition model of the current one.
/// Visit counts are divided by the sample count, so the result sums to one.
pub fn sample_pagerank<R: Rng>(
    graph: &LinkGraph,
    config: &RankConfig,
    rng: &mut R,
) -> Result<Distribution> {
    check_inputs(graph, config)?;

    let counts = walk_counts(graph, config.damping, config.samples, rng)?;
    Ok(normalize(graph, &counts, config.samples))
}

/// [`sample_pagerank`] with a `ChaCha8Rng` seeded from `config.seed`, or from
/// OS entropy when no seed is configured.
pub fn sample_pagerank_seeded(graph: &LinkGraph, config: &RankConfig) -> Result<Distribution> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    sample_pagerank(graph, config, &mut rng)
}

/// Split the walk into `config.workers` independent walks run on the rayon
/// pool and merge their visit counts.
///
/// Every walk uses its own ChaCha stream of the same seed, so output for a
/// fixed seed does not depend on the number of rayon threads.
#[cfg(feature = "parallel")]
pub fn sample_pagerank_parallel(graph: &LinkGraph, config: &RankConfig) -> Result<Distribution> {
    use rayon::prelude::*;

    check_inputs(graph, config)?;
    if config.workers == 0 {
        return Err(LinkRankError::Config(
            "workers must be at least 1".to_string(),
        ));
    }

    let seed = config
        .seed
        .unwrap_or_else(|| ChaCha8Rng::from_os_rng().random());
    let walks = split_samples(config.samples, config.workers);
    tracing::debug!(
        "Sampling {} pages over {} parallel walks",
        config.samples,
        walks.len()
    );

    let partials = walks
        .par_iter()
        .enumerate()
        .map(|(stream, &steps)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(stream as u64);
            walk_counts(graph, config.damping, steps, &mut rng)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut counts = vec![0usize; graph.node_count()];
    for partial in partials {
        for (total, c) in counts.iter_mut().zip(partial) {
            *total += c;
        }
    }
    Ok(normalize(graph, &counts, config.samples))
}

fn check_inputs(graph: &LinkGraph, config: &RankConfig) -> Result<()> {
    graph.ensure_non_empty()?;
    config.validate_damping()?;
    if config.samples == 0 {
        return Err(LinkRankError::InvalidSampleCount(config.samples));
    }
    Ok(())
}

/// Walk `steps` pages from a uniformly chosen start and count visits
fn walk_counts<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    steps: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = graph.node_count();
    let mut counts = vec![0usize; n];
    let mut weights = Vec::with_capacity(n);

    let mut page = rng.random_range(0..n);
    tracing::debug!("Random walk of {} steps from {}", steps, graph.name(page));

    for step in 0..steps {
        counts[page] += 1;
        if step + 1 == steps {
            break;
        }
        transition_weights(graph, page, damping, &mut weights)?;
        let next = WeightedIndex::new(&weights)
            .map_err(|e| LinkRankError::InvariantViolation(format!("transition weights: {}", e)))?;
        page = next.sample(rng);
    }

    Ok(counts)
}

fn normalize(graph: &LinkGraph, counts: &[usize], samples: usize) -> Distribution {
    let total = samples as f64;
    let probs: Vec<f64> = counts.iter().map(|&c| c as f64 / total).collect();
    Distribution::from_dense(graph, &probs)
}

/// Divide `samples` into at most `workers` non-empty walk lengths
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
fn split_samples(samples: usize, workers: usize) -> Vec<usize> {
    let base = samples / workers;
    let extra = samples % workers;
    (0..workers)
        .map(|i| base + usize::from(i < extra))
        .filter(|&steps| steps > 0)
        .collect()
}
