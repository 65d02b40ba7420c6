//! Rank command: crawl the corpus and run both estimators

use crate::app::Cli;
use crate::output::{self, RankingOutput};
use anyhow::Result;
use linkrank_core::{
    crawl, iterate_pagerank_with_report, sample_pagerank_seeded, Config, Distribution,
    LinkGraph, RankConfig,
};

/// Resolve configuration from file, environment and flags (flags win)
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?.with_env()?,
        None => Config::load()?,
    };

    if let Some(damping) = cli.damping {
        config.rank.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.rank.samples = samples;
    }
    if let Some(seed) = cli.seed {
        config.rank.seed = Some(seed);
    }
    if let Some(tolerance) = cli.tolerance {
        config.rank.tolerance = tolerance;
    }
    if let Some(ref pattern) = cli.pattern {
        config.crawl.pattern = pattern.clone();
    }
    if let Some(depth) = cli.depth {
        config.crawl.max_depth = depth;
    }

    config.rank.validate()?;
    Ok(config)
}

/// Crawl the corpus, rank it and print the results
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    let graph = crawl(&cli.corpus, &config.crawl)?;
    tracing::info!(
        "Ranking {} pages ({} dangling)",
        graph.node_count(),
        graph.dangling_nodes().count()
    );

    let sampled = sample(&graph, &config.rank, cli.parallel)?;
    let iterated = iterate_pagerank_with_report(&graph, &config.rank)?;
    tracing::info!("Iteration converged after {} passes", iterated.passes);

    let ranking = RankingOutput {
        samples: config.rank.samples,
        sampled: &sampled,
        iterated: &iterated,
    };
    print!("{}", output::format_ranking(&ranking, cli.format));
    Ok(())
}

#[cfg(feature = "parallel")]
fn sample(graph: &LinkGraph, config: &RankConfig, parallel: bool) -> Result<Distribution> {
    if parallel {
        return Ok(linkrank_core::sample_pagerank_parallel(graph, config)?);
    }
    Ok(sample_pagerank_seeded(graph, config)?)
}

#[cfg(not(feature = "parallel"))]
fn sample(graph: &LinkGraph, config: &RankConfig, parallel: bool) -> Result<Distribution> {
    if parallel {
        tracing::warn!("Built without the `parallel` feature; sampling on one thread");
    }
    Ok(sample_pagerank_seeded(graph, config)?)
}
