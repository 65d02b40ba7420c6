//! Linkrank Core Library
//!
//! Estimates the importance of pages in a directed link graph with the
//! PageRank random surfer model.
//!
//! # Features
//! - Immutable link graph with dangling-page support
//! - Transition model of the random surfer
//! - Monte-Carlo estimate from a seedable random walk (optionally parallel)
//! - Exact fixed point by Jacobi iteration of the PageRank recurrence
//! - Corpus crawler that builds a graph from HTML or markdown documents

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::{Config, CrawlConfig, RankConfig};
pub use corpus::crawl;
pub use error::{Error, LinkRankError, Result};
pub use graph::{LinkGraph, NodeId};
#[cfg(feature = "parallel")]
pub use rank::sample_pagerank_parallel;
pub use rank::{
    iterate_pagerank, iterate_pagerank_with_report, sample_pagerank, sample_pagerank_seeded,
    transition_model, transition_weights, Distribution, IterationReport,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
