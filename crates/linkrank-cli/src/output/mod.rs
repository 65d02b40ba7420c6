//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{Distribution, IterationReport};

/// Results of one ranking run
pub struct RankingOutput<'a> {
    pub samples: usize,
    pub sampled: &'a Distribution,
    pub iterated: &'a IterationReport,
}

/// Format both distributions
pub fn format_ranking(ranking: &RankingOutput<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_ranking(ranking),
        OutputFormat::Csv => csv::format_ranking(ranking),
        OutputFormat::Md => markdown::format_ranking(ranking),
        OutputFormat::Cli => terminal::format_ranking(ranking),
    }
}
