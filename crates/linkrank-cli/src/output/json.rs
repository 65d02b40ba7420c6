//! JSON output formatter

use super::RankingOutput;

pub fn format_ranking(ranking: &RankingOutput<'_>) -> String {
    let output = serde_json::json!({
        "samples": ranking.samples,
        "passes": ranking.iterated.passes,
        "sampling": ranking.sampled,
        "iteration": ranking.iterated.ranks,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
