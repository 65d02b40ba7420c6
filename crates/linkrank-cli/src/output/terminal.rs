//! Terminal output formatter

use super::RankingOutput;
use linkrank_core::Distribution;

pub fn format_ranking(ranking: &RankingOutput<'_>) -> String {
    let mut output = format!("PageRank Results from Sampling (n = {})\n", ranking.samples);
    push_ranks(&mut output, ranking.sampled);
    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &ranking.iterated.ranks);
    output
}

fn push_ranks(output: &mut String, ranks: &Distribution) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}
