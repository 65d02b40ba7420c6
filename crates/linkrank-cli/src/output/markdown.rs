//! Markdown output formatter

use super::RankingOutput;

pub fn format_ranking(ranking: &RankingOutput<'_>) -> String {
    let mut output = String::from("# PageRank Results\n\n");
    output.push_str(&format!(
        "| Page | Sampling (n = {}) | Iteration |\n|---|---:|---:|\n",
        ranking.samples
    ));

    for (page, iterated) in ranking.iterated.ranks.iter() {
        let sampled = ranking.sampled.get(page).unwrap_or(0.0);
        output.push_str(&format!(
            "| `{}` | {:.4} | {:.4} |\n",
            page, sampled, iterated
        ));
    }

    output.push_str(&format!(
        "\n*Iteration converged after {} passes.*\n",
        ranking.iterated.passes
    ));
    output
}
