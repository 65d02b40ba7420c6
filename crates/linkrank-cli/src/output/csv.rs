//! CSV output formatter

use super::RankingOutput;
use linkrank_core::Distribution;

pub fn format_ranking(ranking: &RankingOutput<'_>) -> String {
    let mut output = String::from("method,page,rank\n");
    push_rows(&mut output, "sampling", ranking.sampled);
    push_rows(&mut output, "iteration", &ranking.iterated.ranks);
    output
}

fn push_rows(output: &mut String, method: &str, ranks: &Distribution) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("{},{},{}\n", method, escape_csv(page), rank));
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
