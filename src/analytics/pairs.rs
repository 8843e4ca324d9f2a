use crate::{models::trade::Trade, utils::constants::TOP_PAIRS_LIMIT};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCount {
    pub pair: String,
    pub count: usize,
}

/// Occurrences of each pair in first-seen order.
pub fn count_pairs(trades: &[Trade]) -> Vec<PairCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();

    for trade in trades {
        *counts.entry(trade.pair.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(pair, count)| PairCount {
            pair: pair.to_string(),
            count,
        })
        .collect()
}

/// Most traded pairs, highest count first.
///
/// The sort is stable, so pairs with equal counts keep first-seen order.
pub fn top_pairs(trades: &[Trade]) -> Vec<PairCount> {
    let mut counts = count_pairs(trades);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_PAIRS_LIMIT);

    counts
}
