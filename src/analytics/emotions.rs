use crate::models::{emotion::Emotion, trade::Trade};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionSummary {
    pub emotion: Emotion,
    pub count: usize,
    pub total_profit: f64,
}

/// Groups tagged trades by emotion, keeping the order tags were first seen.
pub fn group_by_emotion(trades: &[Trade]) -> Vec<EmotionSummary> {
    let mut groups: IndexMap<Emotion, EmotionSummary> = IndexMap::new();

    for trade in trades {
        let Some(emotion) = trade.emotion else {
            continue;
        };

        let group = groups.entry(emotion).or_insert(EmotionSummary {
            emotion,
            count: 0,
            total_profit: 0.0,
        });
        group.count += 1;
        group.total_profit += trade.profit_or_zero();
    }

    groups.into_values().collect()
}

/// Most profitable emotional state.
///
/// Ranks groups by summed profit/loss, then by number of trades. Remaining
/// ties go to the emotion that appeared first in `trades`.
pub fn best_emotion(trades: &[Trade]) -> Option<EmotionSummary> {
    group_by_emotion(trades)
        .into_iter()
        .fold(None, |best: Option<EmotionSummary>, candidate| match best {
            Some(current) if !outranks(&candidate, &current) => Some(current),
            _ => Some(candidate),
        })
}

fn outranks(candidate: &EmotionSummary, current: &EmotionSummary) -> bool {
    let candidate_cents = cents(candidate.total_profit);
    let current_cents = cents(current.total_profit);

    if candidate_cents != current_cents {
        return candidate_cents > current_cents;
    }

    candidate.count > current.count
}

/// Profit in whole cents, so sums that differ only by float rounding tie.
fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
