use crate::catalog::Vehicle;
use crate::ranking::ScoreMap;

/// Headline numbers for a side-by-side comparison
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSummary<'a> {
    /// Highest score; the earliest selected wins a tie
    pub best: &'a Vehicle,
    pub best_score: u8,
    pub average_price: f64,
    pub average_consumption: f64,
}

/// Summarize the selected vehicles. Returns None for an empty selection.
pub fn summarize<'a>(vehicles: &[&'a Vehicle], scores: &ScoreMap) -> Option<ComparisonSummary<'a>> {
    let score_of = |v: &Vehicle| scores.get(&v.id).copied().unwrap_or(0);

    let (first, rest) = vehicles.split_first()?;
    let mut best: &'a Vehicle = first;
    for &candidate in rest {
        if score_of(candidate) > score_of(best) {
            best = candidate;
        }
    }

    let count = vehicles.len() as f64;
    let average_price = vehicles.iter().map(|v| v.price).sum::<f64>() / count;
    let average_consumption = vehicles.iter().map(|v| v.consumption).sum::<f64>() / count;

    Some(ComparisonSummary {
        best,
        best_score: score_of(best),
        average_price,
        average_consumption,
    })
}
