use crate::catalog::Vehicle;
use crate::scoring::{score, Criteria};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Vehicle id -> score, for one criteria value
pub type ScoreMap = HashMap<String, u8>;

/// How the result list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Best fit first
    #[default]
    Score,
    /// Cheapest first
    Price,
    /// Most frugal first
    Consumption,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Score => "score",
            SortKey::Price => "price",
            SortKey::Consumption => "consumption",
        })
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(SortKey::Score),
            "price" => Ok(SortKey::Price),
            "consumption" => Ok(SortKey::Consumption),
            other => Err(format!(
                "unknown sort key '{}' (expected score, price or consumption)",
                other
            )),
        }
    }
}

/// Scores plus an ordering over the same vehicles
#[derive(Debug)]
pub struct Ranking<'a> {
    pub scores: ScoreMap,
    pub order: Vec<&'a Vehicle>,
}

impl Ranking<'_> {
    pub fn score_of(&self, vehicle: &Vehicle) -> u8 {
        self.scores.get(&vehicle.id).copied().unwrap_or(0)
    }
}

/// Score every vehicle once against the given criteria.
///
/// The map is keyed by id, so ids must be unique: vehicles sharing an id
/// collapse into one entry holding the last one's score. Run
/// `catalog::validate_catalog` first on untrusted input.
pub fn score_all(vehicles: &[Vehicle], criteria: &Criteria) -> ScoreMap {
    let scores: ScoreMap = vehicles
        .iter()
        .map(|v| (v.id.clone(), score(v, criteria)))
        .collect();
    if scores.len() < vehicles.len() {
        log::warn!(
            "{} vehicles share an id with another; their scores were merged",
            vehicles.len() - scores.len()
        );
    }
    scores
}

/// Order vehicles by the chosen key. The sort is stable, so ties keep catalog
/// order. Vehicles missing from `scores` sort as 0.
pub fn sort_vehicles<'a>(vehicles: &'a [Vehicle], scores: &ScoreMap, key: SortKey) -> Vec<&'a Vehicle> {
    let mut sorted: Vec<&Vehicle> = vehicles.iter().collect();

    let score_of = |v: &Vehicle| scores.get(&v.id).copied().unwrap_or(0);
    let compare = |a: &&Vehicle, b: &&Vehicle| -> Ordering {
        match key {
            // Primary: score descending
            SortKey::Score => score_of(*b).cmp(&score_of(*a)),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Consumption => a.consumption.total_cmp(&b.consumption),
        }
    };

    sorted.sort_by(compare);
    sorted
}

/// Score and sort in one go
pub fn rank<'a>(vehicles: &'a [Vehicle], criteria: &Criteria, key: SortKey) -> Ranking<'a> {
    let scores = score_all(vehicles, criteria);
    let order = sort_vehicles(vehicles, &scores, key);
    log::debug!(
        "Ranked {} vehicles by {} (budget {}, {} usage, {} priority)",
        order.len(),
        key,
        criteria.budget,
        criteria.usage,
        criteria.priority
    );
    Ranking { scores, order }
}

/// The first `n` vehicles of the score-descending order
pub fn top_n<'a>(vehicles: &'a [Vehicle], scores: &ScoreMap, n: usize) -> Vec<&'a Vehicle> {
    let mut best = sort_vehicles(vehicles, scores, SortKey::Score);
    best.truncate(n);
    best
}
