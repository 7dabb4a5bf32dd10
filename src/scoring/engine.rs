use super::criteria::{Criteria, Priority, Usage};
use crate::catalog::{Category, FuelType, Vehicle};

const BASE_POINTS: f64 = 20.0;
const BUDGET_POINTS: f64 = 25.0;
const BUDGET_STEP: f64 = 1000.0; // one point lost per 1000 over budget
const CONSUMPTION_POINTS: f64 = 15.0;
const CONSUMPTION_CAP: f64 = 10.0;
const RELIABILITY_POINTS: f64 = 15.0;
const SAFETY_POINTS: f64 = 10.0;
const COMFORT_POINTS: f64 = 10.0;
const RATING_SCALE: f64 = 5.0;
const SEATING_POINTS: f64 = 5.0;
const MISSING_SEAT_COST: f64 = 2.0;
const FUEL_PREFERENCE_BONUS: f64 = 5.0;
const OVER_BUDGET_RATIO: f64 = 1.2;
const OVER_BUDGET_PENALTY: f64 = 10.0;
const SEAT_SHORTFALL_PENALTY: f64 = 15.0;
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Budget", "Priority: Ecology"
    pub description: String, // e.g. "12000 over budget", "electric"
    pub points: f64,         // Signed points this factor added
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
    /// Sum of all factors before rounding and clamping
    pub raw_total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Running tally of factor contributions
struct Tally {
    factors: Vec<FactorContribution>,
}

impl Tally {
    fn add(&mut self, label: impl Into<String>, description: impl Into<String>, points: f64) {
        self.factors.push(FactorContribution {
            label: label.into(),
            description: description.into(),
            points,
        });
    }

    fn total(&self) -> f64 {
        self.factors.iter().map(|f| f.points).sum()
    }
}

/// Score how well a vehicle fits the buyer's criteria, 0 to 100.
///
/// The score is an additive point budget: fixed awards for budget fit,
/// consumption, ratings and seating, one priority bonus branch, one usage
/// bonus branch, a fuel-preference bonus, and two flat penalties. The sum is
/// rounded and clamped, so out-of-range inputs still produce a deterministic
/// in-range score. A NaN anywhere collapses to 0.
///
/// The over-budget penalty is independent of the budget-fit award, and a seat
/// shortfall is charged both in the seating award and as a flat penalty.
pub fn calculate_score(vehicle: &Vehicle, criteria: &Criteria) -> ScoreResult {
    let mut tally = Tally {
        factors: Vec::new(),
    };

    tally.add("Base", "every vehicle", BASE_POINTS);

    let overage = vehicle.price - criteria.budget;
    let budget_points = (BUDGET_POINTS - overage / BUDGET_STEP).clamp(0.0, BUDGET_POINTS);
    let budget_desc = if overage > 0.0 {
        format!("{:.0} over budget", overage)
    } else {
        "within budget".to_string()
    };
    tally.add("Budget", budget_desc, budget_points);

    let consumption_points =
        (CONSUMPTION_POINTS - (vehicle.consumption / CONSUMPTION_CAP) * CONSUMPTION_POINTS).max(0.0);
    tally.add(
        "Consumption",
        format!("{} per 100km", vehicle.consumption),
        consumption_points,
    );

    tally.add(
        "Reliability",
        format!("{}/5", vehicle.reliability),
        vehicle.reliability / RATING_SCALE * RELIABILITY_POINTS,
    );
    tally.add(
        "Safety",
        format!("{}/5", vehicle.safety),
        vehicle.safety / RATING_SCALE * SAFETY_POINTS,
    );
    tally.add(
        "Comfort",
        format!("{}/5", vehicle.comfort),
        vehicle.comfort / RATING_SCALE * COMFORT_POINTS,
    );

    let missing_seats = seat_shortfall(vehicle, criteria);
    let seating_points = if missing_seats == 0 {
        SEATING_POINTS
    } else {
        (SEATING_POINTS - f64::from(missing_seats) * MISSING_SEAT_COST).max(0.0)
    };
    tally.add(
        "Seating",
        format!("{} seats for {}", vehicle.seats, criteria.family_size),
        seating_points,
    );

    let (priority_points, priority_desc) = priority_bonus(vehicle, criteria.priority);
    tally.add(
        format!("Priority: {}", criteria.priority),
        priority_desc,
        priority_points,
    );

    let (usage_points, usage_desc) = usage_bonus(vehicle, criteria.usage);
    tally.add(format!("Usage: {}", criteria.usage), usage_desc, usage_points);

    if let Some(preferred) = criteria.fuel_preference {
        if preferred == vehicle.fuel_type {
            tally.add(
                "Fuel preference",
                format!("matches {}", preferred),
                FUEL_PREFERENCE_BONUS,
            );
        }
    }

    if vehicle.price > criteria.budget * OVER_BUDGET_RATIO {
        tally.add(
            "Penalty",
            "more than 20% over budget",
            -OVER_BUDGET_PENALTY,
        );
    }

    if missing_seats > 0 {
        tally.add(
            "Penalty",
            format!("{} seat(s) short", missing_seats),
            -SEAT_SHORTFALL_PENALTY,
        );
    }

    let raw_total = tally.total();
    ScoreResult {
        score: clamp_score(raw_total),
        breakdown: ScoreBreakdown {
            factors: tally.factors,
            raw_total,
        },
    }
}

/// Bare score without the breakdown
pub fn score(vehicle: &Vehicle, criteria: &Criteria) -> u8 {
    calculate_score(vehicle, criteria).score
}

fn seat_shortfall(vehicle: &Vehicle, criteria: &Criteria) -> u32 {
    criteria.family_size.saturating_sub(vehicle.seats)
}

fn clamp_score(raw: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

fn priority_bonus(vehicle: &Vehicle, priority: Priority) -> (f64, String) {
    let mut points = 0.0;
    let mut reasons = Vec::new();

    match priority {
        Priority::Economy => {
            if vehicle.consumption < 6.0 {
                points += 5.0;
                reasons.push("low consumption");
            }
            if vehicle.price < 25000.0 {
                points += 5.0;
                reasons.push("affordable");
            }
        }
        Priority::Performance => {
            if vehicle.power > 150 {
                points += 5.0;
                reasons.push("powerful");
            }
            if vehicle.reliability > 4.0 {
                points += 5.0;
                reasons.push("reliable");
            }
        }
        Priority::Comfort => {
            if vehicle.comfort > 4.0 {
                points += 5.0;
                reasons.push("comfortable");
            }
            if vehicle.seats >= 5 {
                points += 5.0;
                reasons.push("roomy");
            }
        }
        Priority::Ecology => {
            // first match wins
            if vehicle.fuel_type == FuelType::Electric {
                points = 10.0;
                reasons.push("electric");
            } else if vehicle.fuel_type == FuelType::Hybrid {
                points = 7.0;
                reasons.push("hybrid");
            } else if vehicle.consumption < 5.0 {
                points = 3.0;
                reasons.push("very low consumption");
            }
        }
    }

    (points, describe(&reasons))
}

fn usage_bonus(vehicle: &Vehicle, usage: Usage) -> (f64, String) {
    let mut points = 0.0;
    let mut reasons = Vec::new();

    match usage {
        Usage::City => {
            if matches!(vehicle.category, Category::City | Category::Compact) {
                points += 3.0;
                reasons.push("city-sized");
            }
            if vehicle.consumption < 6.0 {
                points += 2.0;
                reasons.push("low consumption");
            }
        }
        Usage::Road => {
            if matches!(vehicle.category, Category::Sedan | Category::Suv) {
                points += 3.0;
                reasons.push("built for the road");
            }
            if vehicle.comfort > 4.0 {
                points += 2.0;
                reasons.push("comfortable");
            }
        }
        Usage::Mixed => {
            points += 2.0;
            reasons.push("all-round use");
        }
    }

    (points, describe(&reasons))
}

fn describe(reasons: &[&str]) -> String {
    if reasons.is_empty() {
        "no bonus".to_string()
    } else {
        reasons.join(", ")
    }
}
