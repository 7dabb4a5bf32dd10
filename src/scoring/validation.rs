use super::criteria::Criteria;
use super::engine::calculate_score;
use crate::catalog::Vehicle;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),
}

/// Check that every numeric field of a vehicle can be scored.
/// Returns all validation errors at once (not just the first).
///
/// Only values the formula cannot evaluate are rejected. A negative price or a
/// reliability of 7 are still scored (and clamped); a NaN is not.
pub fn validate_vehicle(vehicle: &Vehicle) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("price", vehicle.price),
        ("consumption", vehicle.consumption),
        ("reliability", vehicle.reliability),
        ("safety", vehicle.safety),
        ("comfort", vehicle.comfort),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number, got {}", name, value));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that a criteria record can be scored against.
/// Returns all validation errors at once (not just the first).
///
/// As with vehicles, only non-finite numbers are rejected. A family size of 0
/// or a negative budget is still scored.
pub fn validate_criteria(criteria: &Criteria) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !criteria.budget.is_finite() {
        errors.push(format!(
            "criteria.budget: must be a finite number, got {}",
            criteria.budget
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Score with input checks. Unlike `calculate_score`, which always returns a
/// clamped number, this reports unusable input instead of scoring it.
pub fn score_checked(vehicle: &Vehicle, criteria: &Criteria) -> Result<u8, ScoreError> {
    let mut errors = Vec::new();
    if let Err(e) = validate_vehicle(vehicle) {
        errors.extend(e.into_iter().map(|msg| format!("vehicle {}.{}", vehicle.id, msg)));
    }
    if let Err(e) = validate_criteria(criteria) {
        errors.extend(e);
    }

    if !errors.is_empty() {
        return Err(ScoreError::InvalidInput(errors));
    }

    Ok(calculate_score(vehicle, criteria).score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, FuelType};

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: "golf".to_string(),
            brand: "Volkswagen".to_string(),
            model: "Golf".to_string(),
            year: 2024,
            price: 29900.0,
            fuel_type: FuelType::Gasoline,
            consumption: 5.9,
            power: 150,
            seats: 5,
            category: Category::Compact,
            reliability: 4.2,
            safety: 4.6,
            comfort: 4.2,
            features: vec![],
            pros: vec![],
            cons: vec![],
        }
    }

    #[test]
    fn test_valid_vehicle() {
        assert!(validate_vehicle(&sample_vehicle()).is_ok());
    }

    #[test]
    fn test_out_of_range_is_not_invalid() {
        let vehicle = Vehicle {
            price: -1.0,
            reliability: 9.0,
            ..sample_vehicle()
        };
        assert!(validate_vehicle(&vehicle).is_ok());
    }

    #[test]
    fn test_non_finite_fields_collected() {
        let vehicle = Vehicle {
            price: f64::NAN,
            comfort: f64::INFINITY,
            ..sample_vehicle()
        };
        let errors = validate_vehicle(&vehicle).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("price"));
        assert!(errors[1].starts_with("comfort"));
    }

    #[test]
    fn test_invalid_criteria() {
        let criteria = Criteria {
            budget: f64::NAN,
            ..Criteria::default()
        };
        let errors = validate_criteria(&criteria).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("criteria.budget"));
    }

    #[test]
    fn test_zero_family_size_is_scored() {
        let vehicle = sample_vehicle();
        let criteria = Criteria {
            family_size: 0,
            ..Criteria::default()
        };
        assert!(validate_criteria(&criteria).is_ok());
        assert_eq!(
            score_checked(&vehicle, &criteria),
            Ok(calculate_score(&vehicle, &criteria).score)
        );

        let negative_budget = Criteria {
            budget: -5.0,
            ..Criteria::default()
        };
        assert!(score_checked(&vehicle, &negative_budget).is_ok());
    }

    #[test]
    fn test_score_checked_ok_matches_calculate_score() {
        let vehicle = sample_vehicle();
        let criteria = Criteria::default();
        assert_eq!(
            score_checked(&vehicle, &criteria),
            Ok(calculate_score(&vehicle, &criteria).score)
        );
    }

    #[test]
    fn test_score_checked_reports_all_errors() {
        let vehicle = Vehicle {
            safety: f64::NAN,
            ..sample_vehicle()
        };
        let criteria = Criteria {
            budget: f64::INFINITY,
            ..Criteria::default()
        };
        let err = score_checked(&vehicle, &criteria).unwrap_err();
        let ScoreError::InvalidInput(errors) = &err;
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("vehicle golf.safety"));
        assert!(err.to_string().starts_with("invalid input: "));
    }
}
