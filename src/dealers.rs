//! Dealer directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_DEALERS: &str = include_str!("../data/dealers.json");

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Dealer {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub rating: f64,
    /// Distance from the user, when known
    #[serde(default)]
    pub distance_km: Option<f64>,
    pub brands: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub coordinates: Coordinates,
}

impl Dealer {
    pub fn carries(&self, brand: &str) -> bool {
        self.brands.iter().any(|b| b.eq_ignore_ascii_case(brand.trim()))
    }
}

/// The dealer directory bundled with the binary
pub fn builtin_dealers() -> Result<Vec<Dealer>> {
    serde_json::from_str(BUILTIN_DEALERS).context("Failed to parse built-in dealers")
}

/// Dealers carrying at least one of `brands`, in directory order.
/// An empty brand list keeps every dealer. Brand names match case-insensitively.
pub fn dealers_for_brands<'a>(dealers: &'a [Dealer], brands: &[String]) -> Vec<&'a Dealer> {
    dealers
        .iter()
        .filter(|d| brands.is_empty() || brands.iter().any(|b| d.carries(b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dealer(id: &str, brands: &[&str]) -> Dealer {
        Dealer {
            id: id.to_string(),
            name: format!("Dealer {}", id),
            address: "1 Main Street".to_string(),
            city: "Paris".to_string(),
            phone: "01 00 00 00 00".to_string(),
            email: "sales@example.com".to_string(),
            rating: 4.0,
            distance_km: None,
            brands: brands.iter().map(|b| b.to_string()).collect(),
            services: vec![],
            coordinates: Coordinates { lat: 48.85, lng: 2.35 },
        }
    }

    fn sample_dealers() -> Vec<Dealer> {
        vec![
            create_test_dealer("1", &["Peugeot"]),
            create_test_dealer("2", &["Renault", "Dacia"]),
            create_test_dealer("3", &["BMW", "Mini"]),
        ]
    }

    #[test]
    fn test_builtin_dealers_parse() {
        let dealers = builtin_dealers().unwrap();
        assert!(!dealers.is_empty());
        assert!(dealers.iter().all(|d| !d.brands.is_empty()));
    }

    #[test]
    fn test_no_brands_keeps_all() {
        let dealers = sample_dealers();
        assert_eq!(dealers_for_brands(&dealers, &[]).len(), 3);
    }

    #[test]
    fn test_any_brand_matches() {
        let dealers = sample_dealers();
        let brands = vec!["Dacia".to_string(), "Mini".to_string()];
        let ids: Vec<&str> = dealers_for_brands(&dealers, &brands)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_brand_match_ignores_case() {
        let dealers = sample_dealers();
        let brands = vec!["peugeot".to_string()];
        assert_eq!(dealers_for_brands(&dealers, &brands).len(), 1);
    }

    #[test]
    fn test_unknown_brand_matches_nothing() {
        let dealers = sample_dealers();
        let brands = vec!["Lada".to_string()];
        assert!(dealers_for_brands(&dealers, &brands).is_empty());
    }
}
