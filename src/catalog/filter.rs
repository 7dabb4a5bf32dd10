use super::types::{Category, FuelType, Vehicle};
use serde::{Deserialize, Serialize};

/// Catalog filters from the search panel. Every field is optional; an empty
/// filter keeps the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchFilters {
    /// Case-insensitive substring matched against "brand model"
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    /// Vehicles priced strictly above this are dropped
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub fuel_type: Option<FuelType>,
    #[serde(default)]
    pub favorites_only: bool,
}

impl SearchFilters {
    fn matches(&self, vehicle: &Vehicle, favorites: &[String]) -> bool {
        if let Some(ref needle) = self.search {
            let needle = needle.trim().to_lowercase();
            if !needle.is_empty() && !vehicle.display_name().to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if vehicle.category != category {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if vehicle.price > max_price {
                return false;
            }
        }
        if let Some(fuel_type) = self.fuel_type {
            if vehicle.fuel_type != fuel_type {
                return false;
            }
        }
        if self.favorites_only && !favorites.iter().any(|id| *id == vehicle.id) {
            return false;
        }
        true
    }
}

/// Keep the vehicles matching every active filter, in catalog order
pub fn filter_vehicles(
    vehicles: Vec<Vehicle>,
    filters: &SearchFilters,
    favorites: &[String],
) -> Vec<Vehicle> {
    vehicles
        .into_iter()
        .filter(|v| filters.matches(v, favorites))
        .collect()
}
