use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FuelType {
    #[serde(alias = "gasoline", alias = "petrol")]
    Gasoline,
    #[serde(alias = "diesel")]
    Diesel,
    #[serde(alias = "electric")]
    Electric,
    #[serde(alias = "hybrid")]
    Hybrid,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        };
        f.write_str(name)
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gasoline" | "petrol" => Ok(FuelType::Gasoline),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            other => Err(format!(
                "unknown fuel type '{}' (expected gasoline, diesel, electric or hybrid)",
                other
            )),
        }
    }
}

/// Body style of a vehicle. Catalogs may carry categories this crate does not
/// know about; those land in `Other` and never earn a usage bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    #[serde(alias = "city")]
    City,
    #[serde(alias = "compact")]
    Compact,
    #[serde(alias = "sedan")]
    Sedan,
    #[serde(rename = "SUV", alias = "suv", alias = "Suv")]
    Suv,
    #[serde(alias = "wagon")]
    Wagon,
    #[serde(alias = "convertible")]
    Convertible,
    #[serde(alias = "family")]
    Family,
    #[serde(other)]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::City => "City",
            Category::Compact => "Compact",
            Category::Sedan => "Sedan",
            Category::Suv => "SUV",
            Category::Wagon => "Wagon",
            Category::Convertible => "Convertible",
            Category::Family => "Family",
            Category::Other => "Other",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" => Ok(Category::City),
            "compact" => Ok(Category::Compact),
            "sedan" => Ok(Category::Sedan),
            "suv" => Ok(Category::Suv),
            "wagon" => Ok(Category::Wagon),
            "convertible" => Ok(Category::Convertible),
            "family" => Ok(Category::Family),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price: f64,
    pub fuel_type: FuelType,
    pub consumption: f64, // L/100km, or kWh/100km for electric
    pub power: u32,       // horsepower
    pub seats: u32,
    pub category: Category,
    pub reliability: f64, // out of 5
    pub safety: f64,      // out of 5
    pub comfort: f64,     // out of 5
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl Vehicle {
    /// "Brand Model", the string free-text search runs against
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Consumption with the unit matching the fuel type
    pub fn consumption_label(&self) -> String {
        match self.fuel_type {
            FuelType::Electric => format!("{:.1} kWh/100km", self.consumption),
            _ => format!("{:.1} L/100km", self.consumption),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vehicle_json() {
        let json = r#"{
            "id": "zoe",
            "brand": "Renault",
            "model": "Zoe",
            "year": 2023,
            "price": 32000,
            "fuel_type": "Electric",
            "consumption": 17.2,
            "power": 135,
            "seats": 5,
            "category": "City",
            "reliability": 4.1,
            "safety": 4.0,
            "comfort": 3.6
        }"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.fuel_type, FuelType::Electric);
        assert_eq!(vehicle.category, Category::City);
        assert!(vehicle.features.is_empty());
        assert_eq!(vehicle.display_name(), "Renault Zoe");
        assert_eq!(vehicle.consumption_label(), "17.2 kWh/100km");
    }

    #[test]
    fn test_unknown_category_is_other() {
        let category: Category = serde_json::from_str(r#""Pickup""#).unwrap();
        assert_eq!(category, Category::Other);
    }

    #[test]
    fn test_suv_spellings() {
        for raw in [r#""SUV""#, r#""suv""#, r#""Suv""#] {
            let category: Category = serde_json::from_str(raw).unwrap();
            assert_eq!(category, Category::Suv);
        }
        assert_eq!(serde_json::to_string(&Category::Suv).unwrap(), r#""SUV""#);
    }

    #[test]
    fn test_parse_fuel_and_category_from_cli() {
        assert_eq!("Petrol".parse::<FuelType>().unwrap(), FuelType::Gasoline);
        assert_eq!("suv".parse::<Category>().unwrap(), Category::Suv);
        assert!("steam".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_missing_numeric_field_rejected() {
        let json = r#"{
            "id": "x", "brand": "B", "model": "M", "year": 2020,
            "fuel_type": "Diesel", "consumption": 5.0, "power": 100,
            "seats": 5, "category": "Sedan",
            "reliability": 4.0, "safety": 4.0, "comfort": 4.0
        }"#;
        let err = serde_json::from_str::<Vehicle>(json).unwrap_err();
        assert!(err.to_string().contains("price"));
    }
}
