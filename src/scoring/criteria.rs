use crate::catalog::FuelType;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the car will mostly be driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Usage {
    #[serde(alias = "city")]
    City,
    #[serde(alias = "road")]
    Road,
    #[serde(alias = "mixed")]
    Mixed,
}

/// What the buyer cares about most; selects exactly one bonus branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Priority {
    #[serde(alias = "economy")]
    Economy,
    #[serde(alias = "performance")]
    Performance,
    #[serde(alias = "comfort")]
    Comfort,
    #[serde(alias = "ecology")]
    Ecology,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Usage::City => "City",
            Usage::Road => "Road",
            Usage::Mixed => "Mixed",
        })
    }
}

impl FromStr for Usage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" => Ok(Usage::City),
            "road" => Ok(Usage::Road),
            "mixed" => Ok(Usage::Mixed),
            other => Err(format!(
                "unknown usage '{}' (expected city, road or mixed)",
                other
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Economy => "Economy",
            Priority::Performance => "Performance",
            Priority::Comfort => "Comfort",
            Priority::Ecology => "Ecology",
        })
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "economy" => Ok(Priority::Economy),
            "performance" => Ok(Priority::Performance),
            "comfort" => Ok(Priority::Comfort),
            "ecology" => Ok(Priority::Ecology),
            other => Err(format!(
                "unknown priority '{}' (expected economy, performance, comfort or ecology)",
                other
            )),
        }
    }
}

/// A buyer's stated preferences.
///
/// Every field is required when parsed; a criteria block with a missing field
/// is rejected rather than silently filled in. Use `Criteria::default()` for
/// the starting point shown before the user has said anything.
///
/// Example YAML:
/// ```yaml
/// criteria:
///   budget: 30000
///   fuel_preference: ""      # empty means no preference
///   usage: City
///   priority: Ecology
///   family_size: 4
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Criteria {
    /// Target spend in currency units
    pub budget: f64,

    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub fuel_preference: Option<FuelType>,

    pub usage: Usage,

    pub priority: Priority,

    /// Minimum number of seats wanted
    pub family_size: u32,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            budget: 50000.0,
            fuel_preference: None,
            usage: Usage::Mixed,
            priority: Priority::Economy,
            family_size: 4,
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<FuelType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn none_as_empty<S>(value: &Option<FuelType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(fuel) => serializer.serialize_str(&fuel.to_string()),
        None => serializer.serialize_str(""),
    }
}
