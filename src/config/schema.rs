use crate::ranking::SortKey;
use crate::scoring::Criteria;
use crate::store::MAX_COMPARISON;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const FREE_FAVORITES_LIMIT: usize = 5;
const FREE_COMPARISON_LIMIT: usize = 2;

/// Example YAML:
/// ```yaml
/// plan: premium
/// catalog: ~/cars.yaml
/// sort: price
/// top_n: 5
/// criteria:
///   budget: 30000
///   fuel_preference: hybrid
///   usage: City
///   priority: Ecology
///   family_size: 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Saved criteria; command-line flags override individual fields
    #[serde(default)]
    pub criteria: Option<Criteria>,

    /// Catalog file to use instead of the built-in one
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default sort for `list`
    #[serde(default)]
    pub sort: Option<SortKey>,

    /// How many vehicles `top` shows (default: 3)
    #[serde(default)]
    pub top_n: Option<usize>,

    #[serde(default)]
    pub plan: Plan,
}

impl Config {
    pub fn effective_criteria(&self) -> Criteria {
        self.criteria.clone().unwrap_or_default()
    }

    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(3)
    }
}

/// Subscription tier; decides how long the saved lists may grow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Premium,
    Pro,
}

impl Plan {
    /// None means unlimited
    pub fn favorites_limit(&self) -> Option<usize> {
        match self {
            Plan::Free => Some(FREE_FAVORITES_LIMIT),
            Plan::Premium | Plan::Pro => None,
        }
    }

    pub fn comparison_limit(&self) -> usize {
        match self {
            Plan::Free => FREE_COMPARISON_LIMIT,
            Plan::Premium | Plan::Pro => MAX_COMPARISON,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Plan::Free => "free",
            Plan::Premium => "premium",
            Plan::Pro => "pro",
        })
    }
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Plan::Free),
            "premium" => Ok(Plan::Premium),
            "pro" => Ok(Plan::Pro),
            other => Err(format!(
                "unknown plan '{}' (expected free, premium or pro)",
                other
            )),
        }
    }
}
