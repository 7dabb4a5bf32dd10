//! Pieces of the command-line front end that are worth testing on their own:
//! criteria flag merging and the mapping from failures to exit codes.

use crate::scoring::{Criteria, Priority, Usage};
use crate::store::StoreError;
use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_STORAGE: i32 = 2;
pub const EXIT_CONFIG: i32 = 4;

/// A subcommand failure, mapped to an exit code in `main`
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Input(_) | CommandError::Store(StoreError::LimitReached { .. }) => EXIT_CONFIG,
            CommandError::Store(StoreError::Backend(_)) => EXIT_STORAGE,
        }
    }
}

/// Criteria fields given on the command line. Unset fields leave the base
/// value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaOverrides {
    pub budget: Option<f64>,
    /// Raw `--fuel` text; "any", "none" or blank clears the preference
    pub fuel: Option<String>,
    pub usage: Option<Usage>,
    pub priority: Option<Priority>,
    pub family_size: Option<u32>,
}

impl CriteriaOverrides {
    /// Layer these flags over `base` (the config's criteria, or defaults)
    pub fn apply(&self, mut base: Criteria) -> Result<Criteria, String> {
        if let Some(budget) = self.budget {
            base.budget = budget;
        }
        if let Some(ref fuel) = self.fuel {
            base.fuel_preference = match fuel.trim().to_lowercase().as_str() {
                "" | "any" | "none" => None,
                other => Some(other.parse()?),
            };
        }
        if let Some(usage) = self.usage {
            base.usage = usage;
        }
        if let Some(priority) = self.priority {
            base.priority = priority;
        }
        if let Some(family_size) = self.family_size {
            base.family_size = family_size;
        }
        Ok(base)
    }
}
