pub mod filter;
pub mod loader;
pub mod types;

pub use filter::{filter_vehicles, SearchFilters};
pub use loader::{builtin_catalog, find_vehicle, load_catalog, validate_catalog};
pub use types::{Category, FuelType, Vehicle};
