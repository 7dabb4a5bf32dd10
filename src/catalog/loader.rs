use super::types::Vehicle;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// The catalog bundled with the binary
pub fn builtin_catalog() -> Result<Vec<Vehicle>> {
    serde_json::from_str(BUILTIN_CATALOG).context("Failed to parse built-in catalog")
}

/// Load a catalog from a JSON or YAML file
///
/// The format is picked from the file extension: `.yaml`/`.yml` are read as
/// YAML, anything else as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if any vehicle is missing a
/// required field.
pub fn load_catalog(path: &Path) -> Result<Vec<Vehicle>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog at {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let vehicles: Vec<Vehicle> = if is_yaml {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid JSON in {}", path.display()))?
    };

    log::debug!("Loaded {} vehicles from {}", vehicles.len(), path.display());
    Ok(vehicles)
}

/// Check catalog-wide invariants the scoring engine cannot see on its own.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(vehicles: &[Vehicle]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, vehicle) in vehicles.iter().enumerate() {
        if vehicle.id.trim().is_empty() {
            errors.push(format!("catalog[{}].id: must not be empty", i));
        } else if !seen_ids.insert(vehicle.id.as_str()) {
            errors.push(format!("catalog[{}].id: duplicate id '{}'", i, vehicle.id));
        }

        if let Err(field_errors) = crate::scoring::validate_vehicle(vehicle) {
            errors.extend(
                field_errors
                    .into_iter()
                    .map(|e| format!("catalog[{}].{}", i, e)),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Look up a vehicle by id
pub fn find_vehicle<'a>(vehicles: &'a [Vehicle], id: &str) -> Option<&'a Vehicle> {
    vehicles.iter().find(|v| v.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FuelType;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_parses_and_validates() {
        let vehicles = builtin_catalog().unwrap();
        assert!(vehicles.len() >= 10);
        assert!(validate_catalog(&vehicles).is_ok());
    }

    #[test]
    fn test_find_vehicle() {
        let vehicles = builtin_catalog().unwrap();
        let golf = find_vehicle(&vehicles, "vw-golf").unwrap();
        assert_eq!(golf.brand, "Volkswagen");
        assert!(find_vehicle(&vehicles, "nope").is_none());
    }

    #[test]
    fn test_load_yaml_catalog() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            r#"
- id: clio
  brand: Renault
  model: Clio
  year: 2024
  price: 18900
  fuel_type: Gasoline
  consumption: 5.2
  power: 90
  seats: 5
  category: City
  reliability: 3.8
  safety: 4.0
  comfort: 3.5
"#
        )
        .unwrap();

        let vehicles = load_catalog(file.path()).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].fuel_type, FuelType::Gasoline);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn test_validate_catalog_duplicates_and_nan() {
        let mut vehicles = builtin_catalog().unwrap();
        let mut dup = vehicles[0].clone();
        dup.price = f64::NAN;
        vehicles.push(dup);

        let errors = validate_catalog(&vehicles).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("duplicate id"));
        assert!(errors[1].contains("price"));
    }
}
