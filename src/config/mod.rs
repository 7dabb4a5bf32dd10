pub mod init;
mod schema;

pub use schema::{Config, Plan};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::validate_criteria;

/// Get the config directory path (~/.config/car-scout/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("car-scout"))
}

/// Get the default config file path (~/.config/car-scout/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/car-scout/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default path is not an error: defaults are used.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path()?, false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        log::debug!("no config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    log::debug!("loaded config from {}", config_path.display());
    Ok(config)
}

/// Validate a loaded config. Collects every problem instead of stopping at the first.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref criteria) = config.criteria {
        if let Err(errs) = validate_criteria(criteria) {
            errors.extend(errs);
        }
    }

    if config.top_n == Some(0) {
        errors.push("top_n: must be at least 1".to_string());
    }

    if let Some(ref catalog) = config.catalog {
        if catalog.as_os_str().is_empty() {
            errors.push("catalog: path must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Criteria;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "plan: premium\ntop_n: 7").unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.plan, Plan::Premium);
        assert_eq!(config.top_n, Some(7));
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = load_config(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "plan: [unclosed").unwrap();
        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = Config {
            criteria: Some(Criteria {
                budget: f64::NAN,
                ..Criteria::default()
            }),
            catalog: Some(PathBuf::new()),
            top_n: Some(0),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.starts_with("criteria.budget")));
        assert!(errors.iter().any(|e| e.starts_with("catalog")));
        assert!(errors.iter().any(|e| e.starts_with("top_n")));
    }
}
