use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::FuelType;
use crate::config::{get_config_path, Config, Plan};
use crate::ranking::SortKey;
use crate::scoring::{Criteria, Priority, Usage};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Keep asking until the answer parses.
fn prompt_parsed<T>(message: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        let input = prompt_with_default(message, default)?;
        match input.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

fn parse_budget(s: &str) -> Result<f64, String> {
    match s.replace([',', '_', ' '], "").parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(_) => Err("budget must be a positive amount".to_string()),
        Err(_) => Err(format!("'{}' is not a number", s)),
    }
}

fn parse_fuel_preference(s: &str) -> Result<Option<FuelType>, String> {
    match s.trim().to_lowercase().as_str() {
        "" | "any" | "none" => Ok(None),
        other => other.parse().map(Some),
    }
}

fn parse_family_size(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(0) => Err("family size must be at least 1".to_string()),
        Ok(v) => Ok(v),
        Err(_) => Err(format!("'{}' is not a whole number", s)),
    }
}

/// Ask for each criteria field, starting from `current`.
fn prompt_criteria(current: &Criteria) -> Result<Criteria> {
    println!("Budget is what you plan to spend. Cars within it score higher.");
    let budget = loop {
        let input = prompt_with_default("Budget", &format!("{}", current.budget))?;
        match parse_budget(&input) {
            Ok(v) => break v,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    println!("Fuel preference: gasoline, diesel, electric, hybrid, or 'any'.");
    let fuel_default = current
        .fuel_preference
        .map(|f| f.to_string())
        .unwrap_or_else(|| "any".to_string());
    let fuel_preference = loop {
        let input = prompt_with_default("Fuel preference", &fuel_default)?;
        match parse_fuel_preference(&input) {
            Ok(v) => break v,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    let usage: Usage = prompt_parsed(
        "Usage (city, road, mixed)",
        &current.usage.to_string().to_lowercase(),
    )?;

    println!();
    let priority: Priority = prompt_parsed(
        "Priority (economy, performance, comfort, ecology)",
        &current.priority.to_string().to_lowercase(),
    )?;

    println!();
    let family_size = loop {
        let input = prompt_with_default("Seats needed", &current.family_size.to_string())?;
        match parse_family_size(&input) {
            Ok(v) => break v,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    Ok(Criteria {
        budget,
        fuel_preference,
        usage,
        priority,
        family_size,
    })
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("car-scout Configuration Wizard");
    println!("==============================");
    println!();

    let defaults = Criteria::default();
    let configure = prompt_yes_no("Set your search criteria? (n accepts defaults)", true)?;
    let criteria = if configure {
        println!();
        prompt_criteria(&defaults)?
    } else {
        defaults
    };

    println!();
    let sort: SortKey = prompt_parsed("Default sort (score, price, consumption)", "score")?;
    let plan: Plan = prompt_parsed("Plan (free, premium, pro)", "free")?;

    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        criteria: Some(criteria),
        sort: Some(sort),
        plan,
        ..Config::default()
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `car-scout top` to see your best matches.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("30000"), Ok(30000.0));
        assert_eq!(parse_budget("30,000"), Ok(30000.0));
        assert_eq!(parse_budget("25_500.5"), Ok(25500.5));
        assert!(parse_budget("0").is_err());
        assert!(parse_budget("-5").is_err());
        assert!(parse_budget("cheap").is_err());
    }

    #[test]
    fn test_parse_fuel_preference() {
        assert_eq!(parse_fuel_preference("any"), Ok(None));
        assert_eq!(parse_fuel_preference(""), Ok(None));
        assert_eq!(parse_fuel_preference("Electric"), Ok(Some(FuelType::Electric)));
        assert!(parse_fuel_preference("steam").is_err());
    }

    #[test]
    fn test_parse_family_size() {
        assert_eq!(parse_family_size("5"), Ok(5));
        assert!(parse_family_size("0").is_err());
        assert!(parse_family_size("two").is_err());
    }
}
