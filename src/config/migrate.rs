use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Insert every key of `defaults` missing from `current`.
/// Returns the names of the keys added.
fn fill_missing_keys(current: &mut Mapping, defaults: &Mapping) -> Vec<String> {
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(key) {
            current.insert(key.clone(), value.clone());
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
        }
    }

    added
}

/// Bring a config file written by an older version up to date by adding the
/// keys it lacks, with their default values. Existing values are never
/// touched.
///
/// Returns:
///   Ok(true)  → file rewritten
///   Ok(false) → nothing to do
pub fn upgrade_config_file(path: &Path) -> AppResult<bool> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;

    let mut yaml: Value = serde_yaml::from_str(&content)?;
    let Some(current) = yaml.as_mapping_mut() else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    let defaults = serde_yaml::to_value(Config::default())?;
    let Some(defaults) = defaults.as_mapping() else {
        return Ok(false);
    };

    let added = fill_missing_keys(current, defaults);
    if added.is_empty() {
        return Ok(false);
    }

    let updated = serde_yaml::to_string(&yaml)?;
    fs::write(path, updated).map_err(|_| AppError::ConfigSave)?;

    info(format!(
        "Configuration updated with new keys: {}",
        added.join(", ")
    ));
    Ok(true)
}
