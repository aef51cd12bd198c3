//! Config loading, validation, and conversion into calculator inputs.

use super::model::Config;
use crate::costs::CostConfig;
use crate::error::{PropgenError, Result};
use crate::schedule::ScheduleConfig;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PropgenError::Io)` - The file could not be read
    /// * `Err(PropgenError::Config)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content =
            std::fs::read_to_string(path).map_err(|e| PropgenError::io(path, e))?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// The document is parsed once into a generic value, which is kept as the
    /// raw view, and then into the typed sections.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(yaml)
            .map_err(|e| PropgenError::Config(format!("failed to parse config YAML: {}", e)))?;

        if !document.is_mapping() {
            return Err(PropgenError::Config(
                "config document must be a mapping of sections".to_string(),
            ));
        }

        let raw = serde_json::to_value(&document).map_err(|e| {
            PropgenError::Config(format!("config cannot be used as a template context: {}", e))
        })?;

        let mut config: Config = serde_yaml::from_value(document)
            .map_err(|e| PropgenError::Config(format!("invalid config: {}", e)))?;
        config.raw = raw;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `programmazione.inizio` must not be after `programmazione.fine`
    /// - `costi.quota_bimestrale` must not be negative
    /// - `generatore.pattern` must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.programme.start > self.programme.end {
            return Err(PropgenError::Config(format!(
                "config validation failed: programmazione.inizio ({}) is after programmazione.fine ({})",
                self.programme.start, self.programme.end
            )));
        }

        if self.costs.rate_per_pair.is_negative() {
            return Err(PropgenError::Config(format!(
                "config validation failed: costi.quota_bimestrale must not be negative (found {})",
                self.costs.rate_per_pair
            )));
        }

        globset::Glob::new(&self.generator.pattern).map_err(|e| {
            PropgenError::Config(format!(
                "config validation failed: generatore.pattern '{}' is not a valid glob: {}",
                self.generator.pattern, e
            ))
        })?;

        Ok(())
    }

    /// The whole document as parsed, unknown keys included.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Top-level section names, in document order.
    pub fn section_names(&self) -> Vec<&str> {
        self.raw
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Input for the recurrence calculator.
    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig {
            start: self.programme.start,
            end: self.programme.end,
            weekday: self.programme.weekday.clone(),
            exclusions: self.holidays.clone(),
        }
    }

    /// Input for the cost calculator.
    pub fn cost_config(&self) -> CostConfig {
        CostConfig {
            included_periods: self.costs.included_months.clone(),
            rate_per_pair: self.costs.rate_per_pair,
        }
    }
}
