// ABOUTME: Persisted user defaults for publishing (config.json)
// ABOUTME: Loads with defaults, validates keys and values on set

use crate::model::Config;
use crate::storage::{read_json, write_json};
use crate::{Error, Result};
use std::path::Path;

pub const VALID_AUDIENCES: [&str; 3] = ["everyone", "only_paid", "only_free"];
pub const VALID_OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
pub const KEYS: &[&str] = &["send_email", "audience", "section", "output_format"];

impl Default for Config {
    fn default() -> Self {
        Config {
            send_email: false,
            audience: "everyone".into(),
            section: String::new(),
            output_format: "text".into(),
        }
    }
}

impl Config {
    /// Load from `path`; a missing file or empty fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Config = read_json(path)?.unwrap_or_default();
        let defaults = Config::default();
        if config.audience.is_empty() {
            config.audience = defaults.audience;
        }
        if config.output_format.is_empty() {
            config.output_format = defaults.output_format;
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "send_email" => self.send_email = value == "true",
            "audience" => self.audience = validate_audience(value)?.to_string(),
            "section" => self.section = value.to_string(),
            "output_format" => {
                self.output_format = validate_output_format(value)?.to_string();
            }
            _ => {
                return Err(Error::Config(format!(
                    "unknown config key: {} (valid: {})",
                    key,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn json_output(&self) -> bool {
        self.output_format == "json"
    }
}

pub fn validate_audience(value: &str) -> Result<&str> {
    validate("audience", value, &VALID_AUDIENCES)
}

pub fn validate_output_format(value: &str) -> Result<&str> {
    validate("output_format", value, &VALID_OUTPUT_FORMATS)
}

fn validate<'v>(what: &str, value: &'v str, valid: &[&str]) -> Result<&'v str> {
    if valid.contains(&value) {
        Ok(value)
    } else {
        Err(Error::Config(format!(
            "invalid {}: {} (valid: {})",
            what,
            value,
            valid.join(", ")
        )))
    }
}
