use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::{Result, WizardError};
use crate::listing::ValidationRules;
use crate::utils::{paths, persistence};
use crate::wizard::WizardPolicy;

const CONFIG_FILE: &str = "config.json";

/// User-tunable wizard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_counter_min")]
    pub counter_min: u32,
    #[serde(default = "Config::default_counter_max")]
    pub counter_max: u32,
    #[serde(default = "Config::default_price_max")]
    pub price_max: u32,
    #[serde(default)]
    pub gate_navigation_on_validation: bool,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Where submitted listings are stored. Defaults to `<home>/listings`.
    pub listings_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counter_min: Self::default_counter_min(),
            counter_max: Self::default_counter_max(),
            price_max: Self::default_price_max(),
            gate_navigation_on_validation: false,
            plain_output: false,
            listings_dir: None,
            user_id: None,
        }
    }
}

impl Config {
    pub fn default_counter_min() -> u32 {
        1
    }

    pub fn default_counter_max() -> u32 {
        50
    }

    pub fn default_price_max() -> u32 {
        100_000
    }

    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            counter_min: self.counter_min,
            counter_max: self.counter_max,
            price_max: self.price_max,
        }
    }

    pub fn policy(&self) -> WizardPolicy {
        WizardPolicy {
            rules: self.validation_rules(),
            gate_navigation: self.gate_navigation_on_validation,
        }
    }

    pub fn resolve_listings_dir(&self) -> PathBuf {
        self.listings_dir
            .clone()
            .unwrap_or_else(paths::listings_dir)
    }

    fn check(&self) -> Result<()> {
        if self.counter_min == 0 || self.counter_min > self.counter_max {
            return Err(WizardError::Config(format!(
                "counter bounds {}..={} are invalid",
                self.counter_min, self.counter_max
            )));
        }
        if self.price_max == 0 {
            return Err(WizardError::Config("price_max must be positive".into()));
        }
        Ok(())
    }
}

/// Loads and stores [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.check()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.check()?;
        persistence::save_json_atomic(config, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
