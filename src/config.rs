use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AlaCartaError, Result};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "alacarta.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub recipes_path: PathBuf,
    pub price_db_path: PathBuf,
    pub servings: ServingBounds,
}

/// Range the serving stepper may move within.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ServingBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipes_path: PathBuf::from("data/recipes.json"),
            price_db_path: PathBuf::from("data/price_db.json"),
            servings: ServingBounds::default(),
        }
    }
}

impl Default for ServingBounds {
    fn default() -> Self {
        Self { min: 1, max: 25 }
    }
}

impl ServingBounds {
    pub fn clamp(&self, servings: u32) -> u32 {
        servings.clamp(self.min, self.max)
    }
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or from `DEFAULT_CONFIG_FILE` when it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file just means built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml_str(&std::fs::read_to_string(path)?),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_toml_str(&std::fs::read_to_string(default_path)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let ServingBounds { min, max } = self.servings;
        if min == 0 || min > max {
            return Err(AlaCartaError::InvalidConfig(format!(
                "servings range {min}..={max} must start at 1 or more and not be empty"
            )));
        }
        Ok(())
    }
}
