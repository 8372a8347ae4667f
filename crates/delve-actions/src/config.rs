//! Configuration loading and typed config structures for the action engine.
//!
//! The configuration lives in `delve-config.yaml`. Every field has a default,
//! so an empty file (or no file at all) yields a working engine. Values are
//! checked by [`DelveConfig::validate`] after parsing.

use std::path::Path;

use serde::Deserialize;

/// Environment variable that overrides `session.seed`.
pub const SEED_ENV_VAR: &str = "DELVE_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config: {reason}")]
    Invalid {
        /// What is wrong with the value.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DelveConfig {
    /// Tunables for the action rules.
    #[serde(default)]
    pub actions: ActionConfig,

    /// Settings for a play session.
    #[serde(default)]
    pub session: SessionConfig,
}

impl DelveConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `DELVE_SEED` environment variable, when set to a valid integer,
    /// overrides `session.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment overrides (currently only `DELVE_SEED`).
    ///
    /// Unset or unparsable variables leave the value untouched.
    pub fn apply_env_overrides(&mut self) {
        self.session.apply_env_overrides();
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.actions.validate()?;
        if self.session.party_size == 0 {
            return Err(ConfigError::Invalid {
                reason: String::from("session.party_size must be at least 1"),
            });
        }
        Ok(())
    }
}

/// Inclusive range for a randomly sized batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BatchRange {
    /// Smallest batch.
    pub min: u32,
    /// Largest batch.
    pub max: u32,
}

impl BatchRange {
    /// Create a range; bounds are inclusive.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Tunables for the action rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionConfig {
    /// Fraction of a container's average item dexterity an actor needs to
    /// open it.
    #[serde(default = "default_unlock_factor")]
    pub unlock_factor: f64,

    /// How many boxes a newly discovered place gets.
    #[serde(default = "default_box_batch")]
    pub box_batch: BatchRange,

    /// How many creatures a newly discovered place gets.
    #[serde(default = "default_creature_batch")]
    pub creature_batch: BatchRange,

    /// Items placed in each generated box.
    #[serde(default = "default_items_per_box")]
    pub items_per_box: u32,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            unlock_factor: default_unlock_factor(),
            box_batch: default_box_batch(),
            creature_batch: default_creature_batch(),
            items_per_box: default_items_per_box(),
        }
    }
}

impl ActionConfig {
    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.unlock_factor.is_finite() || self.unlock_factor <= 0.0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "actions.unlock_factor must be a positive number, got {}",
                    self.unlock_factor
                ),
            });
        }
        for (name, batch) in [
            ("box_batch", self.box_batch),
            ("creature_batch", self.creature_batch),
        ] {
            if batch.min > batch.max {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "actions.{name}.min ({}) exceeds max ({})",
                        batch.min, batch.max
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Random seed for reproducible sessions.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of adventurers in the starting group.
    #[serde(default = "default_party_size")]
    pub party_size: u32,

    /// Number of rooms the party walks through.
    #[serde(default = "default_depth")]
    pub depth: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            party_size: default_party_size(),
            depth: default_depth(),
        }
    }
}

impl SessionConfig {
    fn apply_env_overrides(&mut self) {
        if let Some(seed) = std::env::var(SEED_ENV_VAR)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            self.seed = seed;
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_unlock_factor() -> f64 {
    0.95
}

const fn default_box_batch() -> BatchRange {
    BatchRange::new(1, 7)
}

const fn default_creature_batch() -> BatchRange {
    BatchRange::new(1, 6)
}

const fn default_items_per_box() -> u32 {
    3
}

const fn default_seed() -> u64 {
    42
}

const fn default_party_size() -> u32 {
    3
}

const fn default_depth() -> u32 {
    3
}
