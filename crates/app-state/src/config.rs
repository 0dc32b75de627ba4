//! Session configuration
//!
//! Every field has a default, so a config file only needs the values it
//! overrides.
//!
//! ```rust
//! use app_state::config::{LoadRacePolicy, SessionConfig};
//!
//! let config = SessionConfig::from_json(r#"{ "loadingDelayMs": 500 }"#).unwrap();
//! assert_eq!(config.loading_delay_ms, 500);
//! assert_eq!(config.race_policy, LoadRacePolicy::Cancel);
//! ```

use app_core::discovery::DEFAULT_DISCOVERY_DELAY;
use app_core::swipe::SwipeThresholds;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Read-aloud duration of one reader step
pub const DEFAULT_READ_ALOUD_MS: u64 = 2000;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// What happens to a pending recipe lookup when the user leaves the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadRacePolicy {
    /// Abort the lookup; late results are dropped
    #[default]
    Cancel,
    /// Let the lookup finish and jump to the recipes screen wherever the user is
    ForceRecipes,
}

/// Tunables for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Delay of the simulated recipe lookup, in milliseconds
    pub loading_delay_ms: u64,

    /// How long the reader shows a step as being read aloud, in milliseconds
    pub read_aloud_ms: u64,

    /// Label stamped on recipes saved to the cookbook
    pub saved_date_label: String,

    /// Message shown on the loading screen
    pub loading_message: String,

    /// Pending-lookup behavior on navigation
    pub race_policy: LoadRacePolicy,

    /// Drag thresholds for the swipe deck
    pub swipe: SwipeThresholds,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: DEFAULT_DISCOVERY_DELAY.as_millis() as u64,
            read_aloud_ms: DEFAULT_READ_ALOUD_MS,
            saved_date_label: "Today".to_string(),
            loading_message: "Finding perfect recipes...".to_string(),
            race_policy: LoadRacePolicy::Cancel,
            swipe: SwipeThresholds::default(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("swipe.horizontal", self.swipe.horizontal),
            ("swipe.vertical", self.swipe.vertical),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Simulated lookup delay
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Read-aloud duration of one step
    pub fn read_aloud(&self) -> Duration {
        Duration::from_millis(self.read_aloud_ms)
    }

    /// Set the read-aloud duration
    pub fn read_aloud_ms(mut self, millis: u64) -> Self {
        self.read_aloud_ms = millis;
        self
    }

    /// Set the lookup delay
    pub fn loading_delay_ms(mut self, millis: u64) -> Self {
        self.loading_delay_ms = millis;
        self
    }

    /// Set the race policy
    pub fn race_policy(mut self, policy: LoadRacePolicy) -> Self {
        self.race_policy = policy;
        self
    }

    /// Set the saved-date label
    pub fn saved_date_label(mut self, label: impl Into<String>) -> Self {
        self.saved_date_label = label.into();
        self
    }
}
