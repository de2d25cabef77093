use serde::{Deserialize, Serialize};

use crate::error::GoError;

pub const DEFAULT_SIZE: u8 = 19;
pub const MAX_SIZE: u8 = 25;

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub size: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { size: DEFAULT_SIZE }
    }
}

impl SessionConfig {
    pub fn new(size: u8) -> Result<Self, GoError> {
        let config = SessionConfig { size };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if (1..=MAX_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(GoError::InvalidSize(self.size))
        }
    }

    /// Parse and validate a JSON config such as `{"size": 13}`. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, GoError> {
        let config: SessionConfig =
            serde_json::from_str(json).map_err(|e| GoError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
