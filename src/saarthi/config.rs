use crate::auth::User;
use crate::error::{Result, SaarthiError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Local configuration, stored as config.json in the data directory.
///
/// The session user is whatever the identity provider last handed us; the
/// core never talks to auth endpoints itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SaarthiConfig {
    #[serde(default)]
    pub user: Option<User>,
}

impl SaarthiConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SaarthiError::Io)?;
        let config: SaarthiConfig =
            serde_json::from_str(&content).map_err(SaarthiError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SaarthiError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SaarthiError::Serialization)?;
        fs::write(config_path, content).map_err(SaarthiError::Io)?;
        Ok(())
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}
