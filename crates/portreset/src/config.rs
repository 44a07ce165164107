// Service configuration
//
// Environment variables prefixed `SWITCHPORTRESET_`, merged over
// defaults via figment. Malformed values are fatal at startup.

use std::time::Duration;

use figment::providers::{Env, Serialized};
use figment::Figment;
use portreset_core::ControllerSettings;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Process configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// When `false`, logging runs in quiet production mode.
    pub debug: bool,
    /// Controller base URL (no trailing slash needed).
    pub baseurl: Url,
    /// Controller account.
    pub username: String,
    /// Controller password. Plaintext here by necessity — it arrives
    /// through the environment — and wrapped in `SecretString` the
    /// moment it leaves this struct.
    pub password: String,
    /// Outbound per-call timeout, in seconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: true,
            baseurl: "https://demo.ui.com".parse().expect("static URL"),
            username: "admin".into(),
            password: "password".into(),
            timeout: 30,
        }
    }
}

/// Load configuration from defaults + `SWITCHPORTRESET_*` environment.
pub fn load() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("SWITCHPORTRESET_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

impl Config {
    /// Controller connection settings handed to the reset orchestrator.
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            base_url: self.baseurl.clone(),
            username: self.username.clone(),
            password: SecretString::from(self.password.clone()),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
