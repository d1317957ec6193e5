//! Configuration management for esaop
//!
//! Connection settings come from three layers, highest precedence first:
//! command-line flags / environment variables (both handled by clap), the
//! optional YAML config file, then built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::ClientConfig;
use crate::error::{ConfigError, Result};

/// Contents of `~/.esaop/config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// esa access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Default team name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// API base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub access_token: Option<&'a str>,
    pub team: Option<&'a str>,
    pub api_url: Option<&'a str>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".esaop").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file at the default location is not an error; there is simply
    /// nothing to fall back on. A missing explicit path is.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(PathBuf::from(path)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Merge overrides over the file values and validate the result.
    pub fn resolve(&self, overrides: &Overrides<'_>) -> Result<ClientConfig> {
        let token = non_empty(overrides.access_token)
            .or_else(|| non_empty(self.access_token.as_deref()))
            .ok_or(ConfigError::MissingToken)?;

        let team = non_empty(overrides.team)
            .or_else(|| non_empty(self.team.as_deref()))
            .ok_or(ConfigError::MissingTeam)?;
        if team.contains('/') {
            return Err(ConfigError::Invalid(format!("team name '{}' contains '/'", team)).into());
        }

        let mut client_config = ClientConfig::new(token, team);
        if let Some(url) = non_empty(overrides.api_url).or_else(|| non_empty(self.api_url.as_deref()))
        {
            client_config = client_config.with_base_url(url);
        }

        Ok(client_config)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
