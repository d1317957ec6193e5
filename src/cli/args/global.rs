//! Global CLI options shared across all commands
//!
//! This module provides a centralized struct for global CLI options so
//! handlers take one parameter instead of threading each flag through.

use crate::cli::{Cli, OutputFormat};
use crate::config::Overrides;

/// Global CLI options passed to all command handlers.
///
/// Precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; the config file is merged in
/// `CommandContext`.
#[derive(Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Access token override
    pub token: Option<String>,

    /// Team name override
    pub team: Option<String>,

    /// API base URL override (staging, local stub server)
    pub api_url: Option<String>,

    /// Custom config file path (defaults to ~/.esaop/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            token: cli.token.clone(),
            team: cli.team.clone(),
            api_url: cli.api_url.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Connection overrides for config resolution.
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            access_token: self.token.as_deref(),
            team: self.team.as_deref(),
            api_url: self.api_url.as_deref(),
        }
    }
}

// Keeps the token out of debug logs.
impl std::fmt::Debug for GlobalOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalOptions")
            .field("format", &self.format)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("team", &self.team)
            .field("api_url", &self.api_url)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Json,
            token: Some("secret".to_string()),
            team: Some("docs".to_string()),
            api_url: Some("http://localhost:8080".to_string()),
            config: Some("/custom/path".to_string()),
        }
    }

    #[test]
    fn test_global_options_overrides() {
        let opts = opts();
        let overrides = opts.overrides();

        assert_eq!(overrides.access_token, Some("secret"));
        assert_eq!(overrides.team, Some("docs"));
        assert_eq!(overrides.api_url, Some("http://localhost:8080"));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", opts());

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("docs"));
    }
}
