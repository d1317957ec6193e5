//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, validation, and client initialization.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::EsaClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// API client bound to the resolved team
    pub client: EsaClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (if any), merges CLI/env overrides over it,
    /// validates that a token and team are present and builds the client.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let client_config = config.resolve(&opts.overrides())?;

        debug!(
            "Using team '{}' at {}",
            client_config.team, client_config.base_url
        );

        Ok(Self {
            client: EsaClient::new(client_config)?,
            format: opts.format,
        })
    }
}
