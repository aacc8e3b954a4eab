//! Command execution context
//!
//! Bundles config loading, auth validation, and client initialization
//! so individual commands don't repeat the boilerplate.

use std::sync::Arc;

use crate::cache::CachedRegistryClient;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::RegistryClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Authenticated API client behind the response cache
    pub client: Arc<CachedRegistryClient<RegistryClient>>,
    /// Resolved output format (flag > config preference > table)
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a fully initialized context for an authenticated command.
    ///
    /// Loads the config (honoring `--config`), requires a stored token,
    /// applies the `--api-host` override, and wraps the HTTP client in
    /// the cache layer (disabled by `--no-cache`).
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        config.validate_auth()?;

        if let Some(host) = opts.api_host_ref() {
            config.api_host = Some(host.to_string());
        }

        let format = resolve_format(opts, &config);

        let raw = RegistryClient::new(config.api_host(), config.token.clone())?;
        let client = Arc::new(CachedRegistryClient::new(raw, !opts.no_cache));

        Ok(Self {
            config,
            client,
            format,
        })
    }
}

/// Resolve the output format: CLI flag, then config preference, then table.
pub fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    opts.format
        .or_else(|| {
            config
                .preferences
                .format
                .as_deref()
                .and_then(OutputFormat::from_preference)
        })
        .unwrap_or_default()
}
