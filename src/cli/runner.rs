//! CLI runner - executes commands

use crate::auth::Authenticator;
use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, ClientConfig};
use crate::dropdown::DropdownLoader;
use crate::engine::{ListEngine, PageFetcher};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::RequestOptions;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List {
                path,
                all,
                limit,
                after,
                before,
            } => {
                let options = Self::list_options(*all, *limit, after, before);
                self.list(path, &options).await
            }
            Commands::Options { path } => self.options(path).await,
            Commands::Validate => self.validate(),
        }
    }

    /// Request options for `list`; a full walk uses the configured page size
    fn list_options(
        all: bool,
        limit: Option<u32>,
        after: &Option<String>,
        before: &Option<String>,
    ) -> RequestOptions {
        let mut options = if all {
            if limit.is_some() {
                debug!(?limit, "Ignoring --limit for a full walk");
            }
            RequestOptions::all()
        } else {
            RequestOptions::single_page(limit)
        };
        options.after.clone_from(after);
        options.before.clone_from(before);
        options
    }

    /// Load configuration and apply command-line overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(api_key) = &self.cli.api_key {
            config.api_key = Some(api_key.clone());
        }
        config.validate()?;
        Ok(config)
    }

    /// Build a list engine over the real HTTP transport
    fn build_engine(config: &ClientConfig) -> Result<ListEngine<HttpClient>> {
        let client = HttpClient::with_config(config.http_client_config()?)?;
        let auth = Authenticator::new(config.auth_with(|name| std::env::var(name).ok())?);
        Ok(ListEngine::new(PageFetcher::new(client, auth)).with_config(config.engine_config()))
    }

    /// List items
    async fn list(&self, path: &str, options: &RequestOptions) -> Result<()> {
        let config = self.load_config()?;
        let engine = Self::build_engine(&config)?;

        debug!(path, ?options, "Listing");
        let result = engine.fetch_list(path, options).await?;
        self.output(&result)
    }

    /// Load dropdown options
    async fn options(&self, path: &str) -> Result<()> {
        let config = self.load_config()?;
        let engine = Self::build_engine(&config)?;

        let options = DropdownLoader::new(&engine)
            .with_config(config.dropdown_config())
            .load_options(path)
            .await?;
        self.output(&options)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;
        let base_url = config.base_url()?;
        config.http_client_config()?;
        config.resolve_api_key()?;

        self.output(&json!({
            "valid": true,
            "base_url": base_url,
            "pagination": config.pagination,
        }))
    }

    /// Print a value as JSON
    fn output<V: Serialize>(&self, value: &V) -> Result<()> {
        let text = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{text}");
        Ok(())
    }
}
