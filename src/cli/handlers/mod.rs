mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use anyhow::{Context, Result};

use super::Cli;
use crate::backend::BackendClient;
use crate::config::CrmqlConfig;
use crate::graphql::build_schema;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: CrmqlConfig,
}

impl CommandContext {
    pub fn new(config: CrmqlConfig) -> Self {
        Self { config }
    }

    /// Load config from disk and apply global CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = CrmqlConfig::load(cli.config.as_deref(), &cwd)
            .context("Failed to load crmql configuration")?;

        if let Some(url) = &cli.backend_url {
            config.backend.base_url = url.clone();
        }
        if let Some(secs) = cli.timeout {
            config.backend.timeout_secs = Some(secs);
        }

        Ok(Self::new(config))
    }

    pub fn backend(&self) -> Result<BackendClient> {
        BackendClient::new(&self.config.backend).context("Failed to set up backend client")
    }
}

/// Run one GraphQL document against the backend.
fn execute(
    ctx: &CommandContext,
    document: &str,
    variables: Option<&str>,
) -> Result<async_graphql::Response> {
    let schema = build_schema(ctx.backend()?);

    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(v).context("Invalid --variables JSON")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    Ok(response)
}
