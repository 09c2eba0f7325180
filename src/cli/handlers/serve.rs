use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let addr = ctx.config.listen_addr();
    let schema = build_schema(ctx.backend()?);

    println!(
        "Starting GraphQL server on {}",
        format!("http://{}/graphql", addr).cyan()
    );
    println!("GraphiQL IDE: {}", format!("http://{}", addr).cyan());
    println!("Backend: {}", ctx.config.backend.base_url.dimmed());

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &addr))?;
    Ok(())
}
