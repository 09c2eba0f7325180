use anyhow::Result;
use clap::Parser;

use crmql::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use crmql::cli::{Cli, Commands};
use crmql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref());

    // The schema is static; print it before touching config or the backend.
    if let Commands::Schema = cli.command {
        return handle_schema();
    }

    let ctx = CommandContext::load(&cli)?;

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(),
    }
}
