use anyhow::Result;

use super::{CommandContext, execute};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let response = execute(&ctx, &document, variables.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
