use anyhow::Result;

use crate::graphql::export_sdl;

pub fn handle_schema() -> Result<()> {
    print!("{}", export_sdl());
    Ok(())
}
