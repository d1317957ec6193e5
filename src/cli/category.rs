//! Category command implementation

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::EsaApi;
use crate::client::models::flatten_categories;
use crate::error::Result;
use crate::output::json;

/// Run the categories command (also the default with no subcommand)
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let output = render(&ctx.client, ctx.format).await?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Fetch every category tree and flatten them into paths, in API order.
pub async fn fetch_paths(client: &impl EsaApi) -> Result<Vec<String>> {
    let categories = client.get_categories().await?;
    debug!("Fetched {} top-level categories", categories.len());

    let paths = flatten_categories(&categories);
    debug!("Flattened into {} paths", paths.len());
    Ok(paths)
}

/// Render category paths: one per line, or a JSON envelope.
pub async fn render(client: &impl EsaApi, format: OutputFormat) -> Result<String> {
    let paths = fetch_paths(client).await?;

    match format {
        OutputFormat::Pretty | OutputFormat::Table => Ok(paths.join("\n")),
        OutputFormat::Json => Ok(json::format_json(&paths)?),
    }
}
