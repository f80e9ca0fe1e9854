//! `cinerec catalog` command - list items in catalog order

use serde_json::json;

use crate::cli::{CatalogArgs, Cli, OutputFormat};
use crate::commands::data::load_catalog;
use crate::commands::render::print_json;
use cinerec_core::error::Result;

/// Execute the catalog command
pub fn execute(cli: &Cli, args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    match cli.format {
        OutputFormat::Json => {
            print_json(&json!({
                "count": catalog.len(),
                "items": catalog.items(),
            }))?;
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Movie Dataset ({} items):", catalog.len());
            }
            for (idx, item) in catalog.items().iter().enumerate() {
                println!("{}. {} - {}", idx + 1, item.id, item.tags);
            }
        }
    }

    Ok(())
}
