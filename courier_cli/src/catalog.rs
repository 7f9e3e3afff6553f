use std::path::PathBuf;

use clap::Args;
use courier_optimizer::json::types::JsonCatalog;

use crate::file_utils::read_catalog;

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog JSON file to validate and print, defaults to the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

pub fn run(args: CatalogArgs) -> Result<(), anyhow::Error> {
    let catalog = read_catalog(args.catalog.as_deref())?;
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonCatalog::from(catalog.as_ref()))?
    );

    Ok(())
}
