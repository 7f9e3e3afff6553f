use std::{fs::File, io::BufReader, path::Path};

use thiserror::Error;
use tracing::info;

use crate::{error::CatalogError, problem::catalog::Catalog};

use super::types::JsonCatalog;

#[derive(Error, Debug)]
pub enum CatalogFileError {
    #[error("Failed to open catalog file")]
    Open(#[from] std::io::Error),
    #[error("Failed to parse catalog file")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid catalog")]
    Invalid(#[from] CatalogError),
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogFileError> {
    let file = File::open(path)?;
    let json: JsonCatalog = serde_json::from_reader(BufReader::new(file))?;
    let catalog = json.build_catalog()?;

    info!(
        path = %path.display(),
        centers = catalog.centers().len(),
        products = catalog.products().len(),
        symmetric = catalog.distances().is_symmetric(),
        "loaded catalog"
    );

    Ok(catalog)
}
