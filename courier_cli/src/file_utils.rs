use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use courier_optimizer::{
    json::catalog_file::load_catalog,
    problem::{builtin_catalog::builtin_catalog, catalog::Catalog, order::Order},
};

/// JSON files of a folder and its subfolders, sorted by path.
pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(read_folder(&path)?);
        } else if path.extension().is_some_and(|extension| extension == "json") {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

/// Reads an order from a JSON file, or from stdin when `path` is `-`.
pub fn read_order(path: &Path) -> Result<Order, anyhow::Error> {
    let order = if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        serde_json::from_str(&input)?
    } else {
        let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid order in {}", path.display()))?
    };

    Ok(order)
}

pub fn read_catalog(path: Option<&Path>) -> Result<Arc<Catalog>, anyhow::Error> {
    let catalog = match path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Cannot load catalog {}", path.display()))?,
        None => builtin_catalog()?,
    };

    Ok(Arc::new(catalog))
}
