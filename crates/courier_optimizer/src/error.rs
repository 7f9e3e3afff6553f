use thiserror::Error;

/// Failures of a single cost computation.
///
/// Both variants are lookup failures against the catalog. They are not
/// transient: retrying with the same order and catalog fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unknown product code '{0}'")]
    UnknownProduct(String),
    #[error("No distance from '{from}' to '{to}'")]
    MissingDistance { from: String, to: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Catalog has no hub")]
    MissingHub,
    #[error("Catalog has no centers")]
    NoCenters,
    #[error("Location '{0}' is declared more than once")]
    DuplicateLocation(String),
    #[error("Product '{0}' is declared more than once")]
    DuplicateProduct(String),
    #[error("Product '{product}' is stocked at unknown center '{center}'")]
    UnknownCenter { product: String, center: String },
    #[error("Product '{product}' has invalid unit weight {weight}")]
    InvalidWeight { product: String, weight: f64 },
    #[error("Distance references unknown location '{0}'")]
    UnknownLocation(String),
    #[error("Distance from '{from}' to '{to}' is invalid: {distance}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
    #[error("Distance from '{0}' to itself is not allowed")]
    SelfDistance(String),
    #[error("Distance from '{from}' to '{to}' is declared more than once")]
    DuplicateDistance { from: String, to: String },
    #[error("Missing distance from '{from}' to '{to}'")]
    MissingHubDistance { from: String, to: String },
    #[error("Invalid pricing: {0}")]
    InvalidPricing(String),
}
