pub mod calculate_cost;
pub mod quote;

use courier_optimizer::problem::{catalog::Catalog, order::Order};

use crate::error::ApiError;

/// Rejects orders naming products the catalog does not know.
pub(crate) fn validate_order(catalog: &Catalog, order: &Order) -> Result<(), ApiError> {
    let unknown = order
        .product_codes()
        .filter(|code| catalog.product(code).is_none())
        .collect::<Vec<_>>();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "Unknown product codes: {}",
            unknown.join(", ")
        )))
    }
}
