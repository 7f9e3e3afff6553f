use crate::error::CatalogError;

use super::catalog::Catalog;

pub const BUILTIN_HUB: &str = "L1";

/// The catalog the service ships with: nine products over three centers,
/// delivered to hub `L1`.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let mut builder = Catalog::builder();

    builder
        .set_hub(BUILTIN_HUB)
        .add_center("C1")
        .add_center("C2")
        .add_center("C3");

    builder
        .add_product("A", 3.0, "C1")
        .add_product("B", 2.0, "C1")
        .add_product("C", 8.0, "C1")
        .add_product("D", 12.0, "C2")
        .add_product("E", 25.0, "C2")
        .add_product("F", 15.0, "C2")
        .add_product("G", 0.5, "C3")
        .add_product("H", 1.0, "C3")
        .add_product("I", 2.0, "C3");

    builder
        .add_symmetric_distance("C1", BUILTIN_HUB, 3.0)
        .add_symmetric_distance("C2", BUILTIN_HUB, 2.0)
        .add_symmetric_distance("C3", BUILTIN_HUB, 2.0)
        .add_symmetric_distance("C1", "C2", 4.0)
        .add_symmetric_distance("C1", "C3", 3.0)
        .add_symmetric_distance("C2", "C3", 3.0);

    builder.build()
}
