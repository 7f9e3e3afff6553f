use std::sync::Arc;

use crate::{
    problem::{catalog::Catalog, location::LocationIdx, order::Order},
    solver::center_weights::CenterWeights,
};

/// Three centers holding 3, 40 and 0.5 units for the order returned by
/// [`scenario_order`], at 3, 2 and 2 distance units from the hub.
pub fn create_scenario_catalog() -> Catalog {
    let mut builder = Catalog::builder();
    builder
        .set_hub("L1")
        .add_center("C1")
        .add_center("C2")
        .add_center("C3")
        .add_product("P1", 3.0, "C1")
        .add_product("P2", 40.0, "C2")
        .add_product("P3", 0.5, "C3")
        .add_symmetric_distance("C1", "L1", 3.0)
        .add_symmetric_distance("C2", "L1", 2.0)
        .add_symmetric_distance("C3", "L1", 2.0);

    builder.build().unwrap()
}

pub fn scenario_order() -> Order {
    Order::new().with("P1", 1).with("P2", 1).with("P3", 1)
}

pub fn scenario_centers(catalog: &Catalog) -> [LocationIdx; 3] {
    ["C1", "C2", "C3"].map(|center| catalog.location_id(center).unwrap())
}

pub fn scenario_weights(catalog: &Catalog) -> CenterWeights {
    CenterWeights::from_order(catalog, &scenario_order()).unwrap()
}

/// A catalog with one product per center and the given `(center -> hub,
/// hub -> center)` distances.
pub fn create_test_catalog(hub_distances: &[(f64, f64)]) -> Arc<Catalog> {
    let mut builder = Catalog::builder();
    builder.set_hub("HUB");

    for (index, &(to_hub, from_hub)) in hub_distances.iter().enumerate() {
        let center = format!("C{index}");
        builder
            .add_center(center.clone())
            .add_product(format!("P{index}"), 1.0, center.clone())
            .add_distance(center.clone(), "HUB", to_hub)
            .add_distance("HUB", center, from_hub);
    }

    Arc::new(builder.build().unwrap())
}
