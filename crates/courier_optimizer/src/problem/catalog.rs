use fxhash::FxHashMap;

use crate::error::CatalogError;

use super::{
    distance_table::{Distance, DistanceTable},
    location::{Location, LocationIdx},
    product::{Product, Weight},
    slab_pricer::SlabPricer,
};

/// Immutable lookup tables the cost engine is built on.
///
/// Centers occupy the first location indices in declaration order and the
/// hub takes the last one.
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<Location>,
    location_ids: FxHashMap<String, LocationIdx>,
    centers: Vec<LocationIdx>,
    hub: LocationIdx,
    products: Vec<Product>,
    product_ids: FxHashMap<String, usize>,
    distances: DistanceTable,
    pricer: SlabPricer,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, location_id: LocationIdx) -> &Location {
        &self.locations[location_id]
    }

    pub fn location_id(&self, external_id: &str) -> Option<LocationIdx> {
        self.location_ids.get(external_id).copied()
    }

    pub fn centers(&self) -> &[LocationIdx] {
        &self.centers
    }

    pub fn hub(&self) -> LocationIdx {
        self.hub
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, code: &str) -> Option<&Product> {
        self.product_ids.get(code).map(|&index| &self.products[index])
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn pricer(&self) -> &SlabPricer {
        &self.pricer
    }
}

#[derive(Default)]
pub struct CatalogBuilder {
    hub: Option<String>,
    centers: Vec<String>,
    products: Vec<(String, Weight, String)>,
    distances: Vec<(String, String, Distance)>,
    pricer: Option<SlabPricer>,
}

impl CatalogBuilder {
    pub fn set_hub(&mut self, hub: impl Into<String>) -> &mut CatalogBuilder {
        self.hub = Some(hub.into());
        self
    }

    pub fn add_center(&mut self, center: impl Into<String>) -> &mut CatalogBuilder {
        self.centers.push(center.into());
        self
    }

    pub fn add_product(
        &mut self,
        code: impl Into<String>,
        unit_weight: Weight,
        center: impl Into<String>,
    ) -> &mut CatalogBuilder {
        self.products.push((code.into(), unit_weight, center.into()));
        self
    }

    pub fn add_distance(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: Distance,
    ) -> &mut CatalogBuilder {
        self.distances.push((from.into(), to.into(), distance));
        self
    }

    /// Declares the same distance in both directions.
    pub fn add_symmetric_distance(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        distance: Distance,
    ) -> &mut CatalogBuilder {
        let (a, b) = (a.into(), b.into());
        self.distances.push((a.clone(), b.clone(), distance));
        self.distances.push((b, a, distance));
        self
    }

    pub fn set_pricer(&mut self, pricer: SlabPricer) -> &mut CatalogBuilder {
        self.pricer = Some(pricer);
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        let hub_id = self.hub.ok_or(CatalogError::MissingHub)?;
        if self.centers.is_empty() {
            return Err(CatalogError::NoCenters);
        }

        let pricer = self.pricer.unwrap_or_default();
        pricer.validate()?;

        let mut locations = self
            .centers
            .into_iter()
            .map(Location::center)
            .collect::<Vec<_>>();
        locations.push(Location::hub(hub_id));

        let mut location_ids = FxHashMap::default();
        for (index, location) in locations.iter().enumerate() {
            let previous =
                location_ids.insert(location.external_id().to_owned(), LocationIdx::new(index));
            if previous.is_some() {
                return Err(CatalogError::DuplicateLocation(
                    location.external_id().to_owned(),
                ));
            }
        }

        let hub = LocationIdx::new(locations.len() - 1);
        let centers = (0..hub.get()).map(LocationIdx::new).collect::<Vec<_>>();

        let mut products = Vec::with_capacity(self.products.len());
        let mut product_ids = FxHashMap::default();
        for (code, unit_weight, center) in self.products {
            if !unit_weight.is_finite() || unit_weight <= 0.0 {
                return Err(CatalogError::InvalidWeight {
                    product: code,
                    weight: unit_weight,
                });
            }

            let center_id = match location_ids.get(&center) {
                Some(&id) if id != hub => id,
                _ => {
                    return Err(CatalogError::UnknownCenter {
                        product: code,
                        center,
                    });
                }
            };

            if product_ids.insert(code.clone(), products.len()).is_some() {
                return Err(CatalogError::DuplicateProduct(code));
            }

            products.push(Product::new(code, unit_weight, center_id));
        }

        let mut distances = DistanceTable::new(locations.len());
        for (from, to, distance) in self.distances {
            let from_id = *location_ids
                .get(&from)
                .ok_or_else(|| CatalogError::UnknownLocation(from.clone()))?;
            let to_id = *location_ids
                .get(&to)
                .ok_or_else(|| CatalogError::UnknownLocation(to.clone()))?;

            if from_id == to_id {
                return Err(CatalogError::SelfDistance(from));
            }

            if !distance.is_finite() || distance < 0.0 {
                return Err(CatalogError::InvalidDistance { from, to, distance });
            }

            if distances.set(from_id, to_id, distance).is_some() {
                return Err(CatalogError::DuplicateDistance { from, to });
            }
        }

        for &center in &centers {
            for (from, to) in [(center, hub), (hub, center)] {
                if !distances.contains(from, to) {
                    return Err(CatalogError::MissingHubDistance {
                        from: locations[from].external_id().to_owned(),
                        to: locations[to].external_id().to_owned(),
                    });
                }
            }
        }

        Ok(Catalog {
            locations,
            location_ids,
            centers,
            hub,
            products,
            product_ids,
            distances,
            pricer,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::CatalogError, problem::slab_pricer::SlabPricer};

    use super::{Catalog, CatalogBuilder};

    fn two_center_builder() -> CatalogBuilder {
        let mut builder = Catalog::builder();
        builder
            .set_hub("L1")
            .add_center("C1")
            .add_center("C2")
            .add_product("A", 3.0, "C1")
            .add_product("E", 25.0, "C2")
            .add_symmetric_distance("C1", "L1", 3.0)
            .add_symmetric_distance("C2", "L1", 2.0);
        builder
    }

    #[test]
    fn test_build_catalog() {
        let catalog = two_center_builder().build().unwrap();

        assert_eq!(catalog.centers().len(), 2);
        assert_eq!(catalog.location(catalog.hub()).external_id(), "L1");
        assert!(catalog.location(catalog.hub()).is_hub());

        let product = catalog.product("E").unwrap();
        assert_eq!(product.unit_weight(), 25.0);
        assert_eq!(catalog.location(product.center_id()).external_id(), "C2");
        assert!(catalog.product("Z").is_none());
        assert_eq!(catalog.pricer(), &SlabPricer::default());
    }

    #[test]
    fn test_missing_hub() {
        let mut builder = Catalog::builder();
        builder.add_center("C1");
        assert_eq!(builder.build().unwrap_err(), CatalogError::MissingHub);
    }

    #[test]
    fn test_hub_cannot_be_a_center() {
        let mut builder = two_center_builder();
        builder.add_center("L1");
        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::DuplicateLocation(String::from("L1"))
        );
    }

    #[test]
    fn test_product_at_hub_is_rejected() {
        let mut builder = two_center_builder();
        builder.add_product("X", 1.0, "L1");
        assert!(matches!(
            builder.build(),
            Err(CatalogError::UnknownCenter { .. })
        ));
    }

    #[test]
    fn test_duplicate_product() {
        let mut builder = two_center_builder();
        builder.add_product("A", 1.0, "C2");
        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::DuplicateProduct(String::from("A"))
        );
    }

    #[test]
    fn test_invalid_weight() {
        let mut builder = two_center_builder();
        builder.add_product("Z", 0.0, "C1");
        assert!(matches!(
            builder.build(),
            Err(CatalogError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_negative_distance() {
        let mut builder = two_center_builder();
        builder.add_distance("C1", "C2", -1.0);
        assert!(matches!(
            builder.build(),
            Err(CatalogError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_self_distance_is_rejected() {
        let mut builder = two_center_builder();
        builder.add_distance("C1", "C1", 5.0);
        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::SelfDistance(String::from("C1"))
        );
    }

    #[test]
    fn test_duplicate_distance() {
        let mut builder = two_center_builder();
        builder.add_distance("C1", "L1", 4.0);
        assert!(matches!(
            builder.build(),
            Err(CatalogError::DuplicateDistance { .. })
        ));
    }

    #[test]
    fn test_unknown_distance_location() {
        let mut builder = two_center_builder();
        builder.add_distance("C9", "L1", 4.0);
        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::UnknownLocation(String::from("C9"))
        );
    }

    #[test]
    fn test_hub_legs_are_required_in_both_directions() {
        let mut builder = Catalog::builder();
        builder
            .set_hub("L1")
            .add_center("C1")
            .add_distance("C1", "L1", 3.0);

        assert_eq!(
            builder.build().unwrap_err(),
            CatalogError::MissingHubDistance {
                from: String::from("L1"),
                to: String::from("C1"),
            }
        );
    }

    #[test]
    fn test_asymmetric_distances_are_kept() {
        let mut builder = two_center_builder();
        builder
            .add_distance("C1", "C2", 4.0)
            .add_distance("C2", "C1", 2.5);
        let catalog = builder.build().unwrap();

        let c1 = catalog.location_id("C1").unwrap();
        let c2 = catalog.location_id("C2").unwrap();
        assert_eq!(catalog.distances().get(c1, c2), Some(4.0));
        assert_eq!(catalog.distances().get(c2, c1), Some(2.5));
        assert!(!catalog.distances().is_symmetric());
    }
}
