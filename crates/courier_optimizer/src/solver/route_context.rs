use crate::{
    error::EngineError,
    problem::{
        catalog::Catalog,
        distance_table::{Distance, DistanceTable},
        location::{Location, LocationIdx},
        slab_pricer::SlabPricer,
    },
};

/// Read-only view over everything needed to price a route.
#[derive(Clone, Copy)]
pub struct RouteContext<'a> {
    locations: &'a [Location],
    distances: &'a DistanceTable,
    pricer: &'a SlabPricer,
    hub: LocationIdx,
}

impl<'a> RouteContext<'a> {
    pub fn new(
        locations: &'a [Location],
        distances: &'a DistanceTable,
        pricer: &'a SlabPricer,
        hub: LocationIdx,
    ) -> Self {
        Self {
            locations,
            distances,
            pricer,
            hub,
        }
    }

    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        Self::new(
            catalog.locations(),
            catalog.distances(),
            catalog.pricer(),
            catalog.hub(),
        )
    }

    pub fn hub(&self) -> LocationIdx {
        self.hub
    }

    pub fn pricer(&self) -> &SlabPricer {
        self.pricer
    }

    pub fn location_name(&self, location_id: LocationIdx) -> String {
        self.locations
            .get(location_id.get())
            .map(|location| location.external_id().to_owned())
            .unwrap_or_else(|| location_id.to_string())
    }

    /// Directed distance, failing loudly when the pair is not in the table.
    #[inline]
    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> Result<Distance, EngineError> {
        self.distances
            .get(from, to)
            .ok_or_else(|| EngineError::MissingDistance {
                from: self.location_name(from),
                to: self.location_name(to),
            })
    }
}
