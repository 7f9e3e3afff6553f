use tracing::{debug, instrument};

use crate::{
    error::EngineError,
    problem::{
        catalog::Catalog,
        location::LocationIdx,
        order::Order,
        product::Weight,
    },
};

/// Weight to pick up per center, restricted to centers with a positive
/// weight and sorted by location index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterWeights(Vec<(LocationIdx, Weight)>);

impl CenterWeights {
    /// Aggregates `quantity * unit_weight` per home center.
    ///
    /// Every product code of the order must exist in the catalog, including
    /// the ones ordered with a zero quantity.
    #[instrument(skip_all, level = "debug")]
    pub fn from_order(catalog: &Catalog, order: &Order) -> Result<Self, EngineError> {
        let mut totals: Vec<Weight> = vec![0.0; catalog.locations().len()];

        for (code, quantity) in order.iter() {
            let product = catalog
                .product(code)
                .ok_or_else(|| EngineError::UnknownProduct(code.to_owned()))?;

            if quantity == 0 {
                continue;
            }

            totals[product.center_id().get()] += product.unit_weight() * f64::from(quantity);
        }

        let weights = Self::from_weights(
            totals
                .into_iter()
                .enumerate()
                .map(|(index, weight)| (LocationIdx::new(index), weight)),
        );
        debug!(
            centers = weights.len(),
            total = weights.total_weight(),
            "aggregated order weights"
        );

        Ok(weights)
    }

    /// Builds the mapping from raw `(center, weight)` pairs. Repeated centers
    /// are summed and non-positive totals dropped.
    pub fn from_weights(weights: impl IntoIterator<Item = (LocationIdx, Weight)>) -> Self {
        let mut entries = weights.into_iter().collect::<Vec<_>>();
        entries.sort_by_key(|&(center, _)| center);

        let mut merged: Vec<(LocationIdx, Weight)> = Vec::with_capacity(entries.len());
        for (center, weight) in entries {
            match merged.last_mut() {
                Some((last, total)) if *last == center => *total += weight,
                _ => merged.push((center, weight)),
            }
        }

        merged.retain(|&(_, weight)| weight > 0.0);
        CenterWeights(merged)
    }

    /// Weight at `center`, zero when nothing is picked up there.
    pub fn get(&self, center: LocationIdx) -> Weight {
        self.0
            .binary_search_by_key(&center, |&(id, _)| id)
            .map(|position| self.0[position].1)
            .unwrap_or(0.0)
    }

    pub fn centers(&self) -> impl Iterator<Item = LocationIdx> + '_ {
        self.0.iter().map(|&(center, _)| center)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationIdx, Weight)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_weight(&self) -> Weight {
        self.0.iter().map(|&(_, weight)| weight).sum()
    }
}
