use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    error::EngineError,
    problem::{catalog::Catalog, order::Order, slab_pricer::Cost},
};

use super::{
    center_weights::CenterWeights,
    quote::Quote,
    route_context::RouteContext,
    route_evaluator::route_legs,
    route_search::{RouteSearch, SearchResult, SearchStrategy},
};

/// Computes minimum delivery costs for orders against one catalog.
///
/// The engine never mutates its catalog and keeps no state between calls; a
/// single instance can serve concurrent requests.
pub struct CostEngine {
    catalog: Arc<Catalog>,
    search: Box<dyn RouteSearch>,
}

impl CostEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            search: SearchStrategy::default().into_search(),
        }
    }

    pub fn with_search(mut self, search: Box<dyn RouteSearch>) -> Self {
        self.search = search;
        self
    }

    pub fn with_strategy(self, strategy: SearchStrategy) -> Self {
        self.with_search(strategy.into_search())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn search_name(&self) -> &'static str {
        self.search.name()
    }

    fn optimize(
        &self,
        order: &Order,
    ) -> Result<(CenterWeights, Option<SearchResult>), EngineError> {
        let weights = CenterWeights::from_order(&self.catalog, order)?;
        if weights.is_empty() {
            debug!("order has no weight to ship");
            return Ok((weights, None));
        }

        let context = RouteContext::from_catalog(&self.catalog);
        let result = self.search.search(&context, &weights)?;

        if let Some(result) = &result {
            debug!(
                search = self.search.name(),
                centers = weights.len(),
                cost = result.cost,
                start = %context.location_name(result.route.start()),
                "found cheapest route"
            );
        }

        Ok((weights, result))
    }

    /// The cheapest total cost of shipping `order` to the hub, zero for an
    /// order without any positive quantity.
    #[instrument(skip_all, level = "debug")]
    pub fn compute_minimum_cost(&self, order: &Order) -> Result<Cost, EngineError> {
        let (_, result) = self.optimize(order)?;
        Ok(result.map_or(0.0, |result| result.cost))
    }

    #[instrument(skip_all, level = "debug")]
    pub fn quote(&self, order: &Order) -> Result<Quote, EngineError> {
        let (weights, result) = self.optimize(order)?;
        let context = RouteContext::from_catalog(&self.catalog);

        let legs = match &result {
            Some(result) => route_legs(&context, &weights, &result.route)?,
            None => vec![],
        };

        Ok(Quote::new(
            &context,
            self.search.name(),
            &weights,
            result.as_ref(),
            &legs,
        ))
    }
}
