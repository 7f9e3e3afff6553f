use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::{
    distance_table::Distance, product::Weight, slab_pricer::Cost,
};

use super::{
    center_weights::CenterWeights,
    route::{Leg, LegKind},
    route_context::RouteContext,
    route_search::SearchResult,
};

/// Rounds a cost to the integer reported to clients, ties to even.
pub fn round_cost(cost: Cost) -> i64 {
    cost.round_ties_even() as i64
}

/// Detailed outcome of one optimization.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Quote {
    pub minimum_cost: i64,
    pub total_cost: Cost,
    pub search: String,
    pub route: Vec<String>,
    pub legs: Vec<QuoteLeg>,
    pub center_weights: Vec<QuoteCenterWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct QuoteLeg {
    pub from: String,
    pub to: String,
    pub kind: LegKind,
    pub weight: Weight,
    pub distance: Distance,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct QuoteCenterWeight {
    pub center: String,
    pub weight: Weight,
}

impl Quote {
    pub(crate) fn new(
        context: &RouteContext,
        search: &str,
        weights: &CenterWeights,
        result: Option<&SearchResult>,
        legs: &[Leg],
    ) -> Self {
        let total_cost = result.map_or(0.0, |result| result.cost);

        Quote {
            minimum_cost: round_cost(total_cost),
            total_cost,
            search: search.to_owned(),
            route: result
                .map(|result| {
                    result
                        .route
                        .centers()
                        .map(|center| context.location_name(center))
                        .collect()
                })
                .unwrap_or_default(),
            legs: legs
                .iter()
                .map(|leg| QuoteLeg {
                    from: context.location_name(leg.from),
                    to: context.location_name(leg.to),
                    kind: leg.kind,
                    weight: leg.weight,
                    distance: leg.distance,
                    cost: leg.cost,
                })
                .collect(),
            center_weights: weights
                .iter()
                .map(|(center, weight)| QuoteCenterWeight {
                    center: context.location_name(center),
                    weight,
                })
                .collect(),
        }
    }
}
