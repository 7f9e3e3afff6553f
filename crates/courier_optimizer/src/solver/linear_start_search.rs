use crate::{error::EngineError, problem::slab_pricer::Cost};

use super::{
    center_weights::CenterWeights,
    route::Route,
    route_context::RouteContext,
    route_evaluator::evaluate_route,
    route_search::{RouteSearch, SearchResult},
};

/// Picks the start center in a single pass.
///
/// Every non-start center costs one empty leg out of the hub plus its loaded
/// leg back, whatever its position, so the order of the remaining centers
/// never changes the total. The cheapest route starts at the center whose
/// empty leg is the most expensive one.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearStartSearch;

impl RouteSearch for LinearStartSearch {
    fn name(&self) -> &'static str {
        "linear_start"
    }

    fn search(
        &self,
        context: &RouteContext,
        weights: &CenterWeights,
    ) -> Result<Option<SearchResult>, EngineError> {
        let centers = weights.centers().collect::<Vec<_>>();

        let start = match centers.as_slice() {
            [] => return Ok(None),
            [single] => *single,
            _ => {
                let mut best: Option<(Cost, usize)> = None;
                for (position, &center) in centers.iter().enumerate() {
                    let empty_leg = context
                        .pricer()
                        .cost(0.0, context.distance(context.hub(), center)?);

                    if best.is_none_or(|(saved, _)| empty_leg > saved) {
                        best = Some((empty_leg, position));
                    }
                }

                best.map_or(centers[0], |(_, position)| centers[position])
            }
        };

        let rest = centers
            .into_iter()
            .filter(|&center| center != start)
            .collect::<Vec<_>>();
        let cost = evaluate_route(context, weights, start, &rest)?;

        Ok(Some(SearchResult {
            route: Route::new(start, rest),
            cost,
        }))
    }
}
