use tracing::debug;

use crate::{
    error::EngineError, problem::location::LocationIdx, utils::permutations::try_for_each_permutation,
};

use super::{
    center_weights::CenterWeights,
    route::Route,
    route_context::RouteContext,
    route_evaluator::evaluate_route,
    route_search::{RouteSearch, SearchResult},
};

/// Tries every start center and every ordering of the remaining centers.
///
/// Evaluates `n!` routes for `n` centers. The first route reaching the
/// minimum is kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch;

impl RouteSearch for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn search(
        &self,
        context: &RouteContext,
        weights: &CenterWeights,
    ) -> Result<Option<SearchResult>, EngineError> {
        let centers = weights.centers().collect::<Vec<_>>();
        let mut best: Option<SearchResult> = None;
        let mut evaluated = 0usize;

        for &start in &centers {
            let mut rest = centers
                .iter()
                .copied()
                .filter(|&center| center != start)
                .collect::<Vec<LocationIdx>>();

            try_for_each_permutation(&mut rest, |permutation| {
                let cost = evaluate_route(context, weights, start, permutation)?;
                evaluated += 1;

                if best.as_ref().is_none_or(|best| cost < best.cost) {
                    best = Some(SearchResult {
                        route: Route::new(start, permutation.to_vec()),
                        cost,
                    });
                }

                Ok::<(), EngineError>(())
            })?;
        }

        debug!(evaluated, centers = centers.len(), "exhaustive search done");

        Ok(best)
    }
}
