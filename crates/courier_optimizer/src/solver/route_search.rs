use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::EngineError, problem::slab_pricer::Cost};

use super::{
    center_weights::CenterWeights, exhaustive_search::ExhaustiveSearch,
    linear_start_search::LinearStartSearch, route::Route, route_context::RouteContext,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub route: Route,
    pub cost: Cost,
}

/// Strategy picking the cheapest route through the centers of `weights`.
///
/// Returns `None` when there is no center to visit.
pub trait RouteSearch: Send + Sync {
    fn name(&self) -> &'static str;

    fn search(
        &self,
        context: &RouteContext,
        weights: &CenterWeights,
    ) -> Result<Option<SearchResult>, EngineError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    #[default]
    Exhaustive,
    LinearStart,
}

impl SearchStrategy {
    pub fn into_search(self) -> Box<dyn RouteSearch> {
        match self {
            SearchStrategy::Exhaustive => Box::new(ExhaustiveSearch),
            SearchStrategy::LinearStart => Box::new(LinearStartSearch),
        }
    }
}

impl Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Exhaustive => write!(f, "exhaustive"),
            SearchStrategy::LinearStart => write!(f, "linear_start"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "exhaustive" => Ok(SearchStrategy::Exhaustive),
            "linear_start" | "linear-start" => Ok(SearchStrategy::LinearStart),
            _ => Err(format!("Unknown search strategy '{value}'")),
        }
    }
}
