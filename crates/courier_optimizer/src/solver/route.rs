use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::{
    distance_table::Distance, location::LocationIdx, product::Weight, slab_pricer::Cost,
};

/// A start center followed by the order in which the remaining centers are
/// served out of the hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    start: LocationIdx,
    rest: Vec<LocationIdx>,
}

impl Route {
    pub fn new(start: LocationIdx, rest: Vec<LocationIdx>) -> Self {
        Self { start, rest }
    }

    pub fn start(&self) -> LocationIdx {
        self.start
    }

    pub fn rest(&self) -> &[LocationIdx] {
        &self.rest
    }

    pub fn centers(&self) -> impl Iterator<Item = LocationIdx> + '_ {
        std::iter::once(self.start).chain(self.rest.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    Loaded,
    Empty,
}

/// One priced movement between two locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from: LocationIdx,
    pub to: LocationIdx,
    pub kind: LegKind,
    pub weight: Weight,
    pub distance: Distance,
    pub cost: Cost,
}
