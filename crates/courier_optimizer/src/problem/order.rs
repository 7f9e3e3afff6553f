use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub type Quantity = u32;

/// Requested quantity per product code.
///
/// A zero quantity and an absent product mean the same thing. Entries are
/// kept sorted by product code so that every traversal of an order is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Order(BTreeMap<String, Quantity>);

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, product: impl Into<String>, quantity: Quantity) -> Self {
        self.set(product, quantity);
        self
    }

    pub fn set(&mut self, product: impl Into<String>, quantity: Quantity) {
        self.0.insert(product.into(), quantity);
    }

    pub fn quantity(&self, product: &str) -> Quantity {
        self.0.get(product).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.0
            .iter()
            .map(|(product, &quantity)| (product.as_str(), quantity))
    }

    pub fn product_codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, Quantity)> for Order {
    fn from_iter<I: IntoIterator<Item = (S, Quantity)>>(iter: I) -> Self {
        Order(
            iter.into_iter()
                .map(|(product, quantity)| (product.into(), quantity))
                .collect(),
        )
    }
}
