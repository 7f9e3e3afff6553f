use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

use super::{distance_table::Distance, product::Weight};

pub type Cost = f64;

pub const DEFAULT_BASE_THRESHOLD: Weight = 5.0;
pub const DEFAULT_SLAB_SIZE: Weight = 5.0;
pub const DEFAULT_BASE_RATE: Cost = 10.0;
pub const DEFAULT_SLAB_INCREMENT: Cost = 8.0;

/// Tiered per-distance pricing of a single leg.
///
/// Up to `base_threshold` the leg is billed `base_rate` per unit of
/// distance. Every started slab of `slab_size` above the threshold adds
/// `slab_increment` per unit of distance. An empty leg still pays the base
/// rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, default)]
pub struct SlabPricer {
    pub base_threshold: Weight,
    pub slab_size: Weight,
    pub base_rate: Cost,
    pub slab_increment: Cost,
}

impl Default for SlabPricer {
    fn default() -> Self {
        Self {
            base_threshold: DEFAULT_BASE_THRESHOLD,
            slab_size: DEFAULT_SLAB_SIZE,
            base_rate: DEFAULT_BASE_RATE,
            slab_increment: DEFAULT_SLAB_INCREMENT,
        }
    }
}

impl SlabPricer {
    /// Number of started slabs above the base threshold.
    #[inline]
    pub fn slabs_over_base(&self, weight: Weight) -> f64 {
        ((weight - self.base_threshold).max(0.0) / self.slab_size).ceil()
    }

    #[inline]
    pub fn rate(&self, weight: Weight) -> Cost {
        self.base_rate + self.slabs_over_base(weight) * self.slab_increment
    }

    #[inline]
    pub fn cost(&self, weight: Weight, distance: Distance) -> Cost {
        self.rate(weight) * distance
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let fields = [
            ("base_threshold", self.base_threshold),
            ("slab_size", self.slab_size),
            ("base_rate", self.base_rate),
            ("slab_increment", self.slab_increment),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidPricing(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if self.slab_size == 0.0 {
            return Err(CatalogError::InvalidPricing(String::from(
                "slab_size must be greater than zero",
            )));
        }

        Ok(())
    }
}
