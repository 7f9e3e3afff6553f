use super::location::LocationIdx;

pub type Weight = f64;

/// A product stocked at exactly one center.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    code: String,
    unit_weight: Weight,
    center_id: LocationIdx,
}

impl Product {
    pub(crate) fn new(code: String, unit_weight: Weight, center_id: LocationIdx) -> Self {
        Self {
            code,
            unit_weight,
            center_id,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn unit_weight(&self) -> Weight {
        self.unit_weight
    }

    pub fn center_id(&self) -> LocationIdx {
        self.center_id
    }
}
