use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::CatalogError,
    problem::{
        catalog::Catalog, distance_table::Distance, location::LocationIdx, product::Weight,
        slab_pricer::SlabPricer,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Catalog")]
pub struct JsonCatalog {
    pub hub: String,
    pub centers: Vec<String>,
    pub products: Vec<JsonProduct>,
    pub distances: Vec<JsonDistance>,
    pub pricing: Option<SlabPricer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Product")]
pub struct JsonProduct {
    pub code: String,
    pub weight: Weight,
    pub center: String,
}

/// A directed distance entry. The reverse direction needs its own entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Distance")]
pub struct JsonDistance {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

impl JsonCatalog {
    #[instrument(skip_all, level = "debug")]
    pub fn build_catalog(self) -> Result<Catalog, CatalogError> {
        let mut builder = Catalog::builder();

        builder.set_hub(self.hub);

        for center in self.centers {
            builder.add_center(center);
        }

        for product in self.products {
            builder.add_product(product.code, product.weight, product.center);
        }

        for entry in self.distances {
            builder.add_distance(entry.from, entry.to, entry.distance);
        }

        if let Some(pricing) = self.pricing {
            builder.set_pricer(pricing);
        }

        builder.build()
    }
}

impl From<&Catalog> for JsonCatalog {
    fn from(catalog: &Catalog) -> Self {
        let name = |location_id: LocationIdx| catalog.location(location_id).external_id().to_owned();

        JsonCatalog {
            hub: name(catalog.hub()),
            centers: catalog.centers().iter().map(|&center| name(center)).collect(),
            products: catalog
                .products()
                .iter()
                .map(|product| JsonProduct {
                    code: product.code().to_owned(),
                    weight: product.unit_weight(),
                    center: name(product.center_id()),
                })
                .collect(),
            distances: catalog
                .distances()
                .entries()
                .map(|(from, to, distance)| JsonDistance {
                    from: name(from),
                    to: name(to),
                    distance,
                })
                .collect(),
            pricing: Some(*catalog.pricer()),
        }
    }
}
