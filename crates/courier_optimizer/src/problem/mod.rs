pub mod builtin_catalog;
pub mod catalog;
pub mod distance_table;
pub mod location;
pub mod order;
pub mod product;
pub mod slab_pricer;
