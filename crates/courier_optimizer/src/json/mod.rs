pub mod catalog_file;
pub mod types;
