//! # ElasticSearch Mapping to CSV
//!
//! This crate reads an ElasticSearch index mapping document and lists every
//! property it defines as a `name,type` CSV.
//!
//! The pipeline has two steps: [`extract`] walks the fixed
//! `<index>.mappings.items.properties` path of the parsed JSON and returns the
//! properties as [`FieldRecord`]s, then [`emit`] writes them under a fixed header.

pub mod constants;
pub mod emit;
pub mod errors;
pub mod extract;
pub mod types;

pub use emit::{emit, to_csv_string};
pub use errors::{MappingError, StructureError};
pub use extract::{extract, extract_from_value, read_mapping_file};
pub use types::FieldRecord;
