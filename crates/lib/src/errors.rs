use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for reading a mapping and writing it out as CSV.
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Failed to read mapping file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse mapping JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unexpected mapping structure: {0}")]
    Structure(#[from] StructureError),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// The ways a syntactically valid document can fail to match the expected
/// `<index>.mappings.items.properties` shape.
///
/// Every variant carries the JSON path at which navigation stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("expected an object at '{path}'")]
    NotAnObject { path: String },
    #[error("the document is an empty object; expected a single index name")]
    EmptyDocument,
    #[error("expected a single index, found {}: {}", .0.len(), .0.join(", "))]
    MultipleIndices(Vec<String>),
    #[error("missing key '{key}' at '{path}'")]
    MissingKey { path: String, key: String },
    #[error("descriptor for field '{field}' is not an object")]
    InvalidDescriptor { field: String },
    #[error("field '{field}' has no 'type'")]
    MissingType { field: String },
    #[error("'type' of field '{field}' is not a string")]
    TypeNotString { field: String },
}
