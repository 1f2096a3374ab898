//! # Mapping Constants
//!
//! The fixed keys of an ElasticSearch mapping document and the labels of the
//! CSV columns produced from it.

/// Key holding the mapping definitions of an index.
pub const MAPPINGS_KEY: &str = "mappings";

/// Key holding the document type (`items`) inside `mappings`.
pub const ITEMS_KEY: &str = "items";

/// Key holding the field definitions of the document type.
pub const PROPERTIES_KEY: &str = "properties";

/// Key holding the ElasticSearch type inside a field descriptor.
pub const TYPE_KEY: &str = "type";

/// The path walked below the index name to reach the field definitions.
pub const PROPERTIES_PATH: [&str; 3] = [MAPPINGS_KEY, ITEMS_KEY, PROPERTIES_KEY];

/// Header label of the field name column.
pub const COLUMN_NAME: &str = "name";

/// Header label of the field type column.
pub const COLUMN_TYPE: &str = "type";
