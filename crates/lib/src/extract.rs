//! # Mapping Extraction
//!
//! Walks an ElasticSearch mapping document down the fixed
//! `<index>.mappings.items.properties` path and collects one [`FieldRecord`]
//! per property, in the order the properties appear in the document.

use crate::constants::{PROPERTIES_PATH, TYPE_KEY};
use crate::errors::{MappingError, StructureError};
use crate::types::FieldRecord;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The JSON path of the document root, as used in error messages.
const ROOT_PATH: &str = "$";

/// Reads the mapping document at `path` and extracts its field records.
pub fn read_mapping_file(path: impl AsRef<Path>) -> Result<Vec<FieldRecord>, MappingError> {
    let path = path.as_ref();
    info!("Reading mapping document from '{}'", path.display());
    let raw_json = fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract(&raw_json)
}

/// Parses raw JSON text and extracts the `(name, type)` pair of every property.
///
/// Fails with [`MappingError::Parse`] if the text is not valid JSON and with
/// [`MappingError::Structure`] if it does not have the expected shape. On
/// failure no records are returned.
pub fn extract(raw_json: &str) -> Result<Vec<FieldRecord>, MappingError> {
    let document: Value = serde_json::from_str(raw_json)?;
    Ok(extract_from_value(&document)?)
}

/// Extracts the field records from an already parsed mapping document.
pub fn extract_from_value(document: &Value) -> Result<Vec<FieldRecord>, StructureError> {
    let root = as_object(document, ROOT_PATH)?;
    let index_name = single_index_name(root)?;
    debug!("Using index '{index_name}'");

    let mut path = format!("{ROOT_PATH}.{index_name}");
    let mut current = as_object(&root[index_name], &path)?;

    for key in PROPERTIES_PATH {
        let next = current.get(key).ok_or_else(|| StructureError::MissingKey {
            path: path.clone(),
            key: key.to_string(),
        })?;
        path = format!("{path}.{key}");
        current = as_object(next, &path)?;
    }

    let records = current
        .iter()
        .map(|(field, descriptor)| field_record(field, descriptor))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Extracted {} properties from index '{index_name}'", records.len());
    Ok(records)
}

/// Returns the name of the only top-level key of the document.
fn single_index_name(root: &Map<String, Value>) -> Result<&str, StructureError> {
    let mut keys = root.keys();
    match (keys.next(), keys.next()) {
        (None, _) => Err(StructureError::EmptyDocument),
        (Some(name), None) => Ok(name),
        (Some(_), Some(_)) => Err(StructureError::MultipleIndices(
            root.keys().cloned().collect(),
        )),
    }
}

fn field_record(field: &str, descriptor: &Value) -> Result<FieldRecord, StructureError> {
    let descriptor = descriptor
        .as_object()
        .ok_or_else(|| StructureError::InvalidDescriptor {
            field: field.to_string(),
        })?;
    let field_type = descriptor
        .get(TYPE_KEY)
        .ok_or_else(|| StructureError::MissingType {
            field: field.to_string(),
        })?
        .as_str()
        .ok_or_else(|| StructureError::TypeNotString {
            field: field.to_string(),
        })?;
    Ok(FieldRecord::new(field, field_type))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, StructureError> {
    value.as_object().ok_or_else(|| StructureError::NotAnObject {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_index_name_rejects_multiple_indices() {
        let document = json!({ "first": {}, "second": {} });
        let root = document.as_object().unwrap();
        assert_eq!(
            single_index_name(root),
            Err(StructureError::MultipleIndices(vec![
                "first".to_string(),
                "second".to_string()
            ]))
        );
    }

    #[test]
    fn test_field_record_ignores_extra_descriptor_keys() {
        let descriptor = json!({ "type": "text", "analyzer": "standard", "fields": {} });
        assert_eq!(
            field_record("title", &descriptor),
            Ok(FieldRecord::new("title", "text"))
        );
    }

    #[test]
    fn test_field_record_rejects_non_object_descriptor() {
        assert_eq!(
            field_record("title", &json!("text")),
            Err(StructureError::InvalidDescriptor {
                field: "title".to_string()
            })
        );
    }
}
