/// Loading experiment records from the nightly output file
///
/// The file is a single JSON array of objects, appended to by every
/// synthesis run. Records are handed to the generators untouched.
use crate::error::LoadError;
use crate::types::ExperimentRecord;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a JSON document holding an array of experiment records
pub fn parse_records(json: &str) -> Result<Vec<ExperimentRecord>, LoadError> {
    let document: Value = serde_json::from_str(json)?;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(_) => return Err(LoadError::NotAnArray("an object")),
        Value::String(_) => return Err(LoadError::NotAnArray("a string")),
        Value::Number(_) => return Err(LoadError::NotAnArray("a number")),
        Value::Bool(_) => return Err(LoadError::NotAnArray("a boolean")),
        Value::Null => return Err(LoadError::NotAnArray("null")),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_object() { Ok(ExperimentRecord::new(item)) } else { Err(LoadError::NotAnObject { index }) }
        })
        .collect()
}

/// Read and parse the records file at `path`
pub fn load_records(path: &Path) -> Result<Vec<ExperimentRecord>, LoadError> {
    debug!("Loading experiment records from {:?}", path);

    let contents =
        fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let records = parse_records(&contents)?;

    debug!("Loaded {} records", records.len());
    Ok(records)
}
