/// Core data structures for experiment records and table cells
///
/// Records come straight from the nightly output file and keep their raw JSON
/// shape: baseline runs and variant runs carry different field sets, and some
/// producers write placeholders (`"loc": "-"`, `"enumo_derives_baseline": {}`).
/// Typed access goes through accessors that report the full field path when
/// something is missing.
use crate::error::RowError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One experiment record, exactly as written by the synthesis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentRecord(Value);

impl ExperimentRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `baseline_name`, when present and a string
    pub fn baseline_name(&self) -> Option<&str> {
        self.0.get("baseline_name").and_then(Value::as_str)
    }

    /// Whether the record carries a variant (`from_bv4`) run.
    ///
    /// Follows truthiness: `null`, `false`, `0` and `""` count as absent.
    pub fn has_variant_run(&self) -> bool {
        match self.0.get("from_bv4") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Look up a dotted field path. `null` is treated as missing.
    pub fn field(&self, path: &str) -> Result<&Value, RowError> {
        let mut current = &self.0;
        for key in path.split('.') {
            current = match current.get(key) {
                Some(Value::Null) | None => return Err(RowError::missing(path)),
                Some(v) => v,
            };
        }
        Ok(current)
    }

    pub fn str_at(&self, path: &str) -> Result<&str, RowError> {
        self.field(path)?.as_str().ok_or_else(|| RowError::wrong_type(path, "a string"))
    }

    pub fn number_at(&self, path: &str) -> Result<f64, RowError> {
        self.field(path)?.as_f64().ok_or_else(|| RowError::wrong_type(path, "a number"))
    }

    /// Length of the array at `path`
    pub fn len_at(&self, path: &str) -> Result<usize, RowError> {
        self.field(path)?.as_array().map(Vec::len).ok_or_else(|| RowError::wrong_type(path, "an array"))
    }

    /// Any scalar at `path` as a cell (integers stay integers, strings pass through)
    pub fn cell_at(&self, path: &str) -> Result<Cell, RowError> {
        match self.field(path)? {
            Value::Number(n) => Ok(Cell::from_json_number(n)),
            Value::String(s) => Ok(Cell::Text(s.clone())),
            Value::Bool(b) => Ok(Cell::Text(b.to_string())),
            _ => Err(RowError::wrong_type(path, "a scalar")),
        }
    }

    /// Derivability result stored under `path`
    pub fn derivability(&self, path: &str) -> Result<DerivabilityResult, RowError> {
        let value = self.field(path)?;
        for key in ["can", "cannot", "time"] {
            if value.get(key).is_none_or(Value::is_null) {
                return Err(RowError::missing(&format!("{}.{}", path, key)));
            }
        }
        DerivabilityResult::deserialize(value).map_err(|_| RowError::wrong_type(path, "a derivability result"))
    }
}

impl From<Value> for ExperimentRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Outcome of deriving one rule set from another
///
/// `can` and `cannot` partition the tested rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivabilityResult {
    pub can: Vec<String>,
    pub cannot: Vec<String>,
    pub time: f64,
}

impl DerivabilityResult {
    /// Number of rules that were tested
    pub fn total(&self) -> usize {
        self.can.len() + self.cannot.len()
    }
}

/// A display value in a report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Cell {
    fn from_json_number(n: &serde_json::Number) -> Self {
        match n.as_i64() {
            Some(i) => Cell::Integer(i),
            None => Cell::Number(n.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Cell::Integer(n as i64)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

#[cfg(test)]
#[path = "data_structures_test.rs"]
mod data_structures_test;
