//! Catalog result records.
//!
//! A `CatalogRecord` is one row of a catalog metadata query (for columns, a
//! `sys.columns` join), handed to the model layer by the host's data access
//! code. Getters follow the "safe get" convention of driver metadata reads:
//! a missing or wrong-typed field yields the type's default instead of
//! failing, with a warning logged, so a single malformed field does not
//! abandon a whole catalog refresh.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

/// A single field value within a catalog record.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValue {
    /// SQL NULL.
    Null,
    /// Integer value (any of the catalog's int/bigint/tinyint fields).
    Int(i64),
    /// Character value.
    Str(String),
    /// Bit value.
    Bool(bool),
}

impl CatalogValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, CatalogValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CatalogValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CatalogValue::Int(n) => Some(*n),
            CatalogValue::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogValue::Null => write!(f, "NULL"),
            CatalogValue::Int(n) => write!(f, "{}", n),
            CatalogValue::Str(s) => write!(f, "{}", s),
            CatalogValue::Bool(b) => write!(f, "{}", if *b { 1 } else { 0 }),
        }
    }
}

/// One row of a database catalog metadata query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRecord {
    fields: BTreeMap<String, CatalogValue>,
}

impl CatalogRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: CatalogValue) {
        self.fields.insert(name.into(), value);
    }

    /// Builder-style insertion of an integer field.
    pub fn with_int(mut self, name: impl Into<String>, value: i64) -> Self {
        self.set(name, CatalogValue::Int(value));
        self
    }

    /// Builder-style insertion of a string field.
    pub fn with_str(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, CatalogValue::Str(value.into()));
        self
    }

    /// Builder-style insertion of a bit field.
    pub fn with_bool(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, CatalogValue::Bool(value));
        self
    }

    /// Builder-style insertion of a NULL field.
    pub fn with_null(mut self, name: impl Into<String>) -> Self {
        self.set(name, CatalogValue::Null);
        self
    }

    /// Get a raw field value.
    pub fn get(&self, name: &str) -> Option<&CatalogValue> {
        self.fields.get(name)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a string field; `None` for NULL, missing, or non-string fields.
    pub fn safe_get_str(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(CatalogValue::Str(s)) => Some(s),
            Some(CatalogValue::Null) | None => None,
            Some(other) => {
                warn!(field = name, value = %other, "expected string field");
                None
            }
        }
    }

    /// Get an integer field; 0 for NULL, missing, or non-integer fields.
    pub fn safe_get_i64(&self, name: &str) -> i64 {
        match self.fields.get(name) {
            Some(v) if !v.is_null() => v.as_i64().unwrap_or_else(|| {
                warn!(field = name, value = %v, "expected integer field");
                0
            }),
            _ => 0,
        }
    }

    /// Get an integer field narrowed to `i32`.
    pub fn safe_get_i32(&self, name: &str) -> i32 {
        self.safe_get_i64(name) as i32
    }

    /// Get an optional integer field; `None` only when NULL or missing.
    pub fn safe_get_opt_i32(&self, name: &str) -> Option<i32> {
        match self.fields.get(name) {
            Some(v) if !v.is_null() => match v.as_i64() {
                Some(n) => Some(n as i32),
                None => {
                    warn!(field = name, value = %v, "expected integer field");
                    None
                }
            },
            _ => None,
        }
    }

    /// Interpret an integer flag field as a boolean (`!= 0`).
    pub fn safe_get_bool_int(&self, name: &str) -> bool {
        self.safe_get_i64(name) != 0
    }
}
