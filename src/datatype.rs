//! SQL Server data types and the per-database type catalog.
//!
//! Catalog records reference types by a database-internal integer (the user
//! type id). System types occupy fixed ids; user-defined types are added on
//! top with ids assigned by the server. Resolution happens against the type
//! catalog of the database that owns the table being loaded.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Broad classification of a data type, used for presentation and for
/// choosing which type modifiers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// BIT.
    Boolean,
    /// Exact and approximate numerics.
    Numeric,
    /// Character data, including XML and legacy text types.
    String,
    /// Date and time types.
    Datetime,
    /// Binary data, including rowversion.
    Binary,
    /// Unique row identifiers.
    Rowid,
    /// Unresolved or unclassified types.
    Unknown,
}

/// A SQL Server data type as registered in a database's type catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlServerDataType {
    name: String,
    type_id: i32,
    kind: DataKind,
    system: bool,
}

impl SqlServerDataType {
    /// Create a new data type entry.
    pub fn new(name: impl Into<String>, type_id: i32, kind: DataKind, system: bool) -> Self {
        Self {
            name: name.into(),
            type_id,
            kind,
            system,
        }
    }

    /// Type name as it appears in DDL.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database-internal type id.
    pub fn type_id(&self) -> i32 {
        self.type_id
    }

    /// Broad classification of the type.
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// Whether this is a built-in system type.
    pub fn is_system(&self) -> bool {
        self.system
    }
}

/// Type catalog of one database: user type id -> data type.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    types: HashMap<i32, Arc<SqlServerDataType>>,
}

impl TypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-seeded with the built-in system types at their
    /// fixed user type ids.
    pub fn with_system_types() -> Self {
        let mut catalog = Self::new();
        for &(id, name, kind) in SYSTEM_TYPES {
            catalog.register(SqlServerDataType::new(name, id, kind, true));
        }
        catalog
    }

    /// Register a type, replacing any previous entry with the same id.
    pub fn register(&mut self, data_type: SqlServerDataType) -> Arc<SqlServerDataType> {
        let entry = Arc::new(data_type);
        self.types.insert(entry.type_id(), Arc::clone(&entry));
        entry
    }

    /// Look up a type by user type id.
    pub fn find(&self, user_type_id: i32) -> Option<Arc<SqlServerDataType>> {
        self.types.get(&user_type_id).cloned()
    }

    /// Resolve a type by user type id, failing when it is not registered.
    pub fn resolve(&self, user_type_id: i32) -> Result<Arc<SqlServerDataType>> {
        self.find(user_type_id)
            .ok_or(Error::TypeNotFound { user_type_id })
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Built-in system types with their fixed user type ids.
const SYSTEM_TYPES: &[(i32, &str, DataKind)] = &[
    (34, "image", DataKind::Binary),
    (35, "text", DataKind::String),
    (36, "uniqueidentifier", DataKind::Rowid),
    (40, "date", DataKind::Datetime),
    (41, "time", DataKind::Datetime),
    (42, "datetime2", DataKind::Datetime),
    (43, "datetimeoffset", DataKind::Datetime),
    (48, "tinyint", DataKind::Numeric),
    (52, "smallint", DataKind::Numeric),
    (56, "int", DataKind::Numeric),
    (58, "smalldatetime", DataKind::Datetime),
    (59, "real", DataKind::Numeric),
    (60, "money", DataKind::Numeric),
    (61, "datetime", DataKind::Datetime),
    (62, "float", DataKind::Numeric),
    (98, "sql_variant", DataKind::Unknown),
    (99, "ntext", DataKind::String),
    (104, "bit", DataKind::Boolean),
    (106, "decimal", DataKind::Numeric),
    (108, "numeric", DataKind::Numeric),
    (122, "smallmoney", DataKind::Numeric),
    (127, "bigint", DataKind::Numeric),
    (165, "varbinary", DataKind::Binary),
    (167, "varchar", DataKind::String),
    (173, "binary", DataKind::Binary),
    (175, "char", DataKind::String),
    (189, "rowversion", DataKind::Binary),
    (231, "nvarchar", DataKind::String),
    (239, "nchar", DataKind::String),
    (241, "xml", DataKind::String),
    (256, "sysname", DataKind::String),
];
