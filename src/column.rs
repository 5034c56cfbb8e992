//! Table column model.
//!
//! A `TableColumn` is one column of a SQL Server table: either loaded from a
//! catalog record, authored empty for new-column editing, or copied from an
//! existing column (cross-table or cross-dialect duplication). Columns are
//! owned by their table and die with it.

use std::sync::Arc;

use tracing::debug;

use crate::datatype::{DataKind, SqlServerDataType};
use crate::error::Result;
use crate::monitor::ProgressMonitor;
use crate::record::CatalogRecord;
use crate::sqltext;
use crate::table::SqlServerTable;

/// One column of a SQL Server table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    table_name: String,
    name: String,
    // Assigned once by the record loader.
    object_id: i64,
    ordinal: i32,
    user_type_id: i32,
    data_type: Option<Arc<SqlServerDataType>>,
    max_length: i64,
    nullable: bool,
    scale: Option<i32>,
    precision: Option<i32>,
    auto_generated: bool,
    collation_name: Option<String>,
    default_value: Option<String>,
    comment: Option<String>,
    hidden: bool,
    persisted: bool,
}

impl TableColumn {
    /// Create an empty, unpersisted column for new-column authoring.
    pub fn new(table: &SqlServerTable, name: impl Into<String>) -> Self {
        Self {
            table_name: table.qualified_name(),
            name: name.into(),
            object_id: 0,
            ordinal: 0,
            user_type_id: 0,
            data_type: None,
            max_length: 0,
            nullable: true,
            scale: None,
            precision: None,
            auto_generated: false,
            collation_name: None,
            default_value: None,
            comment: None,
            hidden: false,
            persisted: false,
        }
    }

    /// Load a column from one catalog record.
    ///
    /// Populates every attribute from the record, resolves the data type
    /// against the owning table's database type catalog, and normalizes the
    /// default-value definition. Fails when the monitor is canceled or the
    /// referenced type cannot be resolved.
    pub fn from_record(
        monitor: &dyn ProgressMonitor,
        table: &SqlServerTable,
        record: &CatalogRecord,
    ) -> Result<Self> {
        monitor.check_canceled()?;

        let user_type_id = record.safe_get_i32("user_type_id");
        let data_type = table.types().resolve(user_type_id)?;

        let mut column = Self {
            table_name: table.qualified_name(),
            name: record.safe_get_str("name").unwrap_or_default().to_string(),
            object_id: record.safe_get_i64("column_id"),
            ordinal: record.safe_get_i32("column_id"),
            user_type_id,
            data_type: Some(data_type),
            max_length: record.safe_get_i64("max_length"),
            nullable: record.safe_get_bool_int("is_nullable"),
            scale: record.safe_get_opt_i32("scale"),
            precision: record.safe_get_opt_i32("precision"),
            auto_generated: record.safe_get_bool_int("is_identity"),
            collation_name: record.safe_get_str("collation_name").map(str::to_string),
            default_value: None,
            comment: None,
            hidden: record.safe_get_bool_int("is_hidden"),
            persisted: true,
        };
        column.set_default_value(record.safe_get_str("default_definition").map(str::to_string));

        debug!(
            table = %column.table_name,
            column = %column.name,
            ordinal = column.ordinal,
            "loaded column metadata"
        );
        Ok(column)
    }

    /// Copy-construct from a source column, e.g. for duplication or
    /// cross-dialect migration. Descriptive attributes including the comment
    /// carry over; the object id and ordinal belong to a loaded record and
    /// do not.
    pub fn from_column(table: &SqlServerTable, source: &TableColumn) -> Self {
        Self {
            table_name: table.qualified_name(),
            name: source.name.clone(),
            object_id: 0,
            ordinal: 0,
            user_type_id: source.user_type_id,
            data_type: source.data_type.clone(),
            max_length: source.max_length,
            nullable: source.nullable,
            scale: source.scale,
            precision: source.precision,
            auto_generated: source.auto_generated,
            collation_name: source.collation_name.clone(),
            default_value: source.default_value.clone(),
            comment: source.comment.clone(),
            hidden: source.hidden,
            persisted: false,
        }
    }

    /// Qualified name of the owning table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the column.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Catalog object id; 0 for columns not loaded from a record.
    pub fn object_id(&self) -> i64 {
        self.object_id
    }

    /// 1-based ordinal position; 0 for columns not loaded from a record.
    pub fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// Raw user type id from the catalog.
    pub fn user_type_id(&self) -> i32 {
        self.user_type_id
    }

    /// Resolved data type, if any.
    pub fn data_type(&self) -> Option<&Arc<SqlServerDataType>> {
        self.data_type.as_ref()
    }

    /// Replace the data type (editing path).
    pub fn set_data_type(&mut self, data_type: Arc<SqlServerDataType>) {
        self.user_type_id = data_type.type_id();
        self.data_type = Some(data_type);
    }

    /// Bare type name; decimal string of the raw user type id when the type
    /// is unresolved.
    pub fn type_name(&self) -> String {
        match &self.data_type {
            Some(dt) => dt.name().to_string(),
            None => self.user_type_id.to_string(),
        }
    }

    /// Type name with dialect modifiers, e.g. "nvarchar(50)", "decimal(18,2)".
    pub fn full_type_name(&self) -> String {
        let Some(dt) = &self.data_type else {
            return self.user_type_id.to_string();
        };
        match sqltext::column_type_modifiers(dt, self.max_length, self.precision, self.scale) {
            Some(modifiers) => format!("{}{}", dt.name(), modifiers),
            None => dt.name().to_string(),
        }
    }

    /// Data kind of the resolved type; `Unknown` when unresolved.
    pub fn data_kind(&self) -> DataKind {
        self.data_type
            .as_ref()
            .map(|dt| dt.kind())
            .unwrap_or(DataKind::Unknown)
    }

    /// Maximum storage length in bytes (-1 for the (max) variants).
    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    pub fn set_max_length(&mut self, max_length: i64) {
        self.max_length = max_length;
    }

    /// Whether NULL values are allowed.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    /// Numeric scale, when the catalog reports one.
    pub fn scale(&self) -> Option<i32> {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Option<i32>) {
        self.scale = scale;
    }

    /// Numeric precision, when the catalog reports one.
    pub fn precision(&self) -> Option<i32> {
        self.precision
    }

    pub fn set_precision(&mut self, precision: Option<i32>) {
        self.precision = precision;
    }

    /// Whether the column is an identity column.
    pub fn is_auto_generated(&self) -> bool {
        self.auto_generated
    }

    pub fn set_auto_generated(&mut self, auto_generated: bool) {
        self.auto_generated = auto_generated;
    }

    /// Collation name for character columns.
    pub fn collation_name(&self) -> Option<&str> {
        self.collation_name.as_deref()
    }

    pub fn set_collation_name(&mut self, collation_name: Option<String>) {
        self.collation_name = collation_name;
    }

    /// Normalized default-value expression.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Set the default-value expression. Redundant enclosing parentheses
    /// are stripped before storage; an empty value clears the default.
    pub fn set_default_value(&mut self, default_value: Option<String>) {
        self.default_value = default_value
            .as_deref()
            .map(sqltext::strip_enclosing_parens)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
    }

    /// Free-text column comment.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// Whether the catalog marks this column hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether this column came from a loaded catalog record.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::NullMonitor;
    use crate::table::SqlServerTable;
    use crate::TypeCatalog;

    fn make_table() -> SqlServerTable {
        SqlServerTable::new(
            "dbo",
            "orders",
            Arc::new(TypeCatalog::with_system_types()),
        )
    }

    fn price_record() -> CatalogRecord {
        CatalogRecord::new()
            .with_int("column_id", 4)
            .with_str("name", "price")
            .with_int("user_type_id", 106)
            .with_int("max_length", 9)
            .with_int("is_nullable", 0)
            .with_int("scale", 2)
            .with_int("precision", 18)
            .with_int("is_identity", 0)
            .with_int("is_hidden", 0)
            .with_null("collation_name")
            .with_str("default_definition", "((0))")
    }

    #[test]
    fn test_load_populates_all_fields() {
        let table = make_table();
        let column = TableColumn::from_record(&NullMonitor, &table, &price_record()).unwrap();

        assert_eq!(column.name(), "price");
        assert_eq!(column.table_name(), "dbo.orders");
        assert_eq!(column.object_id(), 4);
        assert_eq!(column.ordinal(), 4);
        assert_eq!(column.user_type_id(), 106);
        assert_eq!(column.type_name(), "decimal");
        assert_eq!(column.max_length(), 9);
        assert!(!column.is_nullable());
        assert_eq!(column.scale(), Some(2));
        assert_eq!(column.precision(), Some(18));
        assert!(!column.is_auto_generated());
        assert!(!column.is_hidden());
        assert_eq!(column.collation_name(), None);
        assert_eq!(column.default_value(), Some("0"));
        assert!(column.is_persisted());
    }

    #[test]
    fn test_load_fails_on_unknown_type() {
        let table = make_table();
        let record = price_record().with_int("user_type_id", 9999);
        let err = TableColumn::from_record(&NullMonitor, &table, &record).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::TypeNotFound { user_type_id: 9999 }
        ));
    }

    #[test]
    fn test_default_value_normalization() {
        let table = make_table();

        let record = price_record().with_str("default_definition", "((getdate()))");
        let column = TableColumn::from_record(&NullMonitor, &table, &record).unwrap();
        assert_eq!(column.default_value(), Some("getdate()"));

        // Not a fully-enclosing pair: left intact.
        let record = price_record().with_str("default_definition", "(a)+(b)");
        let column = TableColumn::from_record(&NullMonitor, &table, &record).unwrap();
        assert_eq!(column.default_value(), Some("(a)+(b)"));

        let record = price_record().with_str("default_definition", "");
        let column = TableColumn::from_record(&NullMonitor, &table, &record).unwrap();
        assert_eq!(column.default_value(), None);

        let record = price_record().with_null("default_definition");
        let column = TableColumn::from_record(&NullMonitor, &table, &record).unwrap();
        assert_eq!(column.default_value(), None);
    }

    #[test]
    fn test_full_type_name() {
        let table = make_table();
        let column = TableColumn::from_record(&NullMonitor, &table, &price_record()).unwrap();
        assert_eq!(column.full_type_name(), "decimal(18,2)");

        // No modifiers for plain int.
        let record = price_record()
            .with_int("user_type_id", 56)
            .with_int("max_length", 4);
        let column = TableColumn::from_record(&NullMonitor, &table, &record).unwrap();
        assert_eq!(column.full_type_name(), "int");

        // Unresolved type falls back to the raw id.
        let mut authored = TableColumn::new(&table, "pending");
        authored.set_max_length(16);
        assert_eq!(authored.full_type_name(), "0");
        assert_eq!(authored.data_kind(), DataKind::Unknown);
    }

    #[test]
    fn test_copy_reproduces_comment() {
        let table = make_table();
        let mut source = TableColumn::from_record(&NullMonitor, &table, &price_record()).unwrap();
        source.set_comment(Some("unit price, VAT included".to_string()));

        let copy = TableColumn::from_column(&table, &source);
        assert_eq!(copy.comment(), Some("unit price, VAT included"));
        assert_eq!(copy.name(), "price");
        assert_eq!(copy.full_type_name(), "decimal(18,2)");
        // Identity of the loaded record is not copied.
        assert_eq!(copy.object_id(), 0);
        assert_eq!(copy.ordinal(), 0);
        assert!(!copy.is_persisted());
    }

    #[test]
    fn test_object_id_and_ordinal_survive_edits() {
        let table = make_table();
        let mut column = TableColumn::from_record(&NullMonitor, &table, &price_record()).unwrap();

        column.set_name("unit_price");
        column.set_comment(Some("edited".to_string()));
        column.set_nullable(true);
        column.set_default_value(Some("(1)".to_string()));

        assert_eq!(column.object_id(), 4);
        assert_eq!(column.ordinal(), 4);
        assert_eq!(column.default_value(), Some("1"));
    }

    #[test]
    fn test_set_data_type_tracks_type_id() {
        let table = make_table();
        let mut column = TableColumn::new(&table, "flag");
        let bit = table.types().resolve(104).unwrap();
        column.set_data_type(bit);

        assert_eq!(column.user_type_id(), 104);
        assert_eq!(column.type_name(), "bit");
        assert_eq!(column.data_kind(), DataKind::Boolean);
    }
}
