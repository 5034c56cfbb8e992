//! Table model: owns columns and runs the column load.

use std::sync::Arc;

use tracing::debug;

use crate::column::TableColumn;
use crate::datatype::TypeCatalog;
use crate::error::Result;
use crate::monitor::ProgressMonitor;
use crate::source::RecordSource;

/// A SQL Server table: schema-qualified name, a handle to the owning
/// database's type catalog, and the loaded columns.
#[derive(Debug)]
pub struct SqlServerTable {
    schema: String,
    name: String,
    types: Arc<TypeCatalog>,
    columns: Vec<TableColumn>,
}

impl SqlServerTable {
    /// Create a table bound to its database's type catalog, with no columns
    /// loaded yet.
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        types: Arc<TypeCatalog>,
    ) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            types,
            columns: Vec::new(),
        }
    }

    /// Schema name.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Schema-qualified name, e.g. "dbo.orders".
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Type catalog of the owning database.
    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }

    /// Load (or reload) the column list from a catalog record source.
    ///
    /// Drains the source one record at a time, checking the monitor before
    /// each, and keeps the columns ordered by ordinal position. Any source,
    /// record, or type-resolution error abandons the load and leaves the
    /// previous column list untouched.
    pub async fn load_columns<S: RecordSource>(
        &mut self,
        monitor: &dyn ProgressMonitor,
        source: &mut S,
    ) -> Result<()> {
        let mut columns = Vec::new();
        loop {
            monitor.check_canceled()?;
            let Some(record) = source.next().await? else {
                break;
            };
            columns.push(TableColumn::from_record(monitor, self, &record)?);
        }
        columns.sort_by_key(TableColumn::ordinal);

        debug!(
            table = %self.qualified_name(),
            count = columns.len(),
            "loaded table columns"
        );
        self.columns = columns;
        Ok(())
    }

    /// Columns in ordinal order.
    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    /// Look up a column by name, case-insensitively (the dialect's default
    /// collation behavior for identifiers).
    pub fn column(&self, name: &str) -> Option<&TableColumn> {
        self.columns
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Add an authored (unpersisted) column.
    pub fn add_column(&mut self, column: TableColumn) {
        self.columns.push(column);
    }

    /// Remove a column by name; returns it if present.
    pub fn remove_column(&mut self, name: &str) -> Option<TableColumn> {
        let idx = self
            .columns
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))?;
        Some(self.columns.remove(idx))
    }
}
