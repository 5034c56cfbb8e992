//! SQL Server catalog metadata model.
//!
//! Models table-column metadata read from a SQL Server catalog query
//! (a `sys.columns` join): catalog records come in through an abstract
//! [`RecordSource`], data types resolve against the owning database's
//! [`TypeCatalog`], and the populated [`TableColumn`] objects feed
//! property-sheet display, DDL generation, and schema comparison.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mssql_catalog_rs::{
//!     CatalogRecord, NullMonitor, Result, SqlServerTable, TypeCatalog, VecSource,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let types = Arc::new(TypeCatalog::with_system_types());
//!     let mut table = SqlServerTable::new("dbo", "orders", types);
//!
//!     // Records normally come from the host's catalog query.
//!     let mut source = VecSource::new(vec![CatalogRecord::new()
//!         .with_int("column_id", 1)
//!         .with_str("name", "id")
//!         .with_int("user_type_id", 56)
//!         .with_int("max_length", 4)
//!         .with_int("is_identity", 1)]);
//!
//!     table.load_columns(&NullMonitor, &mut source).await?;
//!     println!("{}", table.column("id").unwrap().full_type_name());
//!
//!     Ok(())
//! }
//! ```

pub mod column;
pub mod datatype;
pub mod error;
pub mod monitor;
pub mod properties;
pub mod record;
pub mod source;
pub mod sqltext;
pub mod table;

// Re-export main types
pub use column::TableColumn;
pub use datatype::{DataKind, SqlServerDataType, TypeCatalog};
pub use error::{Error, Result};
pub use monitor::{CancelFlag, NullMonitor, ProgressMonitor};
pub use properties::{find_field, FieldDescriptor, COLUMN_FIELDS};
pub use record::{CatalogRecord, CatalogValue};
pub use source::{RecordSource, RecordSourceStreamExt, VecSource};
pub use table::SqlServerTable;
