//! Destinations for generated tables.
//!
//! A sink sees one call per statement the loader would issue: create,
//! truncate, and one insert per batch. Calls arrive strictly in order and never
//! overlap.

mod parquet;
mod script;
mod trino;

pub use parquet::ParquetSink;
pub use script::SqlScriptSink;
pub use trino::{QueryResults, TrinoClient, TrinoSink};

use async_trait::async_trait;

use crate::error::Result;
use crate::schema::TableDef;
use crate::value::Row;

#[async_trait]
pub trait Sink: Send {
    /// Creates the table if it is missing; never fails on an existing table.
    async fn create_table(&mut self, table: &TableDef) -> Result<()>;

    /// Removes every row. Fails when the table does not exist.
    async fn truncate_table(&mut self, table: &TableDef) -> Result<()>;

    async fn insert_batch(&mut self, table: &TableDef, rows: &[Row]) -> Result<()>;

    /// Flushes anything buffered. Called once after the last insert.
    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
