use tracing::info;

use crate::batch::{load_table, TableReport};
use crate::config::RowCounts;
use crate::error::Result;
use crate::fake::FakeContext;
use crate::model::{Customer, Product, Sale};
use crate::schema::ALL_TABLES;
use crate::sink::Sink;

/// Creates every table that is missing.
pub async fn initialize_schema(sink: &mut dyn Sink) -> Result<()> {
    for table in ALL_TABLES {
        sink.create_table(table).await?;
    }
    info!("tables created (if missing)");
    Ok(())
}

/// Empties all tables. Requires [`initialize_schema`] to have run.
pub async fn reset_tables(sink: &mut dyn Sink) -> Result<()> {
    for table in ALL_TABLES {
        sink.truncate_table(table).await?;
    }
    info!("tables truncated");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub seed: u64,
    pub tables: Vec<TableReport>,
}

impl LoadReport {
    pub fn rows(&self, table: &str) -> Option<usize> {
        self.tables.iter().find(|t| t.table == table).map(|t| t.rows)
    }
}

/// Full run: initialize, reset, then customers, products and sales in order.
pub async fn run(
    sink: &mut dyn Sink,
    ctx: &mut FakeContext,
    counts: RowCounts,
    batch_size: usize,
) -> Result<LoadReport> {
    initialize_schema(sink).await?;
    reset_tables(sink).await?;

    let tables = vec![
        load_table::<Customer>(sink, ctx, counts.customers, batch_size).await?,
        load_table::<Product>(sink, ctx, counts.products, batch_size).await?,
        load_table::<Sale>(sink, ctx, counts.sales, batch_size).await?,
    ];
    sink.finish().await?;

    Ok(LoadReport {
        seed: ctx.seed(),
        tables,
    })
}
