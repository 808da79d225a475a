use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::fake::FakeContext;
use crate::model::Record;
use crate::sink::Sink;

/// One slice of a load: rows `start..start + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    pub start: usize,
    pub len: usize,
}

/// Splits `total` rows into batches of `batch_size`; only the last batch may
/// be short.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    total: usize,
    batch_size: usize,
    next: usize,
}

impl BatchPlan {
    pub fn new(total: usize, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(LoadError::Config("batch size must be positive".into()));
        }
        Ok(Self {
            total,
            batch_size,
            next: 0,
        })
    }

    pub fn batch_count(&self) -> usize {
        self.total.div_ceil(self.batch_size)
    }
}

impl Iterator for BatchPlan {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        if self.next >= self.total {
            return None;
        }
        let start = self.next;
        let len = self.batch_size.min(self.total - start);
        self.next += len;
        Some(Batch { start, len })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub table: &'static str,
    pub rows: usize,
    pub batches: usize,
}

/// Generates `total` records of `R` and inserts them batch by batch.
///
/// The first failing batch aborts the load; earlier batches stay inserted.
pub async fn load_table<R: Record>(
    sink: &mut dyn Sink,
    ctx: &mut FakeContext,
    total: usize,
    batch_size: usize,
) -> Result<TableReport> {
    let table = R::TABLE;
    let plan = BatchPlan::new(total, batch_size)?;
    info!(table = table.name, total, batches = plan.batch_count(), "loading table");

    let mut report = TableReport {
        table: table.name,
        rows: 0,
        batches: 0,
    };
    for batch in plan {
        let rows: Vec<_> = (0..batch.len).map(|_| R::fake(ctx).into_row()).collect();
        debug!(table = table.name, batch_start = batch.start, "generated batch");

        sink.insert_batch(table, &rows).await?;

        report.rows += rows.len();
        report.batches += 1;
        info!(
            table = table.name,
            batch_start = batch.start,
            rows = rows.len(),
            "inserted batch"
        );
    }
    Ok(report)
}
