use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use super::Sink;
use crate::error::Result;
use crate::schema::TableDef;
use crate::sql;
use crate::value::Row;

/// Dry-run sink: writes each statement, `;`-terminated, instead of running it.
pub struct SqlScriptSink<W: Write + Send> {
    out: W,
    statements: usize,
}

impl SqlScriptSink<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "writing SQL script");
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write + Send> SqlScriptSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, statements: 0 }
    }

    pub fn statements(&self) -> usize {
        self.statements
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, statement: &str) -> Result<()> {
        writeln!(self.out, "{statement};")?;
        self.statements += 1;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send> Sink for SqlScriptSink<W> {
    async fn create_table(&mut self, table: &TableDef) -> Result<()> {
        self.emit(&sql::create_table(table))
    }

    async fn truncate_table(&mut self, table: &TableDef) -> Result<()> {
        self.emit(&sql::truncate_table(table))
    }

    async fn insert_batch(&mut self, table: &TableDef, rows: &[Row]) -> Result<()> {
        let statement = sql::insert(table, rows)?;
        self.emit(&statement)
    }

    async fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        info!(statements = self.statements, "SQL script complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SALES;

    #[tokio::test]
    async fn writes_terminated_statements() {
        let mut sink = SqlScriptSink::new(Vec::new());
        sink.create_table(&SALES).await.unwrap();
        sink.truncate_table(&SALES).await.unwrap();
        sink.finish().await.unwrap();
        assert_eq!(sink.statements(), 2);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("CREATE TABLE IF NOT EXISTS sales ("));
        assert!(text.ends_with("WITH (format = 'PARQUET');\nTRUNCATE TABLE sales;\n"));
    }

    #[tokio::test]
    async fn invalid_rows_are_not_written() {
        let mut sink = SqlScriptSink::new(Vec::new());
        let err = sink.insert_batch(&SALES, &[Row::new()]).await;
        assert!(err.is_err());
        assert_eq!(sink.statements(), 0);
    }
}
