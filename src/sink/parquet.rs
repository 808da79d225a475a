//! Local Parquet output: one directory per table, one file per batch.
//!
//! ```text
//! data/customers/part-00000.parquet
//! data/customers/part-00001.parquet
//! data/products/part-00000.parquet
//! ```

use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use arrow2::array::{Array, BooleanArray, Float64Array, Int32Array, Int64Array, Utf8Array};
use arrow2::chunk::Chunk;
use arrow2::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow2::io::parquet::write::{
    transverse, CompressionOptions, Encoding, FileWriter, RowGroupIterator, Version, WriteOptions,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info};

use super::Sink;
use crate::error::{LoadError, Result};
use crate::schema::{ColumnType, TableDef};
use crate::value::{Row, Value};

const WRITE_OPTIONS: WriteOptions = WriteOptions {
    write_statistics: true,
    compression: CompressionOptions::Uncompressed,
    version: Version::V2,
    data_pagesize_limit: None,
};

/// Only tables created through this sink accept inserts, so a fresh sink never
/// appends into a directory it has not scanned.
pub struct ParquetSink {
    base_dir: PathBuf,
    /// Next part number per created table.
    parts: HashMap<&'static str, usize>,
}

impl ParquetSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            parts: HashMap::new(),
        }
    }

    pub fn table_dir(&self, table: &TableDef) -> PathBuf {
        self.base_dir.join(table.name)
    }

    fn created_dir(&self, table: &TableDef) -> Result<PathBuf> {
        let dir = self.table_dir(table);
        if self.parts.contains_key(table.name) && dir.is_dir() {
            Ok(dir)
        } else {
            Err(LoadError::MissingTable(table.name.to_string()))
        }
    }
}

/// `part-00042.parquet` → 42
fn part_index(path: &Path) -> Option<usize> {
    path.file_stem()?
        .to_str()?
        .strip_prefix("part-")?
        .parse()
        .ok()
}

/// One past the highest existing part index, so gaps never cause overwrites.
fn next_part(dir: &Path) -> Result<usize> {
    Ok(parquet_files(dir)?
        .iter()
        .filter_map(|p| part_index(p))
        .max()
        .map_or(0, |max| max + 1))
}

fn parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "parquet") {
            files.push(path);
        }
    }
    Ok(files)
}

#[async_trait]
impl Sink for ParquetSink {
    async fn create_table(&mut self, table: &TableDef) -> Result<()> {
        let dir = self.table_dir(table);
        fs::create_dir_all(&dir)?;
        // Continue numbering after files left by an earlier run.
        let next = next_part(&dir)?;
        self.parts.insert(table.name, next);
        info!(table = table.name, dir = %dir.display(), "table directory ready");
        Ok(())
    }

    async fn truncate_table(&mut self, table: &TableDef) -> Result<()> {
        let dir = self.created_dir(table)?;
        let files = parquet_files(&dir)?;
        for file in &files {
            fs::remove_file(file)?;
        }
        self.parts.insert(table.name, 0);
        info!(table = table.name, removed = files.len(), "table truncated");
        Ok(())
    }

    async fn insert_batch(&mut self, table: &TableDef, rows: &[Row]) -> Result<()> {
        let dir = self.created_dir(table)?;
        let part = self.parts.get(table.name).copied().unwrap_or_default();
        let path = dir.join(format!("part-{part:05}.parquet"));

        write_parquet(table, rows, &path)?;
        self.parts.insert(table.name, part + 1);
        debug!(table = table.name, path = %path.display(), rows = rows.len(), "wrote part");
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Row → Arrow conversion
// ─────────────────────────────────────────────

fn arrow_type(ty: ColumnType) -> DataType {
    match ty {
        ColumnType::BigInt => DataType::Int64,
        ColumnType::Integer => DataType::Int32,
        ColumnType::Double => DataType::Float64,
        ColumnType::Varchar => DataType::Utf8,
        ColumnType::Date => DataType::Date32,
        ColumnType::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, None),
        ColumnType::Boolean => DataType::Boolean,
    }
}

pub fn arrow_schema(table: &TableDef) -> Schema {
    Schema::from(
        table
            .columns
            .iter()
            .map(|c| Field::new(c.name, arrow_type(c.ty), true))
            .collect::<Vec<_>>(),
    )
}

fn days_since_epoch(date: &NaiveDate) -> i32 {
    (*date - NaiveDate::default()).num_days() as i32
}

/// Builds one column array. Rows must already be checked against the table,
/// so a value of another type can only be NULL here.
fn column_array(rows: &[Row], index: usize, ty: ColumnType) -> Box<dyn Array> {
    let cells = rows.iter().map(|row| &row[index]);
    match ty {
        ColumnType::BigInt => Int64Array::from(
            cells
                .map(|v| match v {
                    Value::BigInt(x) => Some(*x),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )
        .boxed(),
        ColumnType::Integer => Int32Array::from(
            cells
                .map(|v| match v {
                    Value::Integer(x) => Some(*x),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )
        .boxed(),
        ColumnType::Double => Float64Array::from(
            cells
                .map(|v| match v {
                    Value::Double(x) => Some(*x),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )
        .boxed(),
        ColumnType::Varchar => Utf8Array::<i32>::from(
            cells
                .map(|v| match v {
                    Value::Varchar(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )
        .boxed(),
        ColumnType::Date => Int32Array::from(
            cells
                .map(|v| match v {
                    Value::Date(d) => Some(days_since_epoch(d)),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )
        .to(DataType::Date32)
        .boxed(),
        ColumnType::Timestamp => Int64Array::from(
            cells
                .map(|v| match v {
                    Value::Timestamp(ts) => Some(ts.and_utc().timestamp_micros()),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )
        .to(arrow_type(ColumnType::Timestamp))
        .boxed(),
        ColumnType::Boolean => BooleanArray::from(
            cells
                .map(|v| match v {
                    Value::Boolean(b) => Some(*b),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )
        .boxed(),
    }
}

pub fn to_chunk(table: &TableDef, rows: &[Row]) -> Result<Chunk<Box<dyn Array>>> {
    for row in rows {
        table.check_row(row)?;
    }
    let arrays = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| column_array(rows, i, c.ty))
        .collect();
    Ok(Chunk::try_new(arrays)?)
}

fn write_parquet(table: &TableDef, rows: &[Row], path: &Path) -> Result<()> {
    let schema = arrow_schema(table);
    let chunk = to_chunk(table, rows)?;

    let encodings = schema
        .fields
        .iter()
        .map(|f| transverse(&f.data_type, |_| Encoding::Plain))
        .collect();
    let row_groups =
        RowGroupIterator::try_new(vec![Ok(chunk)].into_iter(), &schema, WRITE_OPTIONS, encodings)?;

    let file = File::create(path)?;
    let mut writer = FileWriter::try_new(file, schema, WRITE_OPTIONS)?;
    for group in row_groups {
        writer.write(group?)?;
    }
    writer.end(None)?;
    Ok(())
}
