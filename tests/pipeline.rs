use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use fake_sales_loader::config::RowCounts;
use fake_sales_loader::fake::FakeContext;
use fake_sales_loader::pipeline;
use fake_sales_loader::schema::{TableDef, CUSTOMERS, PRODUCTS, SALES};
use fake_sales_loader::sink::{Sink, SqlScriptSink};
use fake_sales_loader::value::{Row, Value};
use fake_sales_loader::{LoadError, Result};

/// In-memory table store with the same create/truncate semantics as Trino.
#[derive(Default)]
struct MemoryStore {
    tables: HashMap<&'static str, Vec<Row>>,
    batch_sizes: HashMap<&'static str, Vec<usize>>,
    creates: usize,
    fail_on_batch: Option<(&'static str, usize)>,
}

#[async_trait]
impl Sink for MemoryStore {
    async fn create_table(&mut self, table: &TableDef) -> Result<()> {
        self.creates += 1;
        self.tables.entry(table.name).or_default();
        Ok(())
    }

    async fn truncate_table(&mut self, table: &TableDef) -> Result<()> {
        self.tables
            .get_mut(table.name)
            .ok_or_else(|| LoadError::MissingTable(table.name.into()))?
            .clear();
        self.batch_sizes.remove(table.name);
        Ok(())
    }

    async fn insert_batch(&mut self, table: &TableDef, rows: &[Row]) -> Result<()> {
        for row in rows {
            table.check_row(row)?;
        }
        let sizes = self.batch_sizes.entry(table.name).or_default();
        if self.fail_on_batch == Some((table.name, sizes.len())) {
            return Err(LoadError::Io(std::io::Error::other("connection lost")));
        }
        sizes.push(rows.len());
        self.tables
            .get_mut(table.name)
            .ok_or_else(|| LoadError::MissingTable(table.name.into()))?
            .extend_from_slice(rows);
        Ok(())
    }
}

impl MemoryStore {
    fn count(&self, table: &TableDef) -> usize {
        self.tables.get(table.name).map_or(0, Vec::len)
    }
}

fn ctx(seed: u64) -> FakeContext {
    let now = NaiveDate::from_ymd_opt(2025, 11, 3)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap();
    FakeContext::new(seed, now)
}

#[tokio::test]
async fn default_run_loads_exact_row_counts() {
    let mut store = MemoryStore::default();
    let report = pipeline::run(&mut store, &mut ctx(1), RowCounts::default(), 1000)
        .await
        .unwrap();

    assert_eq!(store.count(&CUSTOMERS), 20_000);
    assert_eq!(store.count(&PRODUCTS), 5_000);
    assert_eq!(store.count(&SALES), 50_000);
    assert_eq!(store.creates, 3);

    assert_eq!(report.seed, 1);
    assert_eq!(report.rows("customers"), Some(20_000));
    assert_eq!(report.tables.iter().map(|t| t.batches).sum::<usize>(), 20 + 5 + 50);
}

#[tokio::test]
async fn rerun_truncates_previous_rows() {
    let counts = RowCounts {
        customers: 30,
        products: 20,
        sales: 10,
    };
    let mut store = MemoryStore::default();
    pipeline::run(&mut store, &mut ctx(1), counts, 7).await.unwrap();
    pipeline::run(&mut store, &mut ctx(2), counts, 7).await.unwrap();

    assert_eq!(store.count(&CUSTOMERS), 30);
    assert_eq!(store.count(&PRODUCTS), 20);
    assert_eq!(store.count(&SALES), 10);
    assert_eq!(store.batch_sizes["customers"], vec![7, 7, 7, 7, 2]);
}

#[tokio::test]
async fn reset_without_schema_fails() {
    let mut store = MemoryStore::default();
    let err = pipeline::reset_tables(&mut store).await.unwrap_err();
    assert!(matches!(err, LoadError::MissingTable(name) if name == "customers"));
}

#[tokio::test]
async fn failed_batch_aborts_and_keeps_earlier_batches() {
    let counts = RowCounts {
        customers: 10,
        products: 10,
        sales: 10,
    };
    let mut store = MemoryStore {
        fail_on_batch: Some(("products", 1)),
        ..MemoryStore::default()
    };
    let result = pipeline::run(&mut store, &mut ctx(3), counts, 4).await;

    assert!(result.is_err());
    assert_eq!(store.count(&CUSTOMERS), 10);
    assert_eq!(store.count(&PRODUCTS), 4);
    assert_eq!(store.count(&SALES), 0);
}

#[tokio::test]
async fn same_seed_reproduces_rows() {
    let counts = RowCounts {
        customers: 50,
        products: 50,
        sales: 50,
    };
    let (mut a, mut b) = (MemoryStore::default(), MemoryStore::default());
    pipeline::run(&mut a, &mut ctx(9), counts, 16).await.unwrap();
    pipeline::run(&mut b, &mut ctx(9), counts, 16).await.unwrap();

    for table in ["customers", "products", "sales"] {
        assert_eq!(a.tables[table], b.tables[table]);
    }
}

#[tokio::test]
async fn sales_references_stay_in_id_ranges() {
    let counts = RowCounts {
        customers: 0,
        products: 0,
        sales: 2_000,
    };
    let mut store = MemoryStore::default();
    pipeline::run(&mut store, &mut ctx(4), counts, 500).await.unwrap();

    for row in &store.tables["sales"] {
        let (Value::BigInt(customer), Value::BigInt(product)) = (&row[1], &row[2]) else {
            panic!("unexpected id types in {row:?}");
        };
        assert!((1..=10_000_000).contains(customer));
        assert!((1..=1_000_000).contains(product));
    }
}

#[tokio::test]
async fn script_sink_emits_one_insert_per_batch() {
    let counts = RowCounts {
        customers: 25,
        products: 10,
        sales: 1,
    };
    let mut sink = SqlScriptSink::new(Vec::new());
    pipeline::run(&mut sink, &mut ctx(5), counts, 10).await.unwrap();

    let script = String::from_utf8(sink.into_inner()).unwrap();
    let count = |prefix: &str| script.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("CREATE TABLE IF NOT EXISTS"), 3);
    assert_eq!(count("TRUNCATE TABLE"), 3);
    assert_eq!(count("INSERT INTO customers"), 3);
    assert_eq!(count("INSERT INTO products"), 1);
    assert_eq!(count("INSERT INTO sales"), 1);
}
