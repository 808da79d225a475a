use anyhow::Context;
use chrono::Local;
use tracing::info;

use fake_sales_loader::config::{LoaderConfig, Target};
use fake_sales_loader::fake::FakeContext;
use fake_sales_loader::pipeline;
use fake_sales_loader::sink::{ParquetSink, Sink, SqlScriptSink, TrinoClient, TrinoSink};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real env vars take precedence
    dotenvy::dotenv().ok();

    let cfg = LoaderConfig::load().context("loading configuration")?;
    let _guard = fake_sales_loader::log::init(&cfg.log)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut ctx = FakeContext::new(seed, Local::now().naive_local());
    info!(seed, now = %ctx.now(), target = ?cfg.target, "starting load");

    let mut sink: Box<dyn Sink> = match cfg.target {
        Target::Trino => {
            let client = TrinoClient::new(&cfg.trino)?;
            info!(
                url = client.statement_url(),
                catalog = %cfg.trino.catalog,
                schema = %cfg.trino.schema,
                "connecting to trino"
            );
            Box::new(TrinoSink::new(client))
        }
        Target::SqlFile => Box::new(SqlScriptSink::create(&cfg.sql_file)?),
        Target::Parquet => Box::new(ParquetSink::new(&cfg.parquet_dir)),
    };

    let report = pipeline::run(sink.as_mut(), &mut ctx, cfg.counts, cfg.batch_size).await?;

    for table in &report.tables {
        info!(table = table.table, rows = table.rows, batches = table.batches, "table loaded");
    }
    info!(seed = report.seed, "load complete");
    Ok(())
}
