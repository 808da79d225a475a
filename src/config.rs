use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{LoadError, Result};

pub const NUM_CUSTOMERS: usize = 20_000;
pub const NUM_PRODUCTS: usize = 5_000;
pub const NUM_SALES: usize = 50_000;
pub const BATCH_SIZE: usize = 1_000;

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "loader";
pub const ENV_PREFIX: &str = "LOADER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Trino,
    SqlFile,
    Parquet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub target: Target,
    /// Drawn from entropy when unset.
    pub seed: Option<u64>,
    pub batch_size: usize,
    pub counts: RowCounts,
    pub trino: TrinoConfig,
    pub sql_file: PathBuf,
    pub parquet_dir: PathBuf,
    pub log: LogConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            target: Target::Trino,
            seed: None,
            batch_size: BATCH_SIZE,
            counts: RowCounts::default(),
            trino: TrinoConfig::default(),
            sql_file: PathBuf::from("load_fake_data.sql"),
            parquet_dir: PathBuf::from("data"),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RowCounts {
    pub customers: usize,
    pub products: usize,
    pub sales: usize,
}

impl Default for RowCounts {
    fn default() -> Self {
        Self {
            customers: NUM_CUSTOMERS,
            products: NUM_PRODUCTS,
            sales: NUM_SALES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrinoConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub catalog: String,
    pub schema: String,
    pub source: String,
}

impl Default for TrinoConfig {
    fn default() -> Self {
        Self {
            scheme: "http".into(),
            host: "localhost".into(),
            port: 8080,
            user: "fake-data-loader".into(),
            catalog: "iceberg".into(),
            schema: "default".into(),
            source: env!("CARGO_PKG_NAME").into(),
        }
    }
}

impl TrinoConfig {
    pub fn statement_url(&self) -> String {
        format!("{}://{}:{}/v1/statement", self.scheme, self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter; `RUST_LOG` wins when set.
    pub level: String,
    /// Daily-rolling log files are written here when set.
    pub dir: Option<PathBuf>,
    pub file_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            dir: None,
            file_name: "loader.log".into(),
        }
    }
}

impl LoaderConfig {
    /// Defaults, then `loader.{toml,yaml,json}` if present, then
    /// `LOADER__*` environment variables.
    pub fn load() -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| LoadError::Config(e.to_string()))?;
        let cfg: Self = cfg
            .try_deserialize()
            .map_err(|e| LoadError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(LoadError::Config("batch_size must be positive".into()));
        }
        if self.trino.host.is_empty() {
            return Err(LoadError::Config("trino.host must not be empty".into()));
        }
        Ok(())
    }
}
