//! Minimal Trino client over the HTTP statement protocol.
//!
//! A statement is POSTed to `/v1/statement`; the server answers with a page
//! that may carry a `nextUri`. Pages are fetched until `nextUri` disappears.
//! Any page carrying `error` fails the statement.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tracing::debug;

use super::Sink;
use crate::config::TrinoConfig;
use crate::error::{LoadError, Result};
use crate::schema::TableDef;
use crate::sql;
use crate::value::Row;

const USER_HEADER: &str = "x-trino-user";
const CATALOG_HEADER: &str = "x-trino-catalog";
const SCHEMA_HEADER: &str = "x-trino-schema";
const SOURCE_HEADER: &str = "x-trino-source";

/// One page of the statement protocol. Only the fields the loader reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResults {
    pub id: String,
    pub next_uri: Option<String>,
    pub stats: Option<QueryStats>,
    pub error: Option<QueryError>,
    pub update_type: Option<String>,
    pub update_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryStats {
    pub state: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryError {
    pub message: String,
    #[serde(default)]
    pub error_code: i32,
    #[serde(default)]
    pub error_name: String,
}

impl QueryResults {
    /// Turns a page carrying `error` into [`LoadError::Query`].
    pub fn check(self) -> Result<Self> {
        match self.error {
            Some(err) => Err(LoadError::Query {
                query_id: self.id,
                name: err.error_name,
                code: err.error_code,
                message: err.message,
            }),
            None => Ok(self),
        }
    }

    fn state(&self) -> &str {
        self.stats.as_ref().map_or("UNKNOWN", |s| s.state.as_str())
    }
}

/// What the loader keeps from a finished statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub query_id: String,
    pub update_type: Option<String>,
    pub update_count: Option<u64>,
}

pub struct TrinoClient {
    http: reqwest::Client,
    statement_url: String,
}

impl TrinoClient {
    pub fn new(cfg: &TrinoConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            (USER_HEADER, &cfg.user),
            (CATALOG_HEADER, &cfg.catalog),
            (SCHEMA_HEADER, &cfg.schema),
            (SOURCE_HEADER, &cfg.source),
        ] {
            let value = HeaderValue::from_str(value)
                .map_err(|e| LoadError::Config(format!("{name}: {e}")))?;
            headers.insert(HeaderName::from_static(name), value);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            statement_url: cfg.statement_url(),
        })
    }

    pub fn statement_url(&self) -> &str {
        &self.statement_url
    }

    /// Runs one statement to completion.
    pub async fn execute(&self, statement: &str) -> Result<QueryOutcome> {
        let mut page: QueryResults = self
            .http
            .post(&self.statement_url)
            .body(statement.to_owned())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut update_type = None;
        let mut update_count = None;
        loop {
            page = page.check()?;
            debug!(query_id = %page.id, state = page.state(), "query page");
            update_type = page.update_type.take().or(update_type);
            update_count = page.update_count.or(update_count);

            let Some(next) = page.next_uri.take() else {
                break;
            };
            page = self
                .http
                .get(next)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
        }

        Ok(QueryOutcome {
            query_id: page.id,
            update_type,
            update_count,
        })
    }
}

pub struct TrinoSink {
    client: TrinoClient,
}

impl TrinoSink {
    pub fn new(client: TrinoClient) -> Self {
        Self { client }
    }

    async fn run(&self, table: &TableDef, statement: &str) -> Result<QueryOutcome> {
        let outcome = self.client.execute(statement).await?;
        debug!(
            table = table.name,
            query_id = %outcome.query_id,
            update_type = outcome.update_type.as_deref().unwrap_or("-"),
            update_count = outcome.update_count,
            "statement finished"
        );
        Ok(outcome)
    }
}

#[async_trait]
impl Sink for TrinoSink {
    async fn create_table(&mut self, table: &TableDef) -> Result<()> {
        self.run(table, &sql::create_table(table)).await.map(drop)
    }

    async fn truncate_table(&mut self, table: &TableDef) -> Result<()> {
        self.run(table, &sql::truncate_table(table)).await.map(drop)
    }

    async fn insert_batch(&mut self, table: &TableDef, rows: &[Row]) -> Result<()> {
        let statement = sql::insert(table, rows)?;
        self.run(table, &statement).await.map(drop)
    }
}
