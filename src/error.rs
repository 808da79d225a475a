use thiserror::Error;

use crate::schema::ColumnType;

pub type Result<T, E = LoadError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("query {query_id} failed with {name} ({code}): {message}")]
    Query {
        query_id: String,
        name: String,
        code: i32,
        message: String,
    },

    #[error("row for `{table}` has {actual} values, table has {expected} columns")]
    Arity {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("value for `{table}.{column}` is not a {expected}")]
    TypeMismatch {
        table: &'static str,
        column: &'static str,
        expected: ColumnType,
    },

    #[error("table `{0}` does not exist")]
    MissingTable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("parquet encoding failed: {0}")]
    Parquet(#[from] arrow2::error::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
