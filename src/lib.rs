//! Synthesizes customers, products and sales and bulk-loads them into a
//! columnar table store in fixed-size batches.

pub mod batch;
pub mod config;
pub mod error;
pub mod fake;
pub mod log;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod sink;
pub mod sql;
pub mod value;

pub use error::{LoadError, Result};
