//! Table definitions for the three target tables.
//!
//! Column order here is the order rows are rendered in, so every record's
//! `into_row` must follow it.

use std::fmt;

use crate::error::{LoadError, Result};
use crate::value::{Row, Value};

use ColumnType::*;

/// Storage format directive passed at table creation.
pub const STORAGE_FORMAT: &str = "PARQUET";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    BigInt,
    Integer,
    Double,
    Varchar,
    Date,
    Timestamp,
    Boolean,
}

impl ColumnType {
    pub fn sql_name(self) -> &'static str {
        match self {
            ColumnType::BigInt => "BIGINT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Double => "DOUBLE",
            ColumnType::Varchar => "VARCHAR",
            ColumnType::Date => "DATE",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Boolean => "BOOLEAN",
        }
    }

    /// NULL is accepted by every column type.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (ColumnType::BigInt, Value::BigInt(_))
                | (ColumnType::Integer, Value::Integer(_))
                | (ColumnType::Double, Value::Double(_))
                | (ColumnType::Varchar, Value::Varchar(_))
                | (ColumnType::Date, Value::Date(_))
                | (ColumnType::Timestamp, Value::Timestamp(_))
                | (ColumnType::Boolean, Value::Boolean(_))
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

const fn col(name: &'static str, ty: ColumnType) -> Column {
    Column { name, ty }
}

#[derive(Debug, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableDef {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Checks arity and per-column types before a row leaves the process.
    pub fn check_row(&self, row: &Row) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(LoadError::Arity {
                table: self.name,
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        for (column, value) in self.columns.iter().zip(row) {
            if !column.ty.accepts(value) {
                return Err(LoadError::TypeMismatch {
                    table: self.name,
                    column: column.name,
                    expected: column.ty,
                });
            }
        }
        Ok(())
    }
}

pub const CUSTOMERS: TableDef = TableDef {
    name: "customers",
    columns: &[
        col("customer_id", BigInt),
        col("first_name", Varchar),
        col("last_name", Varchar),
        col("gender", Varchar),
        col("birthdate", Date),
        col("email", Varchar),
        col("phone", Varchar),
        col("address", Varchar),
        col("city", Varchar),
        col("state", Varchar),
        col("country", Varchar),
        col("postal_code", Varchar),
        col("signup_date", Date),
        col("last_login", Timestamp),
        col("loyalty_points", BigInt),
        col("yearly_income", Double),
        col("marital_status", Varchar),
        col("num_children", Integer),
        col("education_level", Varchar),
        col("occupation", Varchar),
        col("home_owner", Boolean),
    ],
};

pub const PRODUCTS: TableDef = TableDef {
    name: "products",
    columns: &[
        col("product_id", BigInt),
        col("name", Varchar),
        col("category", Varchar),
        col("subcategory", Varchar),
        col("brand", Varchar),
        col("price", Double),
        col("weight", Double),
        col("manufacture_date", Date),
    ],
};

pub const SALES: TableDef = TableDef {
    name: "sales",
    columns: &[
        col("sale_id", BigInt),
        col("customer_id", BigInt),
        col("product_id", BigInt),
        col("sale_date", Date),
        col("sale_timestamp", Timestamp),
        col("quantity", Integer),
        col("unit_price", Double),
        col("discount", Double),
        col("total_price", Double),
        col("payment_method", Varchar),
        col("store_id", Integer),
        col("channel", Varchar),
    ],
};

/// All tables in creation/reset order.
pub const ALL_TABLES: [&TableDef; 3] = [&CUSTOMERS, &PRODUCTS, &SALES];
