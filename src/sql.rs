//! SQL text for the Trino dialect: table DDL, truncation and multi-row
//! inserts built from typed values.
//!
//! Every value goes through [`Literal`], which is the only place strings are
//! quoted. Rows are validated against their [`TableDef`] before rendering so a
//! type slip surfaces as an error here instead of a server-side parse failure.

use std::fmt::{self, Write as _};

use crate::error::Result;
use crate::schema::{TableDef, STORAGE_FORMAT};
use crate::value::{Row, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display adapter rendering a [`Value`] as a SQL literal.
pub struct Literal<'a>(pub &'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("NULL"),
            Value::BigInt(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Double(v) => write_double(f, *v),
            Value::Varchar(s) => write_varchar(f, s),
            Value::Date(d) => write!(f, "DATE '{}'", d.format(DATE_FORMAT)),
            Value::Timestamp(ts) => write!(f, "TIMESTAMP '{}'", ts.format(TIMESTAMP_FORMAT)),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

fn write_double(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        f.write_str("nan()")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "infinity()" } else { "-infinity()" })
    } else {
        // Debug keeps a decimal point or exponent, so the literal never reads
        // as an integer, and round-trips exactly.
        write!(f, "{v:?}")
    }
}

fn write_varchar(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if !s.chars().any(char::is_control) {
        f.write_char('\'')?;
        for c in s.chars() {
            if c == '\'' {
                f.write_str("''")?;
            } else {
                f.write_char(c)?;
            }
        }
        return f.write_char('\'');
    }

    // Unicode literal: control characters never reach the statement raw.
    f.write_str("U&'")?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("''")?,
            '\\' => f.write_str("\\\\")?,
            c if c.is_control() => {
                let code = u32::from(c);
                if code <= 0xFFFF {
                    write!(f, "\\{code:04X}")?;
                } else {
                    write!(f, "\\+{code:06X}")?;
                }
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char('\'')
}

pub fn create_table(table: &TableDef) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", table.name);
    for (i, column) in table.columns.iter().enumerate() {
        let sep = if i + 1 == table.columns.len() { "" } else { "," };
        sql.push_str(&format!("    {} {}{sep}\n", column.name, column.ty));
    }
    sql.push_str(&format!(")\nWITH (format = '{STORAGE_FORMAT}')"));
    sql
}

pub fn truncate_table(table: &TableDef) -> String {
    format!("TRUNCATE TABLE {}", table.name)
}

/// Renders one multi-row INSERT for `rows`.
///
/// Rows are checked against `table` first; the first mismatch is returned and
/// nothing is rendered.
pub fn insert(table: &TableDef, rows: &[Row]) -> Result<String> {
    for row in rows {
        table.check_row(row)?;
    }

    let columns = table.column_names().collect::<Vec<_>>().join(", ");
    let mut sql = format!("INSERT INTO {} ({columns})\nVALUES", table.name);
    for (i, row) in rows.iter().enumerate() {
        sql.push_str(if i == 0 { "\n" } else { ",\n" });
        render_tuple(&mut sql, row);
    }
    Ok(sql)
}

fn render_tuple(out: &mut String, row: &Row) {
    out.push('(');
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&Literal(value).to_string());
    }
    out.push(')');
}
