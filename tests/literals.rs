use chrono::NaiveDate;
use proptest::prelude::*;

use fake_sales_loader::fake::FakeContext;
use fake_sales_loader::model::{Customer, Record, Sale};
use fake_sales_loader::schema::{CUSTOMERS, SALES};
use fake_sales_loader::sql::{self, Literal};
use fake_sales_loader::value::Value;

/// Reads back a VARCHAR literal the way the server does.
fn parse_varchar(literal: &str) -> Option<String> {
    let (unicode, body) = match literal.strip_prefix("U&'") {
        Some(rest) => (true, rest),
        None => (false, literal.strip_prefix('\'')?),
    };
    let body = body.strip_suffix('\'')?;

    let mut out = String::new();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                // a lone quote would have terminated the literal
                if chars.next()? != '\'' {
                    return None;
                }
                out.push('\'');
            }
            '\\' if unicode => {
                if chars.peek() == Some(&'\\') {
                    chars.next();
                    out.push('\\');
                    continue;
                }
                let width = if chars.peek() == Some(&'+') {
                    chars.next();
                    6
                } else {
                    4
                };
                let hex: String = chars.by_ref().take(width).collect();
                out.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
            }
            c => out.push(c),
        }
    }
    Some(out)
}

fn render(v: &Value) -> String {
    Literal(v).to_string()
}

#[test]
fn parser_rejects_unescaped_quote() {
    assert_eq!(parse_varchar("'it's'"), None);
    assert_eq!(parse_varchar("'it''s'").as_deref(), Some("it's"));
}

proptest! {
    #[test]
    fn varchar_round_trips(s in any::<String>()) {
        let literal = render(&Value::Varchar(s.clone()));
        prop_assert_eq!(parse_varchar(&literal), Some(s));
    }

    #[test]
    fn quotes_are_doubled(prefix in "[a-z ]{0,8}", suffix in "[a-z ]{0,8}") {
        let s = format!("{prefix}'{suffix}");
        let literal = render(&Value::Varchar(s));
        prop_assert_eq!(literal, format!("'{prefix}''{suffix}'"));
    }

    #[test]
    fn no_raw_control_characters_reach_sql(s in any::<String>()) {
        let literal = render(&Value::Varchar(s));
        prop_assert!(!literal.chars().any(char::is_control));
    }

    #[test]
    fn doubles_round_trip(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let literal = render(&Value::Double(v));
        prop_assert_eq!(literal.parse::<f64>().unwrap(), v);
    }

    #[test]
    fn rendering_is_idempotent(seed in any::<u64>()) {
        let now = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let mut ctx = FakeContext::new(seed, now);
        let customers = vec![Customer::fake(&mut ctx).into_row(), Customer::fake(&mut ctx).into_row()];
        let sales = vec![Sale::fake(&mut ctx).into_row()];

        prop_assert_eq!(sql::insert(&CUSTOMERS, &customers).unwrap(), sql::insert(&CUSTOMERS, &customers).unwrap());
        prop_assert_eq!(sql::insert(&SALES, &sales).unwrap(), sql::insert(&SALES, &sales).unwrap());
    }

    #[test]
    fn dates_render_as_calendar_dates(days in 0u64..40_000) {
        let date = NaiveDate::from_ymd_opt(1940, 1, 1).unwrap() + chrono::Days::new(days);
        let literal = render(&Value::Date(date));
        let inner = literal.strip_prefix("DATE '").and_then(|s| s.strip_suffix('\'')).unwrap();
        prop_assert_eq!(NaiveDate::parse_from_str(inner, "%Y-%m-%d").unwrap(), date);
    }
}
