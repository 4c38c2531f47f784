//! Literal SQL rendering of bind values for logs and debugging.
//!
//! The output is meant for a human reader. Embedded quotes are not escaped, so
//! a humanized statement must never be executed.

use crate::value::Value;
use std::fmt::Write;

/// Render a value as it would appear written inline in a statement.
///
/// - `NULL` for [`Value::Null`]
/// - plain decimal text for numbers
/// - comma-joined elements, without brackets, for lists
/// - the quoted string form for everything else
pub fn humanize_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Append the humanized form of `value` to `out`.
pub fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Int(v) => {
            let _ = write!(out, "{v}");
        }
        Value::Float(v) => {
            let _ = write!(out, "{v:?}");
        }
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
        }
        Value::Bool(v) => quoted(out, v),
        Value::Text(v) => quoted(out, v),
        Value::Bytes(v) => {
            out.push_str("'\\x");
            for b in v {
                let _ = write!(out, "{b:02x}");
            }
            out.push('\'');
        }
        Value::Uuid(v) => quoted(out, v),
        Value::Date(v) => quoted(out, v),
        Value::Timestamp(v) => quoted(out, v),
        Value::TimestampTz(v) => quoted(out, v),
        Value::Json(v) => quoted(out, v),
    }
}

fn quoted(out: &mut String, v: impl std::fmt::Display) {
    let _ = write!(out, "'{v}'");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn null_is_bare_keyword() {
        assert_eq!(humanize_value(&Value::Null), "NULL");
    }

    #[test]
    fn numbers_are_unquoted() {
        assert_eq!(humanize_value(&Value::from(5)), "5");
        assert_eq!(humanize_value(&Value::from(5.0)), "5.0");
        assert_eq!(humanize_value(&Value::from(5.5)), "5.5");
        assert_eq!(humanize_value(&Value::from(-12_i64)), "-12");
    }

    #[test]
    fn strings_and_other_scalars_are_quoted() {
        assert_eq!(humanize_value(&Value::from("value")), "'value'");
        assert_eq!(humanize_value(&Value::from(true)), "'true'");
        assert_eq!(
            humanize_value(&Value::from(NaiveDate::from_ymd_opt(2000, 1, 31).unwrap())),
            "'2000-01-31'"
        );
        assert_eq!(humanize_value(&Value::bytes(vec![0xde, 0xad])), "'\\xdead'");
    }

    #[test]
    fn lists_are_comma_joined_recursively() {
        assert_eq!(humanize_value(&Value::list([1, 2, 3])), "1,2,3");
        assert_eq!(
            humanize_value(&Value::List(vec![Value::from("a"), Value::Null])),
            "'a',NULL"
        );
        assert_eq!(humanize_value(&Value::List(vec![])), "");
    }
}
