//! Property-based tests with proptest.
//!
//! Tokenizing must be lossless, quoted text must never produce placeholders,
//! and binding must keep placeholders and values aligned.

use proptest::prelude::*;
use sqlbind::{
    BindConfig, NamedParams, ParameterSource, Token, Value, bind, bind_with, next_or_zero,
    tokenize,
};

/// Statement text without parameter markers or quotes.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \\t\\n\\r(),.;=<>+*/%!_\\[\\]{}-]{0,60}"
}

/// Literal payload that is full of would-be markers.
fn quoted_payload() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?:@(),.;=<>+*/%!_-]{0,30}"
}

fn count_placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

proptest! {
    #[test]
    fn tokenize_is_lossless_without_markers(sql in plain_text()) {
        prop_assert_eq!(tokenize(&sql).to_string(), sql);
    }

    #[test]
    fn tokenize_is_lossless_with_quotes(
        prefix in plain_text(),
        payload in quoted_payload(),
        suffix in plain_text(),
    ) {
        let sql = format!("{prefix}'{payload}'{suffix}");
        let tokens = tokenize(&sql);
        prop_assert_eq!(tokens.to_string(), sql);
        prop_assert!(tokens.iter().all(|t| !t.is_placeholder() && t.param_name().is_none()));
    }

    #[test]
    fn indexed_bind_keeps_statement_and_values(
        parts in prop::collection::vec(plain_text(), 1..6),
        quoted in quoted_payload(),
    ) {
        let sql = format!("{} '{quoted}'", parts.join("?"));
        let values: Vec<Value> = (0..parts.len() - 1).map(|i| Value::from(i as i64)).collect();

        let bound = bind(&sql, &ParameterSource::Indexed(values.clone())).unwrap();
        prop_assert_eq!(bound.sql(), sql.as_str());
        prop_assert_eq!(bound.values(), values.as_slice());
    }

    #[test]
    fn indexed_bind_rejects_wrong_count(
        parts in prop::collection::vec(plain_text(), 1..6),
        extra in 1usize..3,
    ) {
        let sql = parts.join("?");
        let values: Vec<Value> = (0..parts.len() - 1 + extra).map(|i| Value::from(i as i64)).collect();
        let err = bind(&sql, &ParameterSource::Indexed(values)).unwrap_err();
        prop_assert!(err.is_mismatched_count());
    }

    #[test]
    fn optimised_list_pads_to_power_of_two(len in 0usize..70) {
        let params = NamedParams::new().with("ns", Value::list(0..len as i64));
        let bound = bind("WHERE n IN (@ns)", &ParameterSource::Named(params)).unwrap();

        prop_assert_eq!(bound.param_count(), next_or_zero(len));
        prop_assert_eq!(count_placeholders(bound.sql()), bound.param_count());
        if len > 0 {
            let last = Value::from(len as i64 - 1);
            prop_assert!(bound.values()[len..].iter().all(|v| *v == last));
        }
    }

    #[test]
    fn plain_named_list_is_exact(len in 0usize..70) {
        let params = NamedParams::new().with("ns", Value::list(0..len as i64));
        let bound = bind("WHERE n IN (:ns)", &ParameterSource::Named(params)).unwrap();

        prop_assert_eq!(bound.param_count(), len);
        prop_assert_eq!(count_placeholders(bound.sql()), len);
    }

    #[test]
    fn numbered_placeholders_match_value_count(len in 0usize..20, scalar in any::<i32>()) {
        let params = NamedParams::new()
            .with("a", scalar)
            .with("ns", Value::list(0..len as i64));
        let bound = bind_with(
            "WHERE a = :a AND n IN (@ns) OR b = :a",
            &ParameterSource::Named(params),
            &BindConfig::new().numbered(),
        )
        .unwrap();

        let last = format!("${}", bound.param_count());
        prop_assert!(bound.sql().contains(&last));
        prop_assert!(!bound.sql().contains('?'));
    }

    #[test]
    fn indexed_numbered_rewrites_only_placeholders(
        parts in prop::collection::vec("[a-z0-9 :@(),=]{0,20}", 1..6),
    ) {
        let sql = parts.join("?");
        let values: Vec<Value> = (0..parts.len() - 1).map(|i| Value::from(i as i64)).collect();
        let bound = bind_with(
            &sql,
            &ParameterSource::Indexed(values),
            &BindConfig::new().numbered(),
        )
        .unwrap();

        let mut expected = parts[0].clone();
        for (i, part) in parts[1..].iter().enumerate() {
            expected.push_str(&format!("${}{part}", i + 1));
        }
        prop_assert_eq!(bound.sql(), expected.as_str());
    }
}

#[test]
fn tokens_keep_every_separator() {
    let tokens = tokenize("a\tb\nc\rd e");
    let separators = tokens
        .iter()
        .filter(|t| matches!(t, Token::Space(_) | Token::Newline(_)))
        .count();
    assert_eq!(separators, 4);
}
