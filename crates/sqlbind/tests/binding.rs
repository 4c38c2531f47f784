//! End-to-end binding through the public API.

use sqlbind::{
    BindConfig, BindError, NamedParams, ParamQuery, ParameterSource, Value, bind, humanize,
    parameter_names,
};

fn named(params: NamedParams) -> ParameterSource {
    ParameterSource::Named(params)
}

#[test]
fn duplicate_names_bind_in_place() {
    let sql = "SELECT * FROM people WHERE :age > 18 AND :age < 65";
    let bound = bind(sql, &named(NamedParams::new().with("age", 30))).unwrap();

    assert_eq!(bound.sql(), "SELECT * FROM people WHERE ? > 18 AND ? < 65");
    assert_eq!(bound.values(), &[Value::Int(30), Value::Int(30)]);
}

#[test]
fn optimised_expansion_pads_with_last() {
    let bound = bind(
        "WHERE n IN (@ns)",
        &named(NamedParams::new().with("ns", vec![1, 2, 3])),
    )
    .unwrap();

    assert_eq!(bound.sql(), "WHERE n IN (?,?,?,?)");
    assert_eq!(
        bound.values(),
        &[Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(3)]
    );
}

#[test]
fn plain_expansion_is_exact() {
    let bound = bind(
        "WHERE n IN (:ns)",
        &named(NamedParams::new().with("ns", vec![1, 2, 3])),
    )
    .unwrap();

    assert_eq!(bound.sql(), "WHERE n IN (?,?,?)");
    assert_eq!(bound.values(), &[Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn empty_optimised_list_binds_nothing() {
    let bound = bind(
        "WHERE n IN (@ns)",
        &named(NamedParams::new().with("ns", Vec::<i32>::new())),
    )
    .unwrap();

    assert_eq!(bound.sql(), "WHERE n IN ()");
    assert!(bound.values().is_empty());
}

#[test]
fn humanize_inlines_literals() {
    let sql = "a = :first AND b = :second";

    let params = NamedParams::new().with("first", 11).with("second", "Bob");
    assert_eq!(humanize(sql, &named(params)).unwrap(), "a = 11 AND b = 'Bob'");

    let params = NamedParams::new().with("first", 11).with("second", None::<&str>);
    assert_eq!(humanize(sql, &named(params)).unwrap(), "a = 11 AND b = NULL");
}

#[test]
fn mixed_styles_are_rejected_up_front() {
    let result = ParamQuery::from_parts(
        "WHERE a = ? AND b = :b",
        vec![Value::from(1)],
        NamedParams::new().with("b", 2),
    );
    assert_eq!(result.unwrap_err(), BindError::MixedParameterStyle);
}

#[test]
fn unspecified_parameter_is_named_in_error() {
    let err = ParamQuery::named("WHERE a = :a AND b = :b", NamedParams::new().with("a", 1))
        .bind()
        .unwrap_err();
    assert_eq!(err.to_string(), "Unspecified parameter: b");
}

#[test]
fn parameter_names_include_optimised_markers() {
    assert_eq!(
        parameter_names("SELECT 1 FROM table WHERE col1 = :one AND col2 IN (@two)"),
        vec!["one", "two"]
    );
}

#[test]
fn numbered_statement_feeds_tokio_postgres() {
    let query = ParamQuery::named(
        "SELECT * FROM users WHERE status = :status AND id IN (@ids) AND note <> '?'",
        NamedParams::new()
            .with("status", "active")
            .with("ids", vec![10_i64, 20, 30]),
    );
    let bound = query.bind_with(&BindConfig::new().numbered()).unwrap();

    assert_eq!(
        bound.sql(),
        "SELECT * FROM users WHERE status = $1 AND id IN ($2,$3,$4,$5) AND note <> '?'"
    );
    assert_eq!(bound.params_ref().len(), 5);
}

#[test]
fn json_object_supplies_named_params() {
    let params = NamedParams::from_json(serde_json::json!({
        "name": "Bob%",
        "counties": ["Kent", "Surrey"],
    }))
    .unwrap();

    let query = ParamQuery::named("WHERE name LIKE :name AND county IN (:counties)", params);
    assert_eq!(
        query.to_string(),
        "WHERE name LIKE 'Bob%' AND county IN ('Kent','Surrey')"
    );
}

#[test]
fn bound_queries_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<sqlbind::BoundQuery>();
    assert_send_sync::<ParamQuery>();

    let query = ParamQuery::indexed("SELECT ? + ?", [1, 2]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let query = query.clone();
            std::thread::spawn(move || query.bind().map(|b| b.param_count()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(2));
    }
}
