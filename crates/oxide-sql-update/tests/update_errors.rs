//! Error reporting and its timing.

mod common;
use common::*;

use oxide_sql_update::{
    ArithOp, CompareOp, Condition, ErrorKind, ExpressionParameter, Field, UpdateError, UpdateQuery,
};

#[test]
fn empty_update() {
    let q = query(vec!["test"]);
    let err = q.render().unwrap_err();
    assert_eq!(err, UpdateError::EmptyAssignmentList);
    assert_eq!(err.kind(), ErrorKind::Logic);
}

#[test]
fn empty_update_after_clearing_values() {
    let mut q = query("test");
    q.set_values([("foo", "bar")]);
    q.set_values(Vec::<(&str, &str)>::new());

    assert_eq!(q.sql(), Err(UpdateError::EmptyAssignmentList));
    assert_eq!(q.parameters(), Err(UpdateError::EmptyAssignmentList));
}

#[test]
fn empty_set_is_not_checked_before_render() {
    let mut q = query("test");
    q.set_where(Condition::eq("a", "b"));
    q.set_limit(3).unwrap();
    q.set_order_by(["a"]).unwrap();

    assert_eq!(q.render(), Err(UpdateError::EmptyAssignmentList));
}

#[test]
fn empty_table_list() {
    let err = UpdateQuery::new(Vec::<&str>::new()).unwrap_err();
    assert_eq!(err, UpdateError::EmptyTableList);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let none: [&str; 0] = [];
    assert_eq!(UpdateQuery::new(none), Err(UpdateError::EmptyTableList));
}

#[test]
fn order_limit_on_multiple() {
    let mut q = query(["test", "test2", "test3"]);
    let err = q.set_limit(10).unwrap_err();
    assert_eq!(err, UpdateError::MultiTableLimitNotAllowed);
    assert_eq!(err.kind(), ErrorKind::Logic);
    assert_eq!(q.limit(), None);

    let mut q = query(["test", "test2", "test3"]);
    let err = q.set_order_by([Field::new("field1")]).unwrap_err();
    assert_eq!(err, UpdateError::MultiTableOrderByNotAllowed);
    assert_eq!(err.kind(), ErrorKind::Logic);
    assert!(q.order_by().is_empty());
}

#[test]
fn rejected_limit_does_not_touch_render() {
    let mut q = query(["test", "test2"]);
    q.set_values([(Field::new("a"), 1_i64), (Field::at("b", 1), 2_i64)]);
    assert!(q.set_limit(5).is_err());
    assert!(q.set_order_by(["a"]).is_err());

    assert_eq!(
        sql(&q),
        "UPDATE `test` AS `t0`, `test2` AS `t1` SET `t0`.`a` = :p1, `t1`.`b` = :p2"
    );
}

#[test]
fn unknown_operators() {
    let err = "<=>".parse::<CompareOp>().unwrap_err();
    assert_eq!(err, UpdateError::UnknownOperator(String::from("<=>")));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = "||".parse::<ArithOp>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn field_past_last_table() {
    let mut q = query(["test", "test2"]);
    q.set_column(Field::at("a", 0), 1_i64);
    q.set_where(Condition::eq(Field::at("b", 2), "x"));

    let err = q.render().unwrap_err();
    assert_eq!(
        err,
        UpdateError::UnknownTableSlot {
            column: String::from("b"),
            slot: 2,
            tables: 2,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Logic);
}

#[test]
fn expression_field_past_last_table() {
    let mut q = query("test");
    q.set_column("a", ExpressionParameter::add(Field::at("a", 1), 1_i64));

    assert!(matches!(
        q.render(),
        Err(UpdateError::UnknownTableSlot { slot: 1, tables: 1, .. })
    ));
}

#[test]
fn order_by_field_past_last_table() {
    let mut q = query("test");
    q.set_column("a", 1_i64);
    q.set_order_by([Field::at("created", 4)]).unwrap();

    assert!(matches!(
        q.render(),
        Err(UpdateError::UnknownTableSlot { slot: 4, .. })
    ));
}

#[test]
fn statement_recovers_after_render_error() {
    let mut q = query("test");
    assert!(q.render().is_err());

    q.set_column("a", 1_i64);
    assert_eq!(sql(&q), "UPDATE `test` AS `t0` SET `t0`.`a` = :p1");
}
