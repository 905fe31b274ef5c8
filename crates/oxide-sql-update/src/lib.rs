//! # oxide-sql-update
//!
//! A parameterized builder for (multi-table) UPDATE statements.
//!
//! This crate provides:
//! - A mutable statement model: tables, SET assignments, one WHERE condition,
//!   ORDER BY and LIMIT
//! - A deterministic renderer producing SQL text plus an ordered parameter table
//! - Protection against SQL injection: values are always bound to placeholders
//!
//! Tables are aliased by position (`t0`, `t1`, ...), identifiers are wrapped
//! in backticks and values are bound to named `:pN` placeholders.
//!
//! ## Building an UPDATE
//!
//! ```rust
//! use oxide_sql_update::UpdateQuery;
//!
//! let mut query = UpdateQuery::new("test")?;
//! query.set_values([("qwe", "qweqwe")]);
//! query.set_order_by(["date"])?;
//! query.set_limit(10)?;
//!
//! assert_eq!(
//!     query.sql()?,
//!     "UPDATE `test` AS `t0` SET `t0`.`qwe` = :p1 ORDER BY `t0`.`date` ASC LIMIT 10"
//! );
//! # Ok::<(), oxide_sql_update::UpdateError>(())
//! ```
//!
//! ## SQL Injection Prevention
//!
//! ```rust
//! use oxide_sql_update::{Condition, SqlValue, UpdateQuery};
//!
//! let user_input = "'; DROP TABLE users; --";
//! let mut query = UpdateQuery::new("users")?;
//! query.set_column("name", user_input);
//! query.set_where(Condition::eq("id", 1_i64));
//!
//! let (sql, params) = query.render()?;
//! assert_eq!(sql, "UPDATE `users` AS `t0` SET `t0`.`name` = :p1 WHERE `t0`.`id` = :p2");
//! assert_eq!(params.get(":p1"), Some(&SqlValue::Text(user_input.to_string())));
//! # Ok::<(), oxide_sql_update::UpdateError>(())
//! ```
//!
//! Multi-table statements reject `LIMIT` and `ORDER BY` as soon as they are
//! requested; rendering without any assignment fails with
//! [`UpdateError::EmptyAssignmentList`].

pub mod builder;
pub mod dialect;
mod error;

pub use builder::{
    ArithOp, CompareOp, Condition, ExpressionParameter, Field, Parameters, SqlValue, ToSqlValue,
    UpdateQuery, ValueExpr,
};
pub use error::{ErrorKind, Result, UpdateError};
