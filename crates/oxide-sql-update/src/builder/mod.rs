//! UPDATE statement builder.
//!
//! An [`UpdateQuery`] is a mutable model of a (possibly multi-table) UPDATE.
//! Rendering walks it once and yields the SQL text together with a
//! [`Parameters`] table; every value is bound to a `:pN` placeholder.
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_update::builder::{ExpressionParameter, Field, UpdateQuery};
//!
//! let mut query = UpdateQuery::new(["posts", "authors"])?;
//! query.set_values([
//!     (Field::new("views"), ExpressionParameter::add("views", 1_i64)),
//!     (Field::at("score", 1), ExpressionParameter::add(Field::at("score", 1), 5_i64)),
//! ]);
//!
//! let (sql, params) = query.render()?;
//! assert_eq!(
//!     sql,
//!     "UPDATE `posts` AS `t0`, `authors` AS `t1` \
//!      SET `t0`.`views` = `t0`.`views` + :p1, `t1`.`score` = `t1`.`score` + :p2"
//! );
//! assert_eq!(params.len(), 2);
//! # Ok::<(), oxide_sql_update::UpdateError>(())
//! ```

mod expr;
mod field;
mod params;
mod update;
pub mod value;

pub use expr::{ArithOp, CompareOp, Condition, ExpressionParameter, ToValueExpr, ValueExpr};
pub use field::{Field, TableRef};
pub use params::Parameters;
pub use update::{Assignment, IntoTableList, UpdateQuery};
pub use value::{SqlValue, ToSqlValue};
