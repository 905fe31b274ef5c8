//! Conditions and assigned-value expressions.

use std::fmt;
use std::str::FromStr;

use super::field::Field;
use super::params::Parameters;
use super::value::{SqlValue, ToSqlValue};
use crate::error::UpdateError;

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<>`
    LtGt,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
}

impl CompareOp {
    /// Returns the SQL text of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::LtGt => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }
}

impl FromStr for CompareOp {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "=" => Ok(Self::Eq),
            "!=" => Ok(Self::NotEq),
            "<>" => Ok(Self::LtGt),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::LtEq),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::GtEq),
            "LIKE" => Ok(Self::Like),
            "NOT LIKE" => Ok(Self::NotLike),
            _ => Err(UpdateError::UnknownOperator(String::from(s))),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arithmetic operator of an [`ExpressionParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl ArithOp {
    /// Returns the SQL text of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

impl FromStr for ArithOp {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "%" => Ok(Self::Mod),
            _ => Err(UpdateError::UnknownOperator(String::from(s))),
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `<field> <op> <value>` predicate for the WHERE clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    left: Field,
    op: CompareOp,
    right: SqlValue,
}

impl Condition {
    /// Creates a condition comparing `field` with `value`.
    #[must_use]
    pub fn new<F: Into<Field>, T: ToSqlValue>(op: CompareOp, field: F, value: T) -> Self {
        Self {
            left: field.into(),
            op,
            right: value.to_sql_value(),
        }
    }

    /// Creates an equality condition.
    #[must_use]
    pub fn eq<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(CompareOp::Eq, field, value)
    }

    /// Creates an inequality condition.
    #[must_use]
    pub fn not_eq<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(CompareOp::NotEq, field, value)
    }

    /// Creates a less-than condition.
    #[must_use]
    pub fn lt<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(CompareOp::Lt, field, value)
    }

    /// Creates a less-than-or-equal condition.
    #[must_use]
    pub fn lt_eq<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(CompareOp::LtEq, field, value)
    }

    /// Creates a greater-than condition.
    #[must_use]
    pub fn gt<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(CompareOp::Gt, field, value)
    }

    /// Creates a greater-than-or-equal condition.
    #[must_use]
    pub fn gt_eq<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(CompareOp::GtEq, field, value)
    }

    /// Creates a LIKE condition.
    #[must_use]
    pub fn like<F: Into<Field>, T: ToSqlValue>(field: F, pattern: T) -> Self {
        Self::new(CompareOp::Like, field, pattern)
    }

    /// Returns the compared field.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.left
    }

    /// Returns the comparison operator.
    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    /// Returns the value the field is compared with.
    #[must_use]
    pub const fn value(&self) -> &SqlValue {
        &self.right
    }

    pub(crate) fn render(&self, params: &mut Parameters) -> String {
        let placeholder = params.bind(self.right.clone());
        format!("{} {} {placeholder}", self.left.to_sql(), self.op)
    }
}

/// A computed value: `<field> <op> <value>`.
///
/// Assigned to a column it produces in-place updates such as
/// `` `t0`.`hits` = `t0`.`hits` + :p1 ``. The field does not have to be the
/// column being assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionParameter {
    field: Field,
    op: ArithOp,
    value: SqlValue,
}

impl ExpressionParameter {
    /// Creates an expression combining `field` and `value` with `op`.
    #[must_use]
    pub fn new<F: Into<Field>, T: ToSqlValue>(field: F, op: ArithOp, value: T) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.to_sql_value(),
        }
    }

    /// Creates `<field> + <value>`.
    #[must_use]
    pub fn add<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(field, ArithOp::Add, value)
    }

    /// Creates `<field> - <value>`.
    #[must_use]
    pub fn sub<F: Into<Field>, T: ToSqlValue>(field: F, value: T) -> Self {
        Self::new(field, ArithOp::Sub, value)
    }

    /// Returns the field the expression reads.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the arithmetic operator.
    #[must_use]
    pub const fn op(&self) -> ArithOp {
        self.op
    }

    /// Returns the bound operand.
    #[must_use]
    pub const fn value(&self) -> &SqlValue {
        &self.value
    }

    pub(crate) fn render(&self, params: &mut Parameters) -> String {
        let placeholder = params.bind(self.value.clone());
        format!("{} {} {placeholder}", self.field.to_sql(), self.op)
    }
}

/// Right-hand side of a SET assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpr {
    /// A literal bound to its own placeholder.
    Literal(SqlValue),
    /// A computed expression.
    Expression(ExpressionParameter),
}

impl ValueExpr {
    pub(crate) fn render(&self, params: &mut Parameters) -> String {
        match self {
            Self::Literal(value) => params.bind(value.clone()),
            Self::Expression(expr) => expr.render(params),
        }
    }

    /// Returns the field an expression value reads.
    pub(crate) const fn expression_field(&self) -> Option<&Field> {
        match self {
            Self::Literal(_) => None,
            Self::Expression(expr) => Some(expr.field()),
        }
    }
}

/// Trait for types that can appear on the right-hand side of SET.
pub trait ToValueExpr {
    /// Converts the value to a `ValueExpr`.
    fn to_value_expr(self) -> ValueExpr;
}

impl<T: ToSqlValue> ToValueExpr for T {
    fn to_value_expr(self) -> ValueExpr {
        ValueExpr::Literal(self.to_sql_value())
    }
}

impl ToValueExpr for ExpressionParameter {
    fn to_value_expr(self) -> ValueExpr {
        ValueExpr::Expression(self)
    }
}

impl ToValueExpr for ValueExpr {
    fn to_value_expr(self) -> ValueExpr {
        self
    }
}
