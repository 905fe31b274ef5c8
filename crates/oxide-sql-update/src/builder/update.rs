//! Multi-table UPDATE statement builder.

use tracing::{debug, trace};

use super::expr::{Condition, ToValueExpr, ValueExpr};
use super::field::{Field, TableRef};
use super::params::Parameters;
use crate::error::{Result, UpdateError};

/// Types that name the tables of an UPDATE: a single name or an ordered list.
pub trait IntoTableList {
    /// Returns the table names in statement order.
    fn into_table_names(self) -> Vec<String>;
}

impl IntoTableList for &str {
    fn into_table_names(self) -> Vec<String> {
        vec![String::from(self)]
    }
}

impl IntoTableList for String {
    fn into_table_names(self) -> Vec<String> {
        vec![self]
    }
}

impl<T: Into<String>> IntoTableList for Vec<T> {
    fn into_table_names(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String>, const N: usize> IntoTableList for [T; N] {
    fn into_table_names(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String> + Clone> IntoTableList for &[T] {
    fn into_table_names(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// An assignment in the SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    field: Field,
    value: ValueExpr,
}

impl Assignment {
    /// Returns the assigned column.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the assigned value.
    #[must_use]
    pub const fn value(&self) -> &ValueExpr {
        &self.value
    }
}

/// A mutable UPDATE statement.
///
/// Tables are fixed at construction and aliased `t0`, `t1`, ... in the order
/// given. Everything else can be changed at any time before (or between)
/// renders.
///
/// # Example
///
/// ```rust
/// use oxide_sql_update::{Condition, UpdateQuery};
///
/// let mut query = UpdateQuery::new("test")?;
/// query.set_values([("qwe", "qweqwe")]);
/// query.set_where(Condition::eq("a", "b"));
///
/// let (sql, params) = query.render()?;
/// assert_eq!(sql, "UPDATE `test` AS `t0` SET `t0`.`qwe` = :p1 WHERE `t0`.`a` = :p2");
/// assert_eq!(params.len(), 2);
/// # Ok::<(), oxide_sql_update::UpdateError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQuery {
    tables: Vec<TableRef>,
    assignments: Vec<Assignment>,
    condition: Option<Condition>,
    order_by: Vec<Field>,
    limit: Option<u64>,
}

impl UpdateQuery {
    /// Creates an UPDATE over one table or an ordered list of tables.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::EmptyTableList`] when no table is given.
    pub fn new<T: IntoTableList>(tables: T) -> Result<Self> {
        let names = tables.into_table_names();
        if names.is_empty() {
            debug!("rejecting update without tables");
            return Err(UpdateError::EmptyTableList);
        }

        let tables = names
            .into_iter()
            .enumerate()
            .map(|(slot, name)| TableRef::new(name, slot))
            .collect();

        Ok(Self {
            tables,
            assignments: vec![],
            condition: None,
            order_by: vec![],
            limit: None,
        })
    }

    /// Returns the tables in statement order.
    #[must_use]
    pub fn tables(&self) -> &[TableRef] {
        &self.tables
    }

    /// Returns the SET assignments in render order.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns the WHERE condition, if any.
    #[must_use]
    pub const fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Returns the ORDER BY fields (empty when unordered).
    #[must_use]
    pub fn order_by(&self) -> &[Field] {
        &self.order_by
    }

    /// Returns the LIMIT, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    fn is_multi_table(&self) -> bool {
        self.tables.len() > 1
    }

    /// Replaces the whole SET clause.
    ///
    /// Accepts any sequence of `(column, value)` pairs: an ordered map of
    /// column names, a list of `(&str, value)` pairs, or a list of
    /// `(Field, value)` pairs for multi-table targeting. Values may be literals
    /// or [`ExpressionParameter`](super::ExpressionParameter)s. An empty
    /// sequence clears the clause. Pairs are kept exactly as supplied, in
    /// order; a column given twice is assigned twice.
    pub fn set_values<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Field>,
        V: ToValueExpr,
    {
        self.assignments = values
            .into_iter()
            .map(|(field, value)| Assignment {
                field: field.into(),
                value: value.to_value_expr(),
            })
            .collect();
        trace!(assignments = self.assignments.len(), "replaced SET clause");
        self
    }

    /// Assigns a single column, keeping every other assignment.
    ///
    /// The first existing assignment to the same field is overwritten in
    /// place; a new field is appended.
    pub fn set_column<K, V>(&mut self, field: K, value: V) -> &mut Self
    where
        K: Into<Field>,
        V: ToValueExpr,
    {
        let field = field.into();
        trace!(column = field.column(), slot = field.slot(), "set column");
        self.upsert(field, value.to_value_expr());
        self
    }

    fn upsert(&mut self, field: Field, value: ValueExpr) {
        match self.assignments.iter_mut().find(|a| a.field == field) {
            Some(existing) => existing.value = value,
            None => self.assignments.push(Assignment { field, value }),
        }
    }

    /// Sets the WHERE condition, replacing any previous one.
    pub fn set_where(&mut self, condition: Condition) -> &mut Self {
        trace!(column = condition.field().column(), op = %condition.op(), "set WHERE");
        self.condition = Some(condition);
        self
    }

    /// Removes the WHERE condition.
    pub fn clear_where(&mut self) -> &mut Self {
        self.condition = None;
        self
    }

    /// Sets the LIMIT.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::MultiTableLimitNotAllowed`] when the statement
    /// updates more than one table. The limit is left unchanged.
    pub fn set_limit(&mut self, limit: u64) -> Result<&mut Self> {
        if self.is_multi_table() {
            debug!(tables = self.tables.len(), "rejecting LIMIT on multi-table update");
            return Err(UpdateError::MultiTableLimitNotAllowed);
        }
        trace!(limit, "set LIMIT");
        self.limit = Some(limit);
        Ok(self)
    }

    /// Sets the ORDER BY fields, all ascending. An empty list removes ordering.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::MultiTableOrderByNotAllowed`] when the statement
    /// updates more than one table. The ordering is left unchanged.
    pub fn set_order_by<I, K>(&mut self, fields: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<Field>,
    {
        if self.is_multi_table() {
            debug!(tables = self.tables.len(), "rejecting ORDER BY on multi-table update");
            return Err(UpdateError::MultiTableOrderByNotAllowed);
        }
        self.order_by = fields.into_iter().map(Into::into).collect();
        trace!(fields = self.order_by.len(), "set ORDER BY");
        Ok(self)
    }

    /// Renders the statement into SQL text and its parameter table.
    ///
    /// Placeholders are numbered from `:p1` in emission order: SET values
    /// first, then the WHERE value. Rendering does not modify the statement,
    /// so rendering twice yields identical output.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::EmptyAssignmentList`] when nothing is assigned,
    /// and [`UpdateError::UnknownTableSlot`] when a field points past the last
    /// table.
    pub fn render(&self) -> Result<(String, Parameters)> {
        if self.assignments.is_empty() {
            debug!("rejecting render of update without assignments");
            return Err(UpdateError::EmptyAssignmentList);
        }
        self.check_slots()?;

        let mut sql = String::from("UPDATE ");
        let mut params = Parameters::new();

        let table_parts: Vec<String> = self.tables.iter().map(TableRef::to_sql).collect();
        sql.push_str(&table_parts.join(", "));

        sql.push_str(" SET ");
        let set_parts: Vec<String> = self
            .assignments
            .iter()
            .map(|a| format!("{} = {}", a.field.to_sql(), a.value.render(&mut params)))
            .collect();
        sql.push_str(&set_parts.join(", "));

        if let Some(ref condition) = self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(&condition.render(&mut params));
        }

        if !self.is_multi_table() {
            if !self.order_by.is_empty() {
                sql.push_str(" ORDER BY ");
                let order_parts: Vec<String> = self
                    .order_by
                    .iter()
                    .map(|f| format!("{} ASC", f.to_sql()))
                    .collect();
                sql.push_str(&order_parts.join(", "));
            }

            if let Some(limit) = self.limit {
                sql.push_str(" LIMIT ");
                sql.push_str(&limit.to_string());
            }
        }

        debug!(
            tables = self.tables.len(),
            params = params.len(),
            "rendered UPDATE"
        );
        Ok((sql, params))
    }

    /// Renders the statement and returns only the SQL text.
    ///
    /// # Errors
    ///
    /// Same as [`UpdateQuery::render`].
    pub fn sql(&self) -> Result<String> {
        self.render().map(|(sql, _)| sql)
    }

    /// Renders the statement and returns only the parameter table.
    ///
    /// # Errors
    ///
    /// Same as [`UpdateQuery::render`].
    pub fn parameters(&self) -> Result<Parameters> {
        self.render().map(|(_, params)| params)
    }

    fn check_slots(&self) -> Result<()> {
        let tables = self.tables.len();
        let fields = self
            .assignments
            .iter()
            .flat_map(|a| std::iter::once(&a.field).chain(a.value.expression_field()))
            .chain(self.condition.iter().map(Condition::field))
            .chain(self.order_by.iter());

        for field in fields {
            if field.slot() >= tables {
                debug!(
                    column = field.column(),
                    slot = field.slot(),
                    tables,
                    "rejecting field with unknown table slot"
                );
                return Err(UpdateError::UnknownTableSlot {
                    column: String::from(field.column()),
                    slot: field.slot(),
                    tables,
                });
            }
        }
        Ok(())
    }
}
