//! Table and column references.

use crate::dialect;

/// A table taking part in an UPDATE, together with its position.
///
/// The position is fixed when the statement is created and gives the table
/// its alias (`t0`, `t1`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    name: String,
    slot: usize,
}

impl TableRef {
    pub(crate) fn new(name: impl Into<String>, slot: usize) -> Self {
        Self {
            name: name.into(),
            slot,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the zero-based position of the table in the statement.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Returns the alias the table is rendered with.
    #[must_use]
    pub fn alias(&self) -> String {
        dialect::table_alias(self.slot)
    }

    /// Returns `` `name` AS `tN` ``.
    #[must_use]
    pub fn to_sql(&self) -> String {
        format!(
            "{} AS {}",
            dialect::quote_identifier(&self.name),
            dialect::quote_identifier(&self.alias())
        )
    }
}

/// A column of one of the statement's tables.
///
/// A field built from a bare column name targets slot 0, the first table.
/// On multi-table statements use [`Field::at`] to address the others.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    column: String,
    slot: usize,
}

impl Field {
    /// Creates a field on the first table.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self::at(column, 0)
    }

    /// Creates a field on the table at `slot`.
    #[must_use]
    pub fn at(column: impl Into<String>, slot: usize) -> Self {
        Self {
            column: column.into(),
            slot,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the table slot this field belongs to.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Returns `` `tN`.`column` ``.
    #[must_use]
    pub fn to_sql(&self) -> String {
        dialect::qualified_column(self.slot, &self.column)
    }
}

impl From<&str> for Field {
    fn from(column: &str) -> Self {
        Self::new(column)
    }
}

impl From<String> for Field {
    fn from(column: String) -> Self {
        Self::new(column)
    }
}

impl From<&String> for Field {
    fn from(column: &String) -> Self {
        Self::new(column.as_str())
    }
}

impl From<&Field> for Field {
    fn from(field: &Field) -> Self {
        field.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ref_sql() {
        let table = TableRef::new("test2", 1);
        assert_eq!(table.alias(), "t1");
        assert_eq!(table.to_sql(), "`test2` AS `t1`");
    }

    #[test]
    fn test_field_defaults_to_first_table() {
        let field = Field::new("qwe");
        assert_eq!(field.slot(), 0);
        assert_eq!(field.to_sql(), "`t0`.`qwe`");
        assert_eq!(Field::from("qwe"), field);
    }

    #[test]
    fn test_field_on_other_table() {
        let field = Field::at("field2", 1);
        assert_eq!(field.column(), "field2");
        assert_eq!(field.to_sql(), "`t1`.`field2`");
    }
}
