//! Error types for the UPDATE builder.

use thiserror::Error;

/// Broad classification of an [`UpdateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller supplied an argument the builder cannot accept.
    InvalidArgument,
    /// The statement is in a state where the requested operation is illegal.
    Logic,
}

/// Errors raised while building or rendering an UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// The statement was created without any table.
    #[error("update requires at least one table")]
    EmptyTableList,

    /// An operator string did not name a supported operator.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// `LIMIT` was requested on a statement that updates several tables.
    #[error("LIMIT not allowed on multi-table update")]
    MultiTableLimitNotAllowed,

    /// `ORDER BY` was requested on a statement that updates several tables.
    #[error("ORDER BY not allowed on multi-table update")]
    MultiTableOrderByNotAllowed,

    /// The statement was rendered before any value was assigned.
    #[error("update has no assigned values")]
    EmptyAssignmentList,

    /// A field points at a table slot the statement does not have.
    #[error("field '{column}' references table slot {slot}, but the update has {tables} table(s)")]
    UnknownTableSlot {
        /// Column name of the offending field.
        column: String,
        /// Slot the field asked for.
        slot: usize,
        /// Number of tables in the statement.
        tables: usize,
    },
}

impl UpdateError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTableList | Self::UnknownOperator(_) => ErrorKind::InvalidArgument,
            Self::MultiTableLimitNotAllowed
            | Self::MultiTableOrderByNotAllowed
            | Self::EmptyAssignmentList
            | Self::UnknownTableSlot { .. } => ErrorKind::Logic,
        }
    }
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, UpdateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(UpdateError::EmptyTableList.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            UpdateError::UnknownOperator(String::from("<=>")).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(UpdateError::MultiTableLimitNotAllowed.kind(), ErrorKind::Logic);
        assert_eq!(UpdateError::MultiTableOrderByNotAllowed.kind(), ErrorKind::Logic);
        assert_eq!(UpdateError::EmptyAssignmentList.kind(), ErrorKind::Logic);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UpdateError::MultiTableLimitNotAllowed.to_string(),
            "LIMIT not allowed on multi-table update"
        );
        assert_eq!(
            UpdateError::EmptyAssignmentList.to_string(),
            "update has no assigned values"
        );
        let err = UpdateError::UnknownTableSlot {
            column: String::from("name"),
            slot: 2,
            tables: 1,
        };
        assert_eq!(
            err.to_string(),
            "field 'name' references table slot 2, but the update has 1 table(s)"
        );
    }
}
