//! Quoting and placeholder rules.
//!
//! The builder targets a single dialect: identifiers are wrapped in backticks
//! and parameters use named `:pN` placeholders. Identifiers are wrapped as-is;
//! only values are ever parameterized.

/// The identifier quote character.
pub const IDENTIFIER_QUOTE: char = '`';

/// Prefix of every generated placeholder.
pub const PLACEHOLDER_PREFIX: &str = ":p";

/// Prefix of every generated table alias.
pub const ALIAS_PREFIX: char = 't';

/// Wraps an identifier in backticks.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("{IDENTIFIER_QUOTE}{name}{IDENTIFIER_QUOTE}")
}

/// Returns the (unquoted) alias of the table at `slot`.
#[must_use]
pub fn table_alias(slot: usize) -> String {
    format!("{ALIAS_PREFIX}{slot}")
}

/// Returns `` `tN`.`column` ``.
#[must_use]
pub fn qualified_column(slot: usize, column: &str) -> String {
    format!(
        "{}.{}",
        quote_identifier(&table_alias(slot)),
        quote_identifier(column)
    )
}

/// Returns the placeholder for the `index`-th bound parameter (1-based).
#[must_use]
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "`users`");
        assert_eq!(quote_identifier("t0"), "`t0`");
    }

    #[test]
    fn test_qualified_column() {
        assert_eq!(qualified_column(0, "name"), "`t0`.`name`");
        assert_eq!(qualified_column(3, "date"), "`t3`.`date`");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder(1), ":p1");
        assert_eq!(placeholder(12), ":p12");
    }
}
