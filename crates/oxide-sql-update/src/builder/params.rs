//! The ordered parameter table produced by a render.

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::SqlValue;
use crate::dialect;

/// Placeholder names mapped to their bound values, in emission order.
///
/// The first value bound is `:p1`, the next `:p2`, and so on. Drivers that bind
/// by name can use [`Parameters::iter`]; drivers that bind by position can use
/// [`Parameters::values`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: Vec<(String, SqlValue)>,
}

impl Parameters {
    /// Creates an empty parameter table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Binds `value` to the next placeholder and returns the placeholder text.
    pub(crate) fn bind(&mut self, value: SqlValue) -> String {
        let name = dialect::placeholder(self.entries.len() + 1);
        self.entries.push((name.clone(), value));
        name
    }

    /// Returns the value bound to `name` (e.g. `":p1"`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing was bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(placeholder, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterates over the placeholder names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the bound values in positional order.
    #[must_use]
    pub fn values(&self) -> Vec<&SqlValue> {
        self.entries.iter().map(|(_, v)| v).collect()
    }

    /// Consumes the table and returns the bound values in positional order.
    #[must_use]
    pub fn into_values(self) -> Vec<SqlValue> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}

impl IntoIterator for Parameters {
    type Item = (String, SqlValue);
    type IntoIter = std::vec::IntoIter<(String, SqlValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_numbers_from_one() {
        let mut params = Parameters::new();
        assert!(params.is_empty());
        assert_eq!(params.bind(SqlValue::Int(1)), ":p1");
        assert_eq!(params.bind(SqlValue::Text(String::from("b"))), ":p2");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(":p2"), Some(&SqlValue::Text(String::from("b"))));
        assert_eq!(params.get(":p3"), None);
        assert_eq!(params.names().collect::<Vec<_>>(), vec![":p1", ":p2"]);
    }

    #[test]
    fn test_positional_values() {
        let mut params = Parameters::new();
        params.bind(SqlValue::Bool(true));
        params.bind(SqlValue::Null);
        assert_eq!(params.values(), vec![&SqlValue::Bool(true), &SqlValue::Null]);
        assert_eq!(
            params.into_values(),
            vec![SqlValue::Bool(true), SqlValue::Null]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_ordered_map() {
        let mut params = Parameters::new();
        params.bind(SqlValue::Text(String::from("qweqwe")));
        params.bind(SqlValue::Int(10));
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{":p1":"qweqwe",":p2":10}"#);
    }
}
