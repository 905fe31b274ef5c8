#![allow(dead_code)]

use oxide_sql_update::{Parameters, SqlValue, UpdateQuery};

pub fn query<T: oxide_sql_update::builder::IntoTableList>(tables: T) -> UpdateQuery {
    UpdateQuery::new(tables).unwrap_or_else(|e| panic!("Failed to create update: {e}"))
}

pub fn render(q: &UpdateQuery) -> (String, Parameters) {
    q.render()
        .unwrap_or_else(|e| panic!("Failed to render: {q:?}\nError: {e}"))
}

pub fn sql(q: &UpdateQuery) -> String {
    render(q).0
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}

/// Counts the `:pN` placeholders in rendered SQL.
///
/// Only `:p` directly followed by a digit counts, and text inside backticks
/// is skipped so quoted identifiers never match.
pub fn placeholder_count(sql: &str) -> usize {
    sql.split('`')
        .step_by(2)
        .map(|outside| {
            outside
                .match_indices(":p")
                .filter(|(i, _)| {
                    outside[i + 2..]
                        .chars()
                        .next()
                        .is_some_and(|c| c.is_ascii_digit())
                })
                .count()
        })
        .sum()
}

/// Asserts that the parameter table maps `:p1..:pN` to `expected`, in order.
pub fn assert_params(params: &Parameters, expected: &[SqlValue]) {
    assert_eq!(params.len(), expected.len(), "parameter count: {params:?}");
    for (i, value) in expected.iter().enumerate() {
        let name = format!(":p{}", i + 1);
        assert_eq!(params.get(&name), Some(value), "parameter {name}");
    }
}
