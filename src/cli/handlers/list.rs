//! Generic list command pipeline
//!
//! Every list subcommand follows the same data path: fetch the full
//! list (through the cache), search, sort, and paginate in memory,
//! then render. Search, sort, and pagination are pure functions over
//! the fetched rows and never trigger a network call.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::cli::args::{ListArgs, SortDir};
use crate::cli::{OutputFormat, handlers};
use crate::error::Result;
use crate::models::Searchable;

/// Convert fetched records to display rows, apply the list pipeline,
/// and print them in the requested format.
pub fn render_list<T, D>(items: &[T], args: &ListArgs, format: OutputFormat) -> Result<()>
where
    D: for<'a> From<&'a T> + Tabled + Serialize + Searchable,
{
    let rows: Vec<D> = items.iter().map(D::from).collect();
    let rows = filter_rows(rows, args.search.as_deref());
    let rows = match args.sort_by.as_deref() {
        Some(field) => sort_rows(rows, field, args.sort_dir.unwrap_or(SortDir::Asc)),
        None => rows,
    };
    let rows = paginate(rows, args.limit, args.page);

    log::debug!("Rendering {} rows", rows.len());
    handlers::print_rows(&rows, format)
}

/// Case-insensitive substring search over each row's haystack.
///
/// A blank query returns the rows unchanged. `to_lowercase` folds the
/// full Unicode range, so "perić" matches "Perić".
pub fn filter_rows<D: Searchable>(rows: Vec<D>, search: Option<&str>) -> Vec<D> {
    let query = match search {
        Some(q) if !q.trim().is_empty() => q.trim().to_lowercase(),
        _ => return rows,
    };

    rows.into_iter()
        .filter(|row| row.haystack().to_lowercase().contains(&query))
        .collect()
}

/// Sort rows by a named column.
///
/// Rows are compared through their serialized form: strings fold case,
/// numbers compare numerically, missing or mismatched values sort last.
/// An unknown column name leaves the order unchanged.
pub fn sort_rows<D: Serialize>(rows: Vec<D>, field: &str, dir: SortDir) -> Vec<D> {
    let mut keyed: Vec<(Value, D)> = rows
        .into_iter()
        .map(|row| {
            let key = serde_json::to_value(&row)
                .ok()
                .and_then(|v| v.get(field).cloned())
                .unwrap_or(Value::Null);
            (key, row)
        })
        .collect();

    keyed.sort_by(|a, b| {
        let ord = compare_values(&a.0, &b.0);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, row)| row).collect()
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Slice out one page of the filtered rows.
pub fn paginate<D>(rows: Vec<D>, limit: Option<usize>, page: Option<usize>) -> Vec<D> {
    match limit {
        Some(limit) => rows
            .into_iter()
            .skip(page.unwrap_or(0).saturating_mul(limit))
            .take(limit)
            .collect(),
        None => rows,
    }
}
