use std::cmp::Ordering;

use crate::models::{CatalogRow, RecommendQuery, SortMode};

/// Maximum number of rows returned to the caller
pub const MAX_RESULTS: usize = 10;

/// Applies the query's predicates, sorts, and caps the catalog
///
/// The stage order is fixed so results stay deterministic: genre filter,
/// rating threshold, year bounds, stable sort, then the output cap. Rows
/// with a missing numeric field fail any threshold on that field, since an
/// unknown value is never assumed to satisfy a minimum or maximum.
pub fn apply(rows: Vec<CatalogRow>, query: &RecommendQuery) -> Vec<CatalogRow> {
    let mut rows: Vec<CatalogRow> = rows
        .into_iter()
        .filter(|row| matches_genre(row, query.genre.as_deref()))
        .filter(|row| meets_min_rating(row, query.min_rating))
        .filter(|row| within_year_bounds(row, query.min_year, query.max_year))
        .collect();

    sort_rows(&mut rows, query.sort);
    rows.truncate(MAX_RESULTS);
    rows
}

/// Case-insensitive substring match on the comma-separated genre field.
/// Rows with no genre data never match an active filter.
fn matches_genre(row: &CatalogRow, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => {
            !row.detail.genre.is_empty()
                && row
                    .detail
                    .genre
                    .to_lowercase()
                    .contains(&wanted.to_lowercase())
        }
    }
}

fn meets_min_rating(row: &CatalogRow, min_rating: Option<f64>) -> bool {
    match min_rating {
        None => true,
        Some(min) => row.numeric_rating.map(|r| r >= min).unwrap_or(false),
    }
}

fn within_year_bounds(row: &CatalogRow, min_year: Option<i32>, max_year: Option<i32>) -> bool {
    let min_ok = match min_year {
        None => true,
        Some(min) => row.numeric_year.map(|y| y >= min).unwrap_or(false),
    };
    let max_ok = match max_year {
        None => true,
        Some(max) => row.numeric_year.map(|y| y <= max).unwrap_or(false),
    };
    min_ok && max_ok
}

/// Stable sort on the requested key; rows missing the key sort last in both
/// directions, so ties and unknowns keep the enricher's first-seen order.
fn sort_rows(rows: &mut [CatalogRow], mode: SortMode) {
    match mode {
        SortMode::Newest => rows.sort_by(|a, b| compare_keys(a.numeric_year, b.numeric_year, false)),
        SortMode::Oldest => rows.sort_by(|a, b| compare_keys(a.numeric_year, b.numeric_year, true)),
        SortMode::Rating => {
            rows.sort_by(|a, b| compare_keys(a.numeric_rating, b.numeric_rating, false))
        }
    }
}

fn compare_keys<T: PartialOrd>(a: Option<T>, b: Option<T>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
