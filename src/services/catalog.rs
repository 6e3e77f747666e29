use crate::models::{CatalogRow, DetailRecord};

/// Builds catalog rows from raw detail records
///
/// Coerces the loosely-typed rating and year strings into numeric fields
/// exactly once per row. Rows missing a title or identifier are unusable
/// downstream and are dropped here; rows that merely lack numeric data are
/// kept, since excluding them is the filter stage's decision.
pub fn build_rows(details: Vec<DetailRecord>) -> Vec<CatalogRow> {
    details
        .into_iter()
        .filter(|d| !d.title.is_empty() && !d.imdb_id.is_empty())
        .map(|detail| {
            let numeric_rating = parse_rating(&detail.rating);
            let numeric_year = parse_year(&detail.year);
            CatalogRow {
                detail,
                numeric_rating,
                numeric_year,
            }
        })
        .collect()
}

/// Parses a rating like "8.1"; "N/A" and anything else non-numeric is None.
fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Extracts the first run of 4 consecutive digits from a year field,
/// handling ranges like "2019–" and "2019–2021".
fn parse_year(raw: &str) -> Option<i32> {
    let bytes = raw.as_bytes();
    let mut run = 0usize;

    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            run += 1;
            if run == 4 {
                let start = i + 1 - 4;
                return raw[start..=i].parse().ok();
            }
        } else {
            run = 0;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str, title: &str, year: &str, rating: &str) -> DetailRecord {
        DetailRecord {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            rating: rating.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_numeric_fields_coerced() {
        let rows = build_rows(vec![detail("tt0001", "First", "2008", "9.0")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].numeric_rating, Some(9.0));
        assert_eq!(rows[0].numeric_year, Some(2008));
    }

    #[test]
    fn test_na_rating_is_none_not_zero() {
        let rows = build_rows(vec![detail("tt0001", "First", "2008", "N/A")]);
        assert_eq!(rows[0].numeric_rating, None);
    }

    #[test]
    fn test_year_range_uses_first_digit_run() {
        assert_eq!(parse_year("2019–"), Some(2019));
        assert_eq!(parse_year("2019–2021"), Some(2019));
        assert_eq!(parse_year("2005"), Some(2005));
    }

    #[test]
    fn test_year_without_digits_is_none() {
        assert_eq!(parse_year("N/A"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("TBA"), None);
    }

    #[test]
    fn test_year_digit_run_shorter_than_four_is_none() {
        assert_eq!(parse_year("99–01"), None);
    }

    #[test]
    fn test_year_run_buried_in_text() {
        assert_eq!(parse_year("ca. 1997 (restored)"), Some(1997));
    }

    #[test]
    fn test_rating_nan_string_is_none() {
        assert_eq!(parse_rating("NaN"), None);
        assert_eq!(parse_rating("inf"), None);
    }

    #[test]
    fn test_rows_missing_title_or_id_dropped() {
        let rows = build_rows(vec![
            detail("", "Headless", "2000", "7.0"),
            detail("tt0002", "", "2001", "7.1"),
            detail("tt0003", "Kept", "2002", "7.2"),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].detail.title, "Kept");
    }

    #[test]
    fn test_rows_with_missing_numerics_survive() {
        let rows = build_rows(vec![detail("tt0001", "Unrated", "N/A", "N/A")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].numeric_rating, None);
        assert_eq!(rows[0].numeric_year, None);
    }
}
