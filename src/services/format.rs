use crate::models::{CatalogRow, MovieResult};

/// Base URL for the per-title detail link in results
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// Projects surviving catalog rows into the public output shape
///
/// Missing source fields pass through as empty strings; the only synthesized
/// field is `detail_url`, built deterministically from the identifier.
pub fn project(rows: Vec<CatalogRow>) -> Vec<MovieResult> {
    rows.into_iter().map(to_result).collect()
}

fn to_result(row: CatalogRow) -> MovieResult {
    let detail = row.detail;
    MovieResult {
        detail_url: format!("{}{}/", IMDB_TITLE_URL, detail.imdb_id),
        title: detail.title,
        year: detail.year,
        rating: detail.rating,
        runtime: detail.runtime,
        genre: detail.genre,
        plot: detail.plot,
        poster_url: detail.poster,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DetailRecord;

    #[test]
    fn test_detail_url_built_from_identifier() {
        let rows = vec![CatalogRow {
            detail: DetailRecord {
                imdb_id: "tt0468569".to_string(),
                title: "The Dark Knight".to_string(),
                year: "2008".to_string(),
                rating: "9.0".to_string(),
                ..Default::default()
            },
            numeric_rating: Some(9.0),
            numeric_year: Some(2008),
        }];

        let results = project(rows);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].detail_url, "https://www.imdb.com/title/tt0468569/");
        assert_eq!(results[0].title, "The Dark Knight");
    }

    #[test]
    fn test_missing_fields_pass_through_empty() {
        let rows = vec![CatalogRow {
            detail: DetailRecord {
                imdb_id: "tt0000001".to_string(),
                title: "Sparse".to_string(),
                ..Default::default()
            },
            numeric_rating: None,
            numeric_year: None,
        }];

        let results = project(rows);
        assert_eq!(results[0].year, "");
        assert_eq!(results[0].rating, "");
        assert_eq!(results[0].poster_url, "");
    }
}
