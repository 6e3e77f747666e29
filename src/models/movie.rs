use serde::{Deserialize, Serialize};

/// Minimal record from one OMDb search page entry
///
/// Carries just enough to drive detail enrichment. The same identifier may
/// appear on more than one page; the enricher deduplicates before fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
}

/// Fully enriched record for one movie, as returned by the OMDb detail
/// endpoint. Fields use the upstream's sentinel conventions: absent values
/// come back as empty strings or the literal "N/A", and `year` may be a
/// range like "2019–". Downstream numeric use goes through [`CatalogRow`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbRating", default)]
    pub rating: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// A detail record plus its coerced numeric fields
///
/// `numeric_rating` and `numeric_year` are computed once by the catalog
/// builder and never recomputed; `None` means "unknown", which is distinct
/// from zero and fails any numeric threshold filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub detail: DetailRecord,
    pub numeric_rating: Option<f64>,
    pub numeric_year: Option<i32>,
}

/// Public output shape for one recommended movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieResult {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub runtime: String,
    pub genre: String,
    pub plot: String,
    pub poster_url: String,
    pub detail_url: String,
}

/// Response envelope metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub count: usize,
    pub message: String,
}

/// Successful response envelope for the recommend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub results: Vec<MovieResult>,
    pub meta: ResponseMeta,
}
