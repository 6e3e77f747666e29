use serde::Deserialize;

/// Sort order for the final result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Numeric rating, descending (default)
    #[default]
    Rating,
    /// Numeric year, descending
    Newest,
    /// Numeric year, ascending
    Oldest,
}

impl SortMode {
    /// Parses the inbound `sort` parameter; anything unrecognized falls back
    /// to rating order.
    pub fn parse(value: &str) -> Self {
        match value {
            "newest" => SortMode::Newest,
            "oldest" => SortMode::Oldest,
            _ => SortMode::Rating,
        }
    }
}

/// Raw query parameters as received on the wire
///
/// All fields are optional strings; numeric fields that fail to parse are
/// ignored rather than rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendParams {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub sort: Option<String>,
}

/// Validated query driving one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendQuery {
    /// Search text sent upstream; defaults to "movie" when the caller sends
    /// nothing, so an empty query still produces a browsable list.
    pub text: String,
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub sort: SortMode,
}

impl Default for RecommendQuery {
    fn default() -> Self {
        Self {
            text: "movie".to_string(),
            genre: None,
            min_rating: None,
            min_year: None,
            max_year: None,
            sort: SortMode::Rating,
        }
    }
}

impl From<RecommendParams> for RecommendQuery {
    fn from(params: RecommendParams) -> Self {
        let text = params
            .q
            .filter(|q| !q.trim().is_empty())
            .unwrap_or_else(|| "movie".to_string());

        // Empty string and the "any" sentinel both mean no genre restriction.
        let genre = params
            .genre
            .filter(|g| !g.trim().is_empty() && !g.trim().eq_ignore_ascii_case("any"));

        Self {
            text,
            genre,
            min_rating: params.min_rating.as_deref().and_then(parse_float),
            min_year: params.min_year.as_deref().and_then(parse_int),
            max_year: params.max_year.as_deref().and_then(parse_int),
            sort: params.sort.as_deref().map(SortMode::parse).unwrap_or_default(),
        }
    }
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_int(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}
