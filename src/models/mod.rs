mod movie;
mod query;

pub use movie::{CatalogRow, DetailRecord, MovieResult, RecommendResponse, ResponseMeta, SearchHit};
pub use query::{RecommendParams, RecommendQuery, SortMode};
