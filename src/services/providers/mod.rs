/// Movie metadata provider abstraction
///
/// The pipeline only ever talks to the upstream through this trait, which
/// keeps the network edge swappable and lets tests drive the full pipeline
/// with canned responses.
use crate::{
    error::AppResult,
    models::{DetailRecord, SearchHit},
};

pub mod omdb;

pub use omdb::OmdbClient;

/// Trait for movie metadata providers
///
/// Providers implement paged title search plus per-identifier detail lookup.
/// Both operations are fallible at the transport layer; "no results" and
/// "identifier unknown" are ordinary return values, not errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch one page of search results
    ///
    /// Returns the hits on that page plus a flag indicating whether the
    /// provider has more pages. An empty page with `false` means the search
    /// matched nothing, which callers must not treat as a failure.
    async fn search(&self, query: &str, page: u32) -> AppResult<(Vec<SearchHit>, bool)>;

    /// Fetch the full detail record for one identifier
    ///
    /// Returns `None` when the provider does not know the identifier (or the
    /// identifier is empty, in which case no request is made).
    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<Option<DetailRecord>>;
}
