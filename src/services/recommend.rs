use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{RecommendQuery, RecommendResponse, ResponseMeta, SearchHit},
    services::{cache::DetailCache, catalog, enrich::Enricher, filter, format, providers::MovieProvider},
};

/// Status message when at least one movie survived filtering
pub const MSG_RESULTS: &str = "Showing curated picks";
/// Status message for an empty result list
pub const MSG_EMPTY: &str = "No matches found";

/// Tunables for one pipeline run, lifted from [`crate::config::Config`]
#[derive(Debug, Clone, Copy)]
pub struct PipelineSettings {
    pub search_pages: u32,
    pub fetch_concurrency: usize,
}

/// Runs the full recommendation pipeline for one query
///
/// search pages → enrichment (dedup + cache + concurrent detail fetch) →
/// numeric coercion → filter/sort/cap → projection → response envelope.
pub async fn recommend(
    provider: Arc<dyn MovieProvider>,
    cache: Arc<DetailCache>,
    settings: PipelineSettings,
    query: &RecommendQuery,
) -> AppResult<RecommendResponse> {
    let hits = collect_search_hits(provider.as_ref(), &query.text, settings.search_pages).await?;
    tracing::info!(query = %query.text, hits = hits.len(), "Search stage completed");

    let enricher = Enricher::new(provider, cache, settings.fetch_concurrency);
    let details = enricher.enrich(hits).await?;
    tracing::info!(details = details.len(), "Enrichment stage completed");

    let rows = catalog::build_rows(details);
    let picked = filter::apply(rows, query);
    let results = format::project(picked);

    let count = results.len();
    let message = if count == 0 { MSG_EMPTY } else { MSG_RESULTS };
    tracing::info!(count = count, "Recommendation pipeline completed");

    Ok(RecommendResponse {
        results,
        meta: ResponseMeta {
            count,
            message: message.to_string(),
        },
    })
}

/// Collects up to `max_pages` search pages, stopping early at the first
/// empty page or when the provider signals no more data. A page failure
/// aborts the whole search; partial pages would silently skew the catalog.
async fn collect_search_hits(
    provider: &dyn MovieProvider,
    query_text: &str,
    max_pages: u32,
) -> AppResult<Vec<SearchHit>> {
    let mut hits = Vec::new();

    for page in 1..=max_pages.max(1) {
        let (page_hits, has_more) = provider.search(query_text, page).await?;
        if page_hits.is_empty() {
            break;
        }
        hits.extend(page_hits);
        if !has_more {
            break;
        }
    }

    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockMovieProvider;
    use mockall::predicate::eq;

    fn hit(id: &str) -> SearchHit {
        SearchHit {
            imdb_id: id.to_string(),
            title: format!("Movie {}", id),
        }
    }

    #[tokio::test]
    async fn test_collects_multiple_pages() {
        let mut mock = MockMovieProvider::new();
        mock.expect_search()
            .with(eq("batman"), eq(1))
            .times(1)
            .returning(|_, _| Ok((vec![hit("tt0001")], true)));
        mock.expect_search()
            .with(eq("batman"), eq(2))
            .times(1)
            .returning(|_, _| Ok((vec![hit("tt0002")], true)));

        let hits = collect_search_hits(&mock, "batman", 2).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_stops_at_empty_page() {
        let mut mock = MockMovieProvider::new();
        mock.expect_search()
            .with(eq("batman"), eq(1))
            .times(1)
            .returning(|_, _| Ok((Vec::new(), false)));

        let hits = collect_search_hits(&mock, "batman", 2).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_stops_when_no_more_pages_signaled() {
        let mut mock = MockMovieProvider::new();
        mock.expect_search()
            .with(eq("batman"), eq(1))
            .times(1)
            .returning(|_, _| Ok((vec![hit("tt0001")], false)));

        let hits = collect_search_hits(&mock, "batman", 3).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_page_aborts_search() {
        let mut mock = MockMovieProvider::new();
        mock.expect_search()
            .returning(|_, _| Err(AppError::UpstreamUnavailable("timeout".to_string())));

        let err = collect_search_hits(&mock, "batman", 2).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }
}
