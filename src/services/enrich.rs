use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::{
    error::{AppError, AppResult},
    models::{DetailRecord, SearchHit},
    services::{cache::DetailCache, providers::MovieProvider},
};

/// Turns stub search hits into full detail records
///
/// Deduplicates identifiers (first occurrence wins), consults the shared
/// [`DetailCache`] before any network call, and fetches the remaining
/// identifiers concurrently under a bounded worker count. Output order is
/// always the first-seen input order, regardless of fetch completion order.
pub struct Enricher {
    provider: Arc<dyn MovieProvider>,
    cache: Arc<DetailCache>,
    concurrency: usize,
}

impl Enricher {
    pub fn new(provider: Arc<dyn MovieProvider>, cache: Arc<DetailCache>, concurrency: usize) -> Self {
        Self {
            provider,
            cache,
            concurrency: concurrency.max(1),
        }
    }

    /// Enriches a batch of search hits
    ///
    /// Failure semantics are best-effort: one failed fetch does not abort its
    /// siblings, a not-found detail is dropped silently, and the batch only
    /// fails as a whole when every network fetch failed and the cache
    /// contributed nothing.
    pub async fn enrich(&self, hits: Vec<SearchHit>) -> AppResult<Vec<DetailRecord>> {
        let mut seen = HashSet::new();
        let unique: Vec<String> = hits
            .into_iter()
            .filter_map(|hit| {
                if hit.imdb_id.is_empty() || !seen.insert(hit.imdb_id.clone()) {
                    None
                } else {
                    Some(hit.imdb_id)
                }
            })
            .collect();

        // Results land in slots indexed by first-seen position, so completion
        // order never leaks into the output.
        let mut slots: Vec<Option<DetailRecord>> = vec![None; unique.len()];
        let mut misses = Vec::new();

        for (idx, imdb_id) in unique.iter().enumerate() {
            match self.cache.get(imdb_id).await {
                Some(record) => slots[idx] = Some(record),
                None => misses.push((idx, imdb_id.clone())),
            }
        }

        let cache_hits = unique.len() - misses.len();
        let total_fetches = misses.len();

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = Vec::with_capacity(misses.len());

        for (idx, imdb_id) in misses {
            let provider = Arc::clone(&self.provider);
            let cache = Arc::clone(&self.cache);
            let semaphore = Arc::clone(&semaphore);

            tasks.push(tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| AppError::Internal(format!("semaphore closed: {}", e)))?;

                let detail = provider.fetch_detail(&imdb_id).await?;
                if let Some(record) = &detail {
                    cache.put(&imdb_id, record.clone()).await;
                }
                Ok::<_, AppError>((idx, detail))
            }));
        }

        let mut failed = 0usize;
        for task in tasks {
            match task.await {
                Ok(Ok((idx, Some(record)))) => slots[idx] = Some(record),
                // Not found upstream: dropped from the batch, not an error.
                Ok(Ok((_, None))) => {}
                Ok(Err(e)) => {
                    failed += 1;
                    tracing::warn!(error = %e, "Detail fetch failed");
                }
                Err(e) => {
                    failed += 1;
                    tracing::error!(error = %e, "Detail fetch task join error");
                }
            }
        }

        if failed > 0 && failed == total_fetches && cache_hits == 0 {
            return Err(AppError::UpstreamUnavailable(format!(
                "all {} detail fetches failed",
                failed
            )));
        }

        if failed > 0 {
            tracing::warn!(
                failed = failed,
                total = total_fetches,
                cache_hits = cache_hits,
                "Partial enrichment failure"
            );
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
