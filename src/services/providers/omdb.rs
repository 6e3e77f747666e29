/// OMDb API provider
///
/// Thin client over the OMDb HTTP API. Two operations are used:
/// 1. Search: `?s={query}&type=movie&page={n}` → paged stub hits
/// 2. Detail: `?i={imdb_id}&plot=short` → full record for one title
///
/// OMDb signals "no match" with `"Response": "False"` inside a 200 body, so
/// both operations translate that into ordinary empty values rather than
/// errors. Transport failures and unparseable bodies map onto the error
/// taxonomy in [`crate::error::AppError`].
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{DetailRecord, SearchHit},
    services::providers::MovieProvider,
};

/// OMDb serves 10 results per search page
const PAGE_SIZE: u64 = 10;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<SearchHit>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Response", default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(flatten)]
    record: DetailRecord,
}

#[derive(Clone)]
pub struct OmdbClient {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl OmdbClient {
    /// Creates a client from configuration. The API key stays optional here;
    /// each call checks for it so a keyless process still boots and reports
    /// the configuration error per request.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: config.omdb_api_key.clone(),
            api_url: config.omdb_api_url.clone(),
        })
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or(AppError::MissingApiKey)
    }

    /// Parses one search page body
    ///
    /// `"Response": "False"` means no matches: an empty page, not a failure.
    /// `has_more` comes from `totalResults` when it parses, otherwise from
    /// whether the page itself was non-empty.
    fn parse_search_body(body: &str, page: u32) -> AppResult<(Vec<SearchHit>, bool)> {
        let parsed: SearchResponse = serde_json::from_str(body)
            .map_err(|e| AppError::UpstreamMalformed(format!("search body: {}", e)))?;

        if parsed.response != "True" {
            return Ok((Vec::new(), false));
        }

        let has_more = parsed
            .total_results
            .as_deref()
            .and_then(|t| t.parse::<u64>().ok())
            .map(|total| u64::from(page) * PAGE_SIZE < total)
            .unwrap_or(!parsed.search.is_empty());

        Ok((parsed.search, has_more))
    }

    /// Parses a detail body; `"Response": "False"` means the identifier is
    /// unknown upstream and yields `None`.
    fn parse_detail_body(body: &str) -> AppResult<Option<DetailRecord>> {
        let parsed: DetailResponse = serde_json::from_str(body)
            .map_err(|e| AppError::UpstreamMalformed(format!("detail body: {}", e)))?;

        if parsed.response == "True" {
            Ok(Some(parsed.record))
        } else {
            Ok(None)
        }
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbClient {
    async fn search(&self, query: &str, page: u32) -> AppResult<(Vec<SearchHit>, bool)> {
        let api_key = self.api_key()?;
        let page_param = page.to_string();

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apikey", api_key),
                ("type", "movie"),
                ("s", query),
                ("page", page_param.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "OMDb search returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;

        let (hits, has_more) = Self::parse_search_body(&body, page)?;

        tracing::info!(
            query = %query,
            page = page,
            results = hits.len(),
            has_more = has_more,
            "OMDb search page fetched"
        );

        Ok((hits, has_more))
    }

    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<Option<DetailRecord>> {
        if imdb_id.is_empty() {
            return Ok(None);
        }

        let api_key = self.api_key()?;

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("apikey", api_key), ("i", imdb_id), ("plot", "short")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "OMDb detail returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;

        let detail = Self::parse_detail_body(&body)?;

        tracing::debug!(
            imdb_id = %imdb_id,
            found = detail.is_some(),
            "OMDb detail fetched"
        );

        Ok(detail)
    }
}
