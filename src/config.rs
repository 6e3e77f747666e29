use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key. Optional at startup so the process can boot and report
    /// the missing credential per request, matching the original behavior.
    pub omdb_api_key: Option<String>,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of search pages fetched per query
    #[serde(default = "default_search_pages")]
    pub search_pages: u32,

    /// Maximum concurrent detail fetches per enrichment batch
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,

    /// Detail cache capacity (entries)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Optional detail cache TTL in seconds; entries never expire when unset
    pub cache_ttl_secs: Option<u64>,

    /// Per-call timeout for upstream requests, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_search_pages() -> u32 {
    2
}

fn default_fetch_concurrency() -> usize {
    4
}

fn default_cache_capacity() -> usize {
    256
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb_api_key: None,
            omdb_api_url: default_omdb_api_url(),
            host: default_host(),
            port: default_port(),
            search_pages: default_search_pages(),
            fetch_concurrency: default_fetch_concurrency(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
