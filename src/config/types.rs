use serde::Deserialize;

/// Listing page of the chart to scrape
pub const DEFAULT_INDEX_URL: &str = "https://www.imdb.com/chart/moviemeter/?ref_=nv_mv_mpm";

/// Origin prefixed to the relative links found on the listing page
pub const DEFAULT_SITE_ORIGIN: &str = "https://imdb.com";

/// Desktop browser User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.246";

pub const DEFAULT_OUTPUT_PATH: &str = "movies_async.csv";

/// Main configuration structure for Moviemeter
///
/// Every section is optional; a missing file section falls back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where to find the movies
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Listing page URL
    #[serde(rename = "index-url")]
    pub index_url: String,

    /// Origin used to absolutize detail links
    #[serde(rename = "site-origin")]
    pub site_origin: String,

    /// Upper bound on the number of detail pages to visit
    #[serde(rename = "max-items")]
    pub max_items: Option<usize>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            max_items: None,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the delimited file records are appended to
    pub path: String,

    /// Single-character column delimiter
    pub delimiter: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            delimiter: ',',
        }
    }
}
