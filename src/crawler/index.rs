//! Listing page extraction
//!
//! Turns the chart listing into the ordered list of movie detail links.

use crate::config::ScraperConfig;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::{find_first, CHART_COLUMN, CHART_LIST, ITEM_LINK, LIST_ITEM};
use crate::model::MovieLink;
use crate::url::{absolutize, parse_http_url};
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Extracts the detail links from listing markup, in document order
///
/// # Algorithm
///
/// 1. Find the main chart column; a missing column is fatal
/// 2. Find the first list inside it; a missing list is fatal
/// 3. For every list item, take the `href` of its first link and prefix
///    the site origin
///
/// Items without a usable link are skipped with a warning.
///
/// # Example
///
/// ```
/// use moviemeter::crawler::parse_movie_links;
/// use url::Url;
///
/// let html = r#"<div data-testid="chart-layout-main-column">
///     <ul><li><a href="/title/tt1/">One</a></li></ul>
/// </div>"#;
/// let origin = Url::parse("https://imdb.com").unwrap();
/// let links = parse_movie_links(html, &origin).unwrap();
/// assert_eq!(links[0].as_str(), "https://imdb.com/title/tt1/");
/// ```
pub fn parse_movie_links(html: &str, origin: &Url) -> Result<Vec<MovieLink>, ScrapeError> {
    let document = Html::parse_document(html);

    let column = document
        .select(&CHART_COLUMN)
        .next()
        .ok_or_else(|| ScrapeError::MissingContainer {
            selector: r#"div[data-testid="chart-layout-main-column"]"#.to_string(),
        })?;

    let list = find_first(column, &CHART_LIST).ok_or(ScrapeError::MissingList)?;

    let mut links = Vec::new();
    for (position, item) in list.select(&LIST_ITEM).enumerate() {
        let Some(href) = find_first(item, &ITEM_LINK).and_then(|a| a.value().attr("href")) else {
            tracing::warn!("List item {} has no link, skipping", position + 1);
            continue;
        };

        match absolutize(origin, href) {
            Ok(url) => links.push(MovieLink::new(url)),
            Err(e) => tracing::warn!("Skipping list item {} ({}): {}", position + 1, href, e),
        }
    }

    Ok(links)
}

/// Fetches the listing page and returns its detail links
///
/// Fetch failures and structural errors are returned to the caller; they
/// end the run.
pub async fn fetch_movie_links(
    client: &Client,
    config: &ScraperConfig,
) -> Result<Vec<MovieLink>, ScrapeError> {
    let origin = parse_http_url(&config.site_origin)?;

    tracing::info!("Fetching listing page: {}", config.index_url);
    let body = fetch_page(client, &config.index_url).await?;

    let mut links = parse_movie_links(&body, &origin)?;

    if let Some(max_items) = config.max_items {
        if links.len() > max_items {
            tracing::info!("Keeping first {} of {} links", max_items, links.len());
            links.truncate(max_items);
        }
    }

    tracing::info!("Found {} movie links", links.len());
    Ok(links)
}
