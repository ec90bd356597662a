//! Movie detail page extraction
//!
//! Each detail page is fetched, parsed, and either turned into one complete
//! record or skipped. Failures stay inside `extract_movie_details`; they are
//! logged with the page URL and never reach sibling extractions.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::{
    find_first, nth_child_element, text_content, trimmed_text, AGGREGATE_RATING, HEADING,
    INLINE_SPAN, PAGE_SECTION, RELEASE_INFO_LINK, SHORT_PLOT,
};
use crate::model::{MovieLink, MovieRecord};
use crate::output::RecordStore;
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;

/// Fields found on a detail page, each independently optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<String>,
    pub plot_summary: Option<String>,
}

impl DetailFields {
    /// Names of the fields that are absent or empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("release_date", &self.release_date),
            ("rating", &self.rating),
            ("plot_summary", &self.plot_summary),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    /// Builds a record only when all four fields are present and non-empty
    pub fn into_record(self) -> Option<MovieRecord> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        Some(MovieRecord {
            title: non_empty(self.title)?,
            release_date: non_empty(self.release_date)?,
            rating: non_empty(self.rating)?,
            plot_summary: non_empty(self.plot_summary)?,
        })
    }
}

/// What happened to one detail page
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// A record was appended to the store
    Written(MovieRecord),

    /// At least one field was missing; nothing was written
    Skipped { missing: Vec<&'static str> },

    /// Fetching, parsing, or writing failed
    Failed { error: String },
}

/// Extracts the four movie fields from detail page markup
///
/// # Field Rules
///
/// | Field | Lookup | Text |
/// |-------|--------|------|
/// | title | second direct `div` of the page section → first `h1` → first `span` | verbatim |
/// | release date | same block → first link whose href contains `releaseinfo` | trimmed |
/// | rating | whole page → aggregate rating score marker | verbatim |
/// | plot | whole page → short plot marker | trimmed |
///
/// When the page section has fewer than two `div` children, title and
/// release date stay unset.
pub fn parse_movie_details(html: &str) -> DetailFields {
    let document = Html::parse_document(html);
    let mut fields = DetailFields::default();

    let hero_block = document
        .select(&PAGE_SECTION)
        .next()
        .and_then(|section| nth_child_element(section, "div", 1));

    if let Some(block) = hero_block {
        fields.title = find_first(block, &HEADING)
            .and_then(|heading| find_first(heading, &INLINE_SPAN))
            .map(text_content);

        fields.release_date = find_first(block, &RELEASE_INFO_LINK).map(trimmed_text);
    }

    fields.rating = document.select(&AGGREGATE_RATING).next().map(text_content);
    fields.plot_summary = document.select(&SHORT_PLOT).next().map(trimmed_text);

    fields
}

/// Fetches one detail page and persists its record if complete
///
/// Never returns an error: failures are logged at `error` level with the
/// page URL and reported as `DetailOutcome::Failed`. Incomplete pages are
/// skipped quietly (visible at `debug` level).
pub async fn extract_movie_details<S>(client: &Client, store: &S, link: &MovieLink) -> DetailOutcome
where
    S: RecordStore + ?Sized,
{
    match try_extract(client, store, link).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Failed to process {}: {}", link, e);
            DetailOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

async fn try_extract<S>(
    client: &Client,
    store: &S,
    link: &MovieLink,
) -> Result<DetailOutcome, ScrapeError>
where
    S: RecordStore + ?Sized,
{
    let body = fetch_page(client, link.as_str()).await?;
    let fields = parse_movie_details(&body);

    let missing = fields.missing_fields();
    let Some(record) = fields.into_record() else {
        tracing::debug!("Skipping {}: missing {}", link, missing.join(", "));
        return Ok(DetailOutcome::Skipped { missing });
    };

    store.append(&record)?;
    println!("{}", record);

    Ok(DetailOutcome::Written(record))
}
