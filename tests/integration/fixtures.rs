//! Synthetic pages and configuration shared by the integration tests

use moviemeter::config::{Config, HttpConfig, OutputConfig, ScraperConfig};
use std::path::Path;

pub const TEST_USER_AGENT: &str = "MoviemeterTest/1.0";

/// Configuration pointing at a mock server and a temporary output file
pub fn create_test_config(base_url: &str, output: &Path) -> Config {
    Config {
        scraper: ScraperConfig {
            index_url: format!("{}/chart/moviemeter/", base_url),
            site_origin: base_url.to_string(),
            max_items: None,
        },
        http: HttpConfig {
            user_agent: TEST_USER_AGENT.to_string(),
        },
        output: OutputConfig {
            path: output.display().to_string(),
            delimiter: ',',
        },
    }
}

/// Listing page with one list item per relative href
pub fn listing_page(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .enumerate()
        .map(|(i, href)| {
            format!(
                r#"<li class="ipc-metadata-list-summary-item">
                    <div class="poster"><a href="{href}">Poster {n}</a></div>
                    <h3>{n}. Movie</h3>
                </li>"#,
                href = href,
                n = i + 1
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html><html><head><title>Most Popular Movies</title></head><body>
        <main>
          <div data-testid="chart-layout-main-column">
            <div class="chart-header">Top 100 as rated by users</div>
            <ul class="ipc-metadata-list compact-list-view">{}</ul>
          </div>
        </main>
        </body></html>"#,
        items
    )
}

/// Parts of a detail page; `None` leaves the marker out entirely
pub struct DetailPage<'a> {
    pub title: Option<&'a str>,
    pub release_date: Option<&'a str>,
    pub rating: Option<&'a str>,
    pub plot: Option<&'a str>,
}

impl<'a> DetailPage<'a> {
    pub fn complete(title: &'a str) -> Self {
        Self {
            title: Some(title),
            release_date: Some("1 January 2024"),
            rating: Some("7.5"),
            plot: Some("A test plot."),
        }
    }

    pub fn render(&self) -> String {
        let title = self
            .title
            .map(|t| format!(r#"<h1 data-testid="hero__pageTitle"><span>{}</span></h1>"#, t))
            .unwrap_or_default();
        let release = self
            .release_date
            .map(|d| {
                format!(
                    r#"<ul><li><a href="/title/tt0000001/releaseinfo?ref_=tt_ov_rdat">
                        {}
                    </a></li></ul>"#,
                    d
                )
            })
            .unwrap_or_default();
        let rating = self
            .rating
            .map(|r| {
                format!(
                    r#"<div data-testid="hero-rating-bar__aggregate-rating__score"><span>{}</span></div>"#,
                    r
                )
            })
            .unwrap_or_default();
        let plot = self
            .plot
            .map(|p| format!(r#"<p><span data-testid="plot-xs_to_m">{}</span></p>"#, p))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html><html><head><title>Movie</title></head><body>
            <section class="ipc-page-section ipc-page-section--baseAlt">
              <div class="ipc-page-content-container">breadcrumbs</div>
              <div class="hero">{}{}</div>
            </section>
            <section class="rating-and-plot">{}{}</section>
            </body></html>"#,
            title, release, rating, plot
        )
    }
}
