use crate::fixtures::{create_test_config, listing_page, DetailPage, TEST_USER_AGENT};
use moviemeter::config::HttpConfig;
use moviemeter::crawler::{
    build_http_client, extract_movie_details, fetch_movie_links, run_scrape, DetailOutcome,
    Pipeline,
};
use moviemeter::output::{CsvStore, RecordStore};
use moviemeter::{MovieLink, ScrapeError};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

async fn mount_listing(server: &MockServer, hrefs: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/chart/moviemeter/"))
        .respond_with(html(listing_page(hrefs)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, page_path: &str, page: DetailPage<'_>) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(page.render()))
        .expect(1)
        .mount(server)
        .await;
}

fn read_rows(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_full_scrape_writes_only_complete_records() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("movies.csv");

    mount_listing(
        &mock_server,
        &["/title/tt0000001/", "/title/tt0000002/", "/title/tt0000003/"],
    )
    .await;
    mount_detail(
        &mock_server,
        "/title/tt0000001/",
        DetailPage::complete("Example Movie"),
    )
    .await;
    mount_detail(
        &mock_server,
        "/title/tt0000002/",
        DetailPage {
            rating: None,
            ..DetailPage::complete("No Rating")
        },
    )
    .await;
    mount_detail(
        &mock_server,
        "/title/tt0000003/",
        DetailPage {
            plot: None,
            ..DetailPage::complete("No Plot")
        },
    )
    .await;

    let config = create_test_config(&mock_server.uri(), &output);
    let summary = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(summary.links_found, 3);
    assert_eq!(summary.attempted, summary.links_found);
    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);

    assert_eq!(
        read_rows(&output),
        vec!["Example Movie,1 January 2024,7.5,A test plot.".to_string()]
    );
}

#[tokio::test]
async fn test_every_persisted_row_has_four_non_empty_fields() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("movies.csv");

    mount_listing(&mock_server, &["/title/tt1/", "/title/tt2/", "/title/tt3/"]).await;
    mount_detail(&mock_server, "/title/tt1/", DetailPage::complete("One")).await;
    mount_detail(&mock_server, "/title/tt2/", DetailPage::complete("Two")).await;
    mount_detail(
        &mock_server,
        "/title/tt3/",
        DetailPage {
            title: None,
            ..DetailPage::complete("Three")
        },
    )
    .await;

    let config = create_test_config(&mock_server.uri(), &output);
    let summary = run_scrape(config).await.unwrap();
    assert_eq!(summary.written, 2);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&output)
        .unwrap();
    let mut titles = Vec::new();
    for row in reader.records() {
        let row = row.unwrap();
        assert_eq!(row.len(), 4);
        assert!(row.iter().all(|field| !field.is_empty()));
        titles.push(row[0].to_string());
    }

    // Completion order is not listing order
    titles.sort();
    assert_eq!(titles, vec!["One", "Two"]);
}

#[tokio::test]
async fn test_detail_failure_does_not_affect_siblings() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("movies.csv");

    mount_listing(&mock_server, &["/title/tt1/", "/title/broken/", "/title/tt3/"]).await;
    mount_detail(&mock_server, "/title/tt1/", DetailPage::complete("First")).await;
    Mock::given(method("GET"))
        .and(path("/title/broken/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // No retry
        .mount(&mock_server)
        .await;
    mount_detail(&mock_server, "/title/tt3/", DetailPage::complete("Third")).await;

    let config = create_test_config(&mock_server.uri(), &output);
    let summary = run_scrape(config).await.expect("Per-page errors must not end the run");

    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(read_rows(&output).len(), 2);
}

#[tokio::test]
async fn test_missing_chart_container_is_fatal() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("movies.csv");

    Mock::given(method("GET"))
        .and(path("/chart/moviemeter/"))
        .respond_with(html(
            "<html><body><p>Chart temporarily unavailable</p></body></html>".to_string(),
        ))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &output);
    let result = run_scrape(config).await;

    assert!(matches!(result, Err(ScrapeError::MissingContainer { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_listing_http_error_is_fatal() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/chart/moviemeter/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &dir.path().join("movies.csv"));
    let result = run_scrape(config).await;

    assert!(matches!(result, Err(ScrapeError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_rerun_appends_duplicate_rows() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("movies.csv");

    Mock::given(method("GET"))
        .and(path("/chart/moviemeter/"))
        .respond_with(html(listing_page(&["/title/tt1/"])))
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/title/tt1/"))
        .respond_with(html(DetailPage::complete("Example Movie").render()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &output);
    let pipeline = Pipeline::new(config).unwrap();
    let store = CsvStore::new(&output);

    pipeline.run(&store).await.unwrap();
    pipeline.run(&store).await.unwrap();

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], rows[1]);
}

#[tokio::test]
async fn test_max_items_limits_fan_out() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("movies.csv");

    mount_listing(&mock_server, &["/title/tt1/", "/title/tt2/", "/title/tt3/"]).await;
    mount_detail(&mock_server, "/title/tt1/", DetailPage::complete("One")).await;
    mount_detail(&mock_server, "/title/tt2/", DetailPage::complete("Two")).await;
    Mock::given(method("GET"))
        .and(path("/title/tt3/"))
        .respond_with(html(DetailPage::complete("Three").render()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri(), &output);
    config.scraper.max_items = Some(2);
    let summary = run_scrape(config).await.unwrap();

    assert_eq!(summary.links_found, 2);
    assert_eq!(summary.written, 2);
}

#[tokio::test]
async fn test_user_agent_sent_on_every_request() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("movies.csv");

    Mock::given(method("GET"))
        .and(path("/chart/moviemeter/"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(html(listing_page(&["/title/tt1/"])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/title/tt1/"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(html(DetailPage::complete("Agent").render()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), &output);
    let summary = run_scrape(config).await.unwrap();
    assert_eq!(summary.written, 1);
}

#[tokio::test]
async fn test_fetch_movie_links_returns_absolute_urls_in_order() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base_url = mock_server.uri();

    mount_listing(&mock_server, &["/title/tt3/", "/title/tt1/", "/title/tt2/"]).await;

    let config = create_test_config(&base_url, &dir.path().join("unused.csv"));
    let client = build_http_client(&config.http).unwrap();
    let links = fetch_movie_links(&client, &config.scraper).await.unwrap();

    let urls: Vec<&str> = links.iter().map(MovieLink::as_str).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/title/tt3/", base_url),
            format!("{}/title/tt1/", base_url),
            format!("{}/title/tt2/", base_url),
        ]
    );
}

#[tokio::test]
async fn test_extract_single_page_writes_one_row() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("movies.csv"));

    mount_detail(
        &mock_server,
        "/title/tt0000001/",
        DetailPage::complete("Example Movie"),
    )
    .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let link = MovieLink::new(
        url::Url::parse(&format!("{}/title/tt0000001/", mock_server.uri())).unwrap(),
    );

    let outcome = extract_movie_details(&client, &store, &link).await;

    match outcome {
        DetailOutcome::Written(record) => {
            assert_eq!(
                record.as_row(),
                ["Example Movie", "1 January 2024", "7.5", "A test plot."]
            );
        }
        other => panic!("Expected a written record, got {:?}", other),
    }
    assert_eq!(
        read_rows(store.path()),
        vec!["Example Movie,1 January 2024,7.5,A test plot.".to_string()]
    );
}

#[tokio::test]
async fn test_extract_page_without_plot_writes_nothing() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("movies.csv"));

    mount_detail(
        &mock_server,
        "/title/tt0000001/",
        DetailPage {
            plot: None,
            ..DetailPage::complete("Example Movie")
        },
    )
    .await;

    let client = build_http_client(&HttpConfig::default()).unwrap();
    let link = MovieLink::new(
        url::Url::parse(&format!("{}/title/tt0000001/", mock_server.uri())).unwrap(),
    );

    let outcome = extract_movie_details(&client, &store, &link).await;

    assert_eq!(
        outcome,
        DetailOutcome::Skipped {
            missing: vec!["plot_summary"]
        }
    );
    assert!(!store.path().exists());
    assert_eq!(store.describe(), store.path().display().to_string());
}
