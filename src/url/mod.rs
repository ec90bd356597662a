//! URL handling for Moviemeter
//!
//! Validates configured URLs and turns the relative references found on the
//! listing page into absolute detail-page URLs.

use crate::UrlError;
use url::Url;

/// Parses a URL string and checks that it uses HTTP or HTTPS
///
/// # Examples
///
/// ```
/// use moviemeter::url::parse_http_url;
///
/// let url = parse_http_url("https://imdb.com").unwrap();
/// assert_eq!(url.as_str(), "https://imdb.com/");
/// assert!(parse_http_url("ftp://imdb.com").is_err());
/// ```
pub fn parse_http_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::Parse(format!("URL has no host: {}", url_str)));
    }

    Ok(url)
}

/// Prefixes the site origin to a relative reference from the listing page
///
/// Absolute references are kept as they are. Query strings on the reference
/// are preserved, so `/title/tt1/?ref_=chtmvm_t_1` stays intact.
///
/// # Examples
///
/// ```
/// use moviemeter::url::{absolutize, parse_http_url};
///
/// let origin = parse_http_url("https://imdb.com").unwrap();
/// let url = absolutize(&origin, "/title/tt0111161/?ref_=chtmvm_t_1").unwrap();
/// assert_eq!(url.as_str(), "https://imdb.com/title/tt0111161/?ref_=chtmvm_t_1");
/// ```
pub fn absolutize(origin: &Url, href: &str) -> Result<Url, UrlError> {
    let href = href.trim();
    if href.is_empty() {
        return Err(UrlError::EmptyHref);
    }

    let url = origin
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    Ok(url)
}
