use crate::config::types::{Config, HttpConfig, OutputConfig, ScraperConfig};
use crate::url::parse_http_url;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the listing URL, site origin and item cap
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    parse_http_url(&config.index_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid index-url: {}", e)))?;

    let origin = parse_http_url(&config.site_origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site-origin: {}", e)))?;

    if origin.path() != "/" || origin.query().is_some() {
        return Err(ConfigError::InvalidUrl(format!(
            "site-origin must not carry a path or query, got '{}'",
            config.site_origin
        )));
    }

    if config.max_items == Some(0) {
        return Err(ConfigError::Validation(
            "max-items must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates the User-Agent header value
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII or spaces/tabs
    if !config
        .user_agent
        .chars()
        .all(|c| c == ' ' || c == '\t' || c.is_ascii_graphic())
    {
        return Err(ConfigError::Validation(format!(
            "user-agent contains characters not allowed in an HTTP header: '{}'",
            config.user_agent
        )));
    }

    Ok(())
}

/// Validates output path and delimiter
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    validate_delimiter(config.delimiter)
}

/// The delimiter is written as a single byte and must not clash with quoting
fn validate_delimiter(delimiter: char) -> Result<(), ConfigError> {
    if !delimiter.is_ascii() {
        return Err(ConfigError::Validation(format!(
            "delimiter must be a single ASCII character, got '{}'",
            delimiter
        )));
    }

    if matches!(delimiter, '"' | '\n' | '\r') {
        return Err(ConfigError::Validation(format!(
            "delimiter cannot be {:?}",
            delimiter
        )));
    }

    Ok(())
}
