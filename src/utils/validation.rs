use crate::utils::error::{CepError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses an upstream base URL, accepting only http(s) URLs that can carry
/// further path segments.
pub fn parse_base_url(field_name: &str, url_str: &str) -> Result<Url> {
    let invalid = |reason: String| CepError::ConfigError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }

    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }

    Ok(url)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    parse_base_url(field_name, url_str).map(|_| ())
}
