//! Origin URL extraction and validation.
//!
//! The origin URL is the long destination the caller wants shortened. It arrives
//! either as the `url` query parameter or as the `url` field of a JSON body and
//! must be an absolute HTTP or HTTPS URL before anything is sent upstream.

use std::fmt;

use url::Url;

/// Where the candidate origin URL was read from.
///
/// Only affects the wording of the "missing" error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Query,
    Body,
}

/// Reasons a candidate origin URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is missing ({input:?})")]
    Missing { input: InputSource },

    #[error("Invalid URL format: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("Unsupported protocol: {0}")]
    DisallowedScheme(String),
}

/// A caller's request to shorten one URL, before validation.
#[derive(Debug, Clone)]
pub struct OriginRequest {
    pub url: Option<String>,
    pub source: InputSource,
}

impl OriginRequest {
    pub fn from_query(url: Option<String>) -> Self {
        Self {
            url,
            source: InputSource::Query,
        }
    }

    pub fn from_body(url: Option<String>) -> Self {
        Self {
            url,
            source: InputSource::Body,
        }
    }

    /// Validates the carried URL. See [`validate_origin_url`].
    pub fn validate(&self) -> Result<OriginUrl, UrlValidationError> {
        validate_origin_url(self.url.as_deref(), self.source)
    }
}

/// A validated, scheme-checked origin URL.
///
/// Keeps the caller's original text: that exact string is what the upstream
/// service receives, not the parser's re-serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginUrl {
    raw: String,
}

impl OriginUrl {
    /// The URL exactly as the caller supplied it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for OriginUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Validates a candidate origin URL.
///
/// # Rules
///
/// 1. Absent or empty input is [`UrlValidationError::Missing`]; this is decided
///    before parsing is attempted
/// 2. Input must parse as an absolute URL, otherwise
///    [`UrlValidationError::Malformed`]
/// 3. Scheme must be `http` or `https`, otherwise
///    [`UrlValidationError::DisallowedScheme`]
///
/// # Examples
///
/// ```
/// use affiliate_shortener::domain::origin_url::{InputSource, validate_origin_url};
///
/// let url = validate_origin_url(Some("https://shopee.vn/product/1"), InputSource::Query).unwrap();
/// assert_eq!(url.as_str(), "https://shopee.vn/product/1");
///
/// assert!(validate_origin_url(Some("ftp://example.com"), InputSource::Query).is_err());
/// ```
pub fn validate_origin_url(
    input: Option<&str>,
    source: InputSource,
) -> Result<OriginUrl, UrlValidationError> {
    let raw = match input {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(UrlValidationError::Missing { input: source }),
    };

    match Url::parse(raw)?.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::DisallowedScheme(other.to_string())),
    }

    Ok(OriginUrl {
        raw: raw.to_string(),
    })
}
