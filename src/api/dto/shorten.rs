//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::interpreter::ShortLink;

/// Query string of `GET /api/public-api`.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenQuery {
    pub url: Option<String>,
}

/// Body of `POST /api/public-api`.
///
/// Only `url` is used. Other fields existing callers send (`method`,
/// `headers`, `data`) are accepted and ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenBody {
    pub url: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortLink")]
    pub short_link: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_link: link.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_ignores_extra_fields() {
        let body: ShortenBody = serde_json::from_value(json!({
            "url": "https://shopee.vn/product/1",
            "method": "POST",
            "headers": { "x-ignored": "yes" },
            "data": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(body.url.as_deref(), Some("https://shopee.vn/product/1"));
    }
}
