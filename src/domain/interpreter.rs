//! Turns an upstream transport response into a short link or a classified failure.

use http::StatusCode;

use crate::domain::envelope::UpstreamEnvelope;
use crate::domain::shortener_client::UpstreamResponse;

/// A non-empty short link produced by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink(String);

impl ShortLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Application-level failures found in an upstream response.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    #[error("Target API returned status {}", .0.as_u16())]
    UpstreamStatus(StatusCode),

    #[error("Unsupported upstream content type: {}", .0.as_deref().unwrap_or("<none>"))]
    UnsupportedContentType(Option<String>),

    #[error("Malformed upstream response: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),

    #[error("Could not generate short link from API")]
    NoShortLinkProduced,
}

/// Returns true for `application/json` and any `+json` media type.
///
/// Parameters such as `charset` are ignored, comparison is case-insensitive.
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Interprets an upstream response.
///
/// # Steps
///
/// 1. Non-2xx status → [`InterpretError::UpstreamStatus`]; the body is not decoded
/// 2. Non-JSON content type → [`InterpretError::UnsupportedContentType`]
/// 3. Body that does not decode as [`UpstreamEnvelope`] → [`InterpretError::MalformedEnvelope`]
/// 4. `data.batchCustomLink[0].shortLink` absent, null or empty →
///    [`InterpretError::NoShortLinkProduced`]
/// 5. Otherwise the short link
pub fn interpret_response(response: UpstreamResponse) -> Result<ShortLink, InterpretError> {
    if !response.status.is_success() {
        return Err(InterpretError::UpstreamStatus(response.status));
    }

    match response.content_type.as_deref() {
        Some(content_type) if is_json_content_type(content_type) => {}
        _ => return Err(InterpretError::UnsupportedContentType(response.content_type)),
    }

    let envelope: UpstreamEnvelope = serde_json::from_slice(&response.body)?;

    match envelope.short_link() {
        Some(link) => Ok(ShortLink(link.to_string())),
        None => {
            tracing::warn!(
                fail_code = ?envelope.fail_code(),
                graphql_errors = ?envelope.error_messages(),
                "Upstream returned no short link"
            );
            Err(InterpretError::NoShortLinkProduced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    fn ok_json(body: &'static str) -> UpstreamResponse {
        UpstreamResponse::new(StatusCode::OK, JSON, body)
    }

    #[test]
    fn test_success() {
        let response = ok_json(
            r#"{"data":{"batchCustomLink":[{"shortLink":"https://s.shopee.vn/abc","longLink":"...","failCode":null}]}}"#,
        );

        let link = interpret_response(response).unwrap();
        assert_eq!(link.as_str(), "https://s.shopee.vn/abc");
        assert_eq!(link.into_inner(), "https://s.shopee.vn/abc");
    }

    #[test]
    fn test_error_status_skips_body() {
        let response = UpstreamResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("text/html"),
            "<html>oops</html>",
        );

        match interpret_response(response) {
            Err(InterpretError::UpstreamStatus(status)) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_status_is_failure() {
        let response = UpstreamResponse::new(StatusCode::NOT_MODIFIED, JSON, "");
        assert!(matches!(
            interpret_response(response),
            Err(InterpretError::UpstreamStatus(StatusCode::NOT_MODIFIED))
        ));
    }

    #[test]
    fn test_non_json_content_type() {
        let response = UpstreamResponse::new(StatusCode::OK, Some("text/html"), "<html></html>");

        match interpret_response(response) {
            Err(InterpretError::UnsupportedContentType(ct)) => {
                assert_eq!(ct.as_deref(), Some("text/html"))
            }
            other => panic!("expected UnsupportedContentType, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_content_type() {
        let response = UpstreamResponse::new(StatusCode::OK, None, "{}");
        assert!(matches!(
            interpret_response(response),
            Err(InterpretError::UnsupportedContentType(None))
        ));
    }

    #[test]
    fn test_malformed_body() {
        let response = ok_json("{not json");
        assert!(matches!(
            interpret_response(response),
            Err(InterpretError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_null_short_link() {
        let response =
            ok_json(r#"{"data":{"batchCustomLink":[{"shortLink":null,"failCode":"LINK_EXPIRED"}]}}"#);
        assert!(matches!(
            interpret_response(response),
            Err(InterpretError::NoShortLinkProduced)
        ));
    }

    #[test]
    fn test_empty_short_link() {
        let response = ok_json(r#"{"data":{"batchCustomLink":[{"shortLink":""}]}}"#);
        assert!(matches!(
            interpret_response(response),
            Err(InterpretError::NoShortLinkProduced)
        ));
    }

    #[test]
    fn test_null_data() {
        let response = ok_json(r#"{"data":null,"errors":[{"message":"unauthorized"}]}"#);
        assert!(matches!(
            interpret_response(response),
            Err(InterpretError::NoShortLinkProduced)
        ));
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("Application/JSON; charset=UTF-8"));
        assert!(is_json_content_type("application/graphql-response+json"));
        assert!(!is_json_content_type("text/json-like"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type(""));
    }
}
