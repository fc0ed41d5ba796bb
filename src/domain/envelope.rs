//! Upstream GraphQL envelope.
//!
//! Every level is optional because the upstream does not guarantee its shape:
//! a stale session yields `"data": null`, a rejected link yields a `null`
//! `shortLink` with a `failCode`, and GraphQL-level failures add an `errors`
//! array. Callers must check presence at each level.

use serde::Deserialize;
use serde_json::Value;

/// Decoded body of the upstream response.
///
/// ```json
/// {
///   "data": {
///     "batchCustomLink": [
///       { "shortLink": "https://s.shopee.vn/abc", "longLink": "...", "failCode": null }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub data: Option<EnvelopeData>,

    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnvelopeData {
    #[serde(rename = "batchCustomLink", default)]
    pub batch_custom_link: Option<Vec<Option<CustomLinkResult>>>,
}

/// Result for one requested link.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLinkResult {
    #[serde(default)]
    pub short_link: Option<String>,

    #[serde(default)]
    pub long_link: Option<String>,

    /// Business failure code. Observed as a string, kept loose since it is only logged.
    #[serde(default)]
    pub fail_code: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: Option<String>,
}

impl UpstreamEnvelope {
    /// The first link result, if the envelope carries one.
    pub fn first_link(&self) -> Option<&CustomLinkResult> {
        self.data
            .as_ref()?
            .batch_custom_link
            .as_ref()?
            .first()?
            .as_ref()
    }

    /// The first non-empty `shortLink`, i.e. `data.batchCustomLink[0].shortLink`.
    pub fn short_link(&self) -> Option<&str> {
        self.first_link()?
            .short_link
            .as_deref()
            .filter(|link| !link.is_empty())
    }

    /// Non-null `failCode` of the first link result.
    pub fn fail_code(&self) -> Option<&Value> {
        self.first_link()?.fail_code.as_ref().filter(|c| !c.is_null())
    }

    /// GraphQL error messages joined for logging.
    pub fn error_messages(&self) -> Option<String> {
        let messages: Vec<&str> = self
            .errors
            .as_ref()?
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();

        if messages.is_empty() {
            None
        } else {
            Some(messages.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> UpstreamEnvelope {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_short_link_present() {
        let envelope = decode(
            r#"{"data":{"batchCustomLink":[{"shortLink":"https://s.shopee.vn/abc","longLink":"https://shopee.vn/product/1","failCode":null}]}}"#,
        );

        assert_eq!(envelope.short_link(), Some("https://s.shopee.vn/abc"));
        assert!(envelope.fail_code().is_none());
        assert_eq!(
            envelope.first_link().unwrap().long_link.as_deref(),
            Some("https://shopee.vn/product/1")
        );
    }

    #[test]
    fn test_null_short_link_with_fail_code() {
        let envelope =
            decode(r#"{"data":{"batchCustomLink":[{"shortLink":null,"failCode":"LINK_EXPIRED"}]}}"#);

        assert!(envelope.short_link().is_none());
        assert_eq!(envelope.fail_code(), Some(&Value::from("LINK_EXPIRED")));
    }

    #[test]
    fn test_numeric_fail_code_is_accepted() {
        let envelope = decode(r#"{"data":{"batchCustomLink":[{"shortLink":"","failCode":1}]}}"#);

        assert!(envelope.short_link().is_none());
        assert_eq!(envelope.fail_code(), Some(&Value::from(1)));
    }

    #[test]
    fn test_missing_levels() {
        assert!(decode(r#"{}"#).short_link().is_none());
        assert!(decode(r#"{"data":null}"#).short_link().is_none());
        assert!(decode(r#"{"data":{}}"#).short_link().is_none());
        assert!(decode(r#"{"data":{"batchCustomLink":null}}"#).short_link().is_none());
        assert!(decode(r#"{"data":{"batchCustomLink":[]}}"#).short_link().is_none());
        assert!(decode(r#"{"data":{"batchCustomLink":[null]}}"#).short_link().is_none());
        assert!(decode(r#"{"data":{"batchCustomLink":[{}]}}"#).short_link().is_none());
    }

    #[test]
    fn test_only_first_result_counts() {
        let envelope = decode(
            r#"{"data":{"batchCustomLink":[{"shortLink":null},{"shortLink":"https://s.shopee.vn/second"}]}}"#,
        );

        assert!(envelope.short_link().is_none());
    }

    #[test]
    fn test_graphql_errors_joined() {
        let envelope = decode(
            r#"{"data":null,"errors":[{"message":"not logged in"},{"extensions":{}},{"message":"retry later"}]}"#,
        );

        assert_eq!(
            envelope.error_messages().as_deref(),
            Some("not logged in; retry later")
        );
    }

    #[test]
    fn test_no_graphql_errors() {
        assert!(decode(r#"{"errors":[]}"#).error_messages().is_none());
        assert!(decode(r#"{}"#).error_messages().is_none());
    }

    #[test]
    fn test_wrong_shape_fails_to_decode() {
        assert!(serde_json::from_str::<UpstreamEnvelope>(r#"[1,2,3]"#).is_err());
        assert!(serde_json::from_str::<UpstreamEnvelope>(r#"{"data":"oops"}"#).is_err());
        assert!(
            serde_json::from_str::<UpstreamEnvelope>(r#"{"data":{"batchCustomLink":{}}}"#)
                .is_err()
        );
    }
}
