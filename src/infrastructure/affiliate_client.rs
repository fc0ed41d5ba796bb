//! Shopee affiliate GraphQL client.
//!
//! Sends one `batchCustomLink` request per call with a single-element link list.
//! The upstream authenticates by session cookie plus a pre-shared signing header
//! and rejects requests that do not look like they come from a browser.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, COOKIE, USER_AGENT};
use serde::Serialize;

use crate::config::ShortenCredential;
use crate::domain::origin_url::OriginUrl;
use crate::domain::shortener_client::{ShortenerClient, TransportError, UpstreamResponse};

pub const SIGNING_HEADER_NAME: &str = "af-ac-enc-dat";

pub const REQUEST_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

pub const SOURCE_CALLER: &str = "CUSTOM_LINK_CALLER";

const BATCH_CUSTOM_LINK_QUERY: &str = r#"
query batchGetCustomLink($linkParams: [CustomLinkParam!], $sourceCaller: SourceCaller){
    batchCustomLink(linkParams: $linkParams, sourceCaller: $sourceCaller){
        shortLink
        longLink
        failCode
    }
}
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: BatchCustomLinkVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchCustomLinkVariables<'a> {
    link_params: [LinkParam<'a>; 1],
    source_caller: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkParam<'a> {
    original_link: &'a str,
    advanced_link_params: AdvancedLinkParams,
}

/// Serialized as `{}`; no advanced options are used.
#[derive(Debug, Default, Serialize)]
struct AdvancedLinkParams {}

impl<'a> GraphQlRequest<'a> {
    fn batch_custom_link(original_link: &'a str) -> Self {
        Self {
            query: BATCH_CUSTOM_LINK_QUERY,
            variables: BatchCustomLinkVariables {
                link_params: [LinkParam {
                    original_link,
                    advanced_link_params: AdvancedLinkParams::default(),
                }],
                source_caller: SOURCE_CALLER,
            },
        }
    }
}

/// [`ShortenerClient`] backed by a pooled [`reqwest::Client`].
///
/// The client-wide timeout bounds connect, send and body read together.
#[derive(Clone)]
pub struct AffiliateClient {
    client: reqwest::Client,
    endpoint: String,
    credential: ShortenCredential,
}

impl AffiliateClient {
    /// Creates a client for `endpoint` using `credential`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(
        endpoint: impl Into<String>,
        credential: ShortenCredential,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(credential.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credential,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        classify_error(err, self.credential.timeout)
    }
}

#[async_trait]
impl ShortenerClient for AffiliateClient {
    async fn request_short_link(
        &self,
        origin: &OriginUrl,
    ) -> Result<UpstreamResponse, TransportError> {
        let payload = GraphQlRequest::batch_custom_link(origin.as_str());
        let body =
            serde_json::to_vec(&payload).map_err(|e| TransportError::Other(e.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(SIGNING_HEADER_NAME, &self.credential.signing_header)
            .header(CONTENT_TYPE, REQUEST_CONTENT_TYPE)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(COOKIE, &self.credential.session_cookie)
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = if status.is_success() {
            response.bytes().await.map_err(|e| self.classify(e))?
        } else {
            // Error bodies are never decoded; release the connection now.
            drop(response);
            Bytes::new()
        };

        tracing::debug!(
            status = status.as_u16(),
            content_type = content_type.as_deref().unwrap_or(""),
            body_len = body.len(),
            "Upstream responded"
        );

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Maps a reqwest failure onto the transport taxonomy.
///
/// The detail carries the whole source chain as `outer: inner: root`.
fn classify_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(timeout);
    }

    let is_connect = err.is_connect();
    let detail = format!("{:#}", anyhow::Error::new(err));

    if is_connect {
        return TransportError::NetworkUnreachable {
            dns: is_dns_failure(&detail),
            detail,
        };
    }

    TransportError::Other(detail)
}

fn is_dns_failure(detail: &str) -> bool {
    let detail = detail.to_ascii_lowercase();
    [
        "dns error",
        "failed to lookup address",
        "name or service not known",
        "no such host",
        "nodename nor servname",
    ]
    .iter()
    .any(|needle| detail.contains(needle))
}
