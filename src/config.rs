//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Nothing re-reads the environment per request.
//!
//! ```bash
//! export PRIVATE_COOKIE="SPC_EC=...; SPC_U=..."
//! export AF_AC_ENC_DAT="937d8026c2036b48"
//! export API_TIMEOUT="10000"
//! ```
//!
//! ## Optional Variables
//!
//! - `PRIVATE_COOKIE` - Upstream session cookie (default: empty, logged as a warning)
//! - `AF_AC_ENC_DAT` - Signing header value (default: `937d8026c2036b48`)
//! - `API_TIMEOUT` - Upstream timeout in milliseconds (default: 10000)
//! - `UPSTREAM_URL` - Upstream GraphQL endpoint (default: `https://affiliate.shopee.vn/api/v3/gql`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:1995`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Signing header value used when `AF_AC_ENC_DAT` is not set. Not a secret.
pub const DEFAULT_SIGNING_HEADER: &str = "937d8026c2036b48";

pub const DEFAULT_UPSTREAM_URL: &str = "https://affiliate.shopee.vn/api/v3/gql";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Session cookie sent to the upstream service (`PRIVATE_COOKIE`).
    /// May be empty; requests are still attempted and fail upstream.
    pub session_cookie: String,
    /// Value of the `af-ac-enc-dat` header (`AF_AC_ENC_DAT`).
    pub signing_header: String,
    /// Upstream call timeout in milliseconds (`API_TIMEOUT`).
    pub timeout_ms: u64,
    pub upstream_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

/// Credentials and limits for the upstream call, shared read-only by all requests.
#[derive(Clone)]
pub struct ShortenCredential {
    pub session_cookie: String,
    pub signing_header: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ShortenCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortenCredential")
            .field("session_cookie", &mask_secret(&self.session_cookie))
            .field("signing_header", &self.signing_header)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_TIMEOUT` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let session_cookie = env::var("PRIVATE_COOKIE").unwrap_or_default();
        let signing_header = env::var("AF_AC_ENC_DAT")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SIGNING_HEADER.to_string());

        let timeout_ms = match env::var("API_TIMEOUT") {
            Ok(v) => v.trim().parse().map_err(|_| {
                anyhow::anyhow!("API_TIMEOUT must be a number of milliseconds, got '{}'", v)
            })?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:1995".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            session_cookie,
            signing_header,
            timeout_ms,
            upstream_url,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// A missing session cookie is not an error, see [`Self::warn_on_missing_credentials`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `timeout_ms` is 0
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `upstream_url` is not an HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            anyhow::bail!("API_TIMEOUT must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match url::Url::parse(&self.upstream_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => anyhow::bail!(
                "UPSTREAM_URL must be an http:// or https:// URL, got '{}'",
                self.upstream_url
            ),
        }

        Ok(())
    }

    pub fn has_session_cookie(&self) -> bool {
        !self.session_cookie.is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Builds the credential handed to the upstream client.
    pub fn credential(&self) -> ShortenCredential {
        ShortenCredential {
            session_cookie: self.session_cookie.clone(),
            signing_header: self.signing_header.clone(),
            timeout: self.timeout(),
        }
    }

    /// Logs a warning when no session cookie is configured.
    pub fn warn_on_missing_credentials(&self) {
        if !self.has_session_cookie() {
            tracing::warn!("PRIVATE_COOKIE is not set; upstream calls will likely be rejected");
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_url);
        tracing::info!("  Session cookie: {}", mask_secret(&self.session_cookie));
        tracing::info!("  Timeout: {}ms", self.timeout_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        self.warn_on_missing_credentials();
    }
}

/// Describes a secret without revealing it.
fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        "not set".to_string()
    } else {
        format!("set ({} chars)", value.chars().count())
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
