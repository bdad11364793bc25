//! Page-level HTTP client
//!
//! Each call performs exactly one GET and buffers the whole body. The
//! connection is released when the response is dropped at the end of the
//! call, whether it succeeded or not.

use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Body reported for error responses whose body could not be read
pub const UNREADABLE_BODY: &str = "<unreadable body>";

/// Raw page as received from the server
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// `Content-Type` header value, if any
    pub content_type: Option<String>,
    /// Undecoded response body
    pub body: Bytes,
}

/// HTTP client bound to the connector's timeouts
pub struct HttpClient {
    client: Client,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl HttpClient {
    /// Create a client using the configured connect and read timeouts
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()?;

        Ok(Self {
            client,
            connect_timeout: config.connect_timeout,
            read_timeout: config.read_timeout,
        })
    }

    /// Fetch one page and buffer its body
    pub async fn get_page(&self, url: &Url) -> Result<PageResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            return Err(Error::http_status(status.as_u16(), body));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        debug!(
            "GET {} -> {} ({} bytes)",
            url,
            status.as_u16(),
            body.len()
        );

        Ok(PageResponse {
            content_type,
            body,
        })
    }

    /// Map timeouts to [`Error::Timeout`], everything else to [`Error::Http`]
    fn classify(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            let timeout = if e.is_connect() {
                self.connect_timeout
            } else {
                self.read_timeout
            };
            return Error::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            };
        }
        Error::Http(e)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish_non_exhaustive()
    }
}
