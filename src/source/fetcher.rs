//! JSON:API data source

use super::types::Fetchable;
use crate::config::ConnectorConfig;
use crate::decode::{decode_envelope, PageEnvelope};
use crate::error::{Error, Result};
use crate::http::{resolve_charset, HttpClient};
use crate::pagination::{LinkPaginator, NextPage, PaginationState};
use crate::template::TokenResolver;
use crate::types::{QueryCounter, Records, StringMap};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, error, info};
use url::Url;

/// A scheme of three or more word characters followed by `:/`, anywhere in
/// the query
static URI_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]{3,}:/").expect("uri regex is valid"));

/// Whether a query is used verbatim rather than appended to the base URL
pub fn is_absolute_uri(query: &str) -> bool {
    URI_METHOD.is_match(query)
}

/// Log a failure and wrap it with the URL that was being accessed
fn severe(url: impl Into<String>, e: Error) -> Error {
    let url = url.into();
    error!("Exception thrown while getting data from {}: {}", url, e);
    Error::data_source(url, e)
}

/// Data source for paginated JSON:API endpoints
#[derive(Debug)]
pub struct JsonApiDataSource {
    config: ConnectorConfig,
    client: HttpClient,
    paginator: LinkPaginator,
    query_count: QueryCounter,
}

impl JsonApiDataSource {
    /// Create a data source from resolved configuration. No I/O happens here.
    pub fn new(config: ConnectorConfig, query_count: QueryCounter) -> Result<Self> {
        let client = HttpClient::new(&config)?;

        Ok(Self {
            config,
            client,
            paginator: LinkPaginator::default(),
            query_count,
        })
    }

    /// Create a data source from raw host properties
    pub fn from_properties(
        props: &StringMap,
        resolver: &dyn TokenResolver,
        query_count: QueryCounter,
    ) -> Result<Self> {
        Self::new(ConnectorConfig::from_properties(props, resolver), query_count)
    }

    /// Configured base URL
    pub fn base_url(&self) -> Option<&str> {
        self.config.base_url.as_deref()
    }

    /// Resolved configuration
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Counter incremented once per fetched page
    pub fn query_counter(&self) -> &QueryCounter {
        &self.query_count
    }

    /// Build the URL string for a query.
    ///
    /// Absolute URIs are used as-is; anything else is appended to the base
    /// URL without adding or removing separators.
    pub fn resolve_target(&self, query: &str) -> String {
        if is_absolute_uri(query) {
            query.to_string()
        } else {
            format!("{}{}", self.base_url().unwrap_or_default(), query)
        }
    }

    /// Resolve a query to a parsed URL
    pub fn resolve(&self, query: &str) -> Result<Url> {
        let target = self.resolve_target(query);
        Url::parse(&target).map_err(|e| Error::invalid_url(target, e))
    }

    /// Fetch one page, append its records, and report where to go next
    async fn fetch_page(
        &self,
        url: &Url,
        records: &mut Records,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        let response = self.client.get_page(url).await?;
        self.query_count.increment();

        let (charset, source) =
            resolve_charset(self.config.encoding.as_deref(), response.content_type.as_deref());
        let page: PageEnvelope = decode_envelope(&response.body, charset)?;
        let next = self.paginator.process_page(&page, state)?;

        debug!(
            "Page {} from {}: {} records (charset {} from {:?})",
            state.pages,
            url,
            page.data.len(),
            charset,
            source
        );

        records.extend(page.into_records());
        Ok(next)
    }
}

#[async_trait]
impl Fetchable for JsonApiDataSource {
    async fn fetch(&self, query: &str) -> Result<Records> {
        let mut current = self
            .resolve(query)
            .map_err(|e| severe(self.resolve_target(query), e))?;
        debug!("Accessing URL: {}", current);

        let mut records = Records::new();
        let mut state = PaginationState::new();

        loop {
            match self.fetch_page(&current, &mut records, &mut state).await {
                Ok(NextPage::Continue { url }) => {
                    current = Url::parse(&url)
                        .map_err(|e| severe(url.as_str(), Error::invalid_url(url.as_str(), e)))?;
                }
                Ok(NextPage::Done) => break,
                Err(e) => return Err(severe(current, e)),
            }
        }

        info!(
            "Fetched {} records in {} pages for query {}",
            state.total_fetched, state.pages, query
        );
        Ok(records)
    }
}
