//! Notion API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use roster_core::{Member, RepoResult, RosterStore, RowSet};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::mappers::rows_from_query;
use crate::models::CreatePageRequest;

use super::error::{ensure_success, map_transport_error, read_json};
use super::DEFAULT_TIMEOUT;

/// Service label used in errors and logs
pub const NOTION_SERVICE: &str = "notion";

/// API version sent in the `Notion-Version` header
pub const DEFAULT_NOTION_VERSION: &str = "2021-08-16";

/// Client for the Notion REST API
#[derive(Clone)]
pub struct NotionClient {
    base_url: String,
    token: String,
    version: String,
    http: reqwest::Client,
    timeout: Duration,
}

impl NotionClient {
    /// Create a new NotionClient
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            version: DEFAULT_NOTION_VERSION.to_string(),
            http,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .timeout(self.timeout)
    }

    async fn send(&self, request: RequestBuilder) -> RepoResult<reqwest::Response> {
        let resp = request
            .send()
            .await
            .map_err(|e| map_transport_error(NOTION_SERVICE, e))?;
        ensure_success(NOTION_SERVICE, resp).await
    }

    /// Query every row of a database
    ///
    /// Only the first page of results is read; `has_more` is ignored.
    #[instrument(skip(self))]
    pub async fn query_database(&self, database_id: &str) -> RepoResult<RowSet> {
        let url = format!("{}/databases/{}/query", self.base_url, database_id);
        debug!(url = %url, "querying database");

        let resp = self.send(self.request(Method::POST, &url).json(&json!({}))).await?;
        let raw: Value = read_json(NOTION_SERVICE, resp).await?;

        let rows = rows_from_query(raw)?;
        debug!(count = rows.len(), "rows received");
        Ok(rows)
    }

    /// Create a page for a member in the given database
    #[instrument(skip(self, member), fields(tag = %member.tag))]
    pub async fn create_page(&self, database_id: &str, member: &Member) -> RepoResult<()> {
        let url = format!("{}/pages", self.base_url);
        let body = CreatePageRequest::for_member(database_id, member);

        self.send(self.request(Method::POST, &url).json(&body)).await?;
        Ok(())
    }

    /// Delete (archive) a block or page by id
    #[instrument(skip(self))]
    pub async fn delete_block(&self, block_id: &str) -> RepoResult<()> {
        let url = format!("{}/blocks/{}", self.base_url, block_id);

        self.send(self.request(Method::DELETE, &url)).await?;
        Ok(())
    }
}

impl std::fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// `RosterStore` bound to one Notion database
#[derive(Debug, Clone)]
pub struct NotionRosterStore {
    client: NotionClient,
    database_id: String,
}

impl NotionRosterStore {
    pub fn new(client: NotionClient, database_id: impl Into<String>) -> Self {
        Self {
            client,
            database_id: database_id.into(),
        }
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }
}

#[async_trait]
impl RosterStore for NotionRosterStore {
    async fn query_rows(&self) -> RepoResult<RowSet> {
        self.client.query_database(&self.database_id).await
    }

    async fn create_row(&self, member: &Member) -> RepoResult<()> {
        self.client.create_page(&self.database_id, member).await
    }

    async fn delete_row(&self, row_id: &str) -> RepoResult<()> {
        self.client.delete_block(row_id).await
    }
}
