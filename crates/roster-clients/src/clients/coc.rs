//! Clash of Clans API client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::RequestBuilder;
use roster_core::{Member, MemberFetch, MemberSource, RepoResult, TokenProvider};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::models::{ClanListModel, ClanMemberListModel, ClanModel, ClanSearch};

use super::error::{ensure_success, map_transport_error, read_json};
use super::DEFAULT_TIMEOUT;

/// Service label used in errors and logs
pub const COC_SERVICE: &str = "clash of clans";

/// Encode a clan tag for use in a URL path
///
/// The API expects the leading `#` percent-encoded as `%23`. A tag given
/// without `#` gets one added.
pub fn encode_clan_tag(tag: &str) -> String {
    let bare = tag.strip_prefix('#').unwrap_or(tag);
    format!("%23{}", urlencoding::encode(bare))
}

/// Client for the Clash of Clans REST API
#[derive(Clone)]
pub struct CocClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
    timeout: Duration,
}

impl CocClient {
    /// Create a new CocClient
    pub fn new(
        base_url: impl Into<String>,
        http: reqwest::Client,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            tokens,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn send_get<T: DeserializeOwned>(&self, request: RequestBuilder) -> RepoResult<T> {
        let token = self.tokens.token().await?;

        let resp = request
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(COC_SERVICE, e))?;

        let resp = ensure_success(COC_SERVICE, resp).await?;
        read_json(COC_SERVICE, resp).await
    }

    /// Find a specific clan by tag
    #[instrument(skip(self))]
    pub async fn find_clan(&self, tag: &str) -> RepoResult<ClanModel> {
        let url = format!("{}/clans/{}", self.base_url, encode_clan_tag(tag));
        debug!(url = %url, "fetching clan");
        self.send_get(self.http.get(&url)).await
    }

    /// List the members of a clan through the dedicated members endpoint
    #[instrument(skip(self))]
    pub async fn clan_members(&self, tag: &str) -> RepoResult<Vec<Member>> {
        let url = format!("{}/clans/{}/members", self.base_url, encode_clan_tag(tag));
        debug!(url = %url, "fetching clan members");
        let list: ClanMemberListModel = self.send_get(self.http.get(&url)).await?;
        Ok(list.items.into_iter().map(Member::from).collect())
    }

    /// Search clans with the given criteria
    #[instrument(skip(self))]
    pub async fn search_clans(&self, search: &ClanSearch) -> RepoResult<Vec<ClanModel>> {
        let url = format!("{}/clans", self.base_url);
        let list: ClanListModel = self.send_get(self.http.get(&url).query(search)).await?;
        Ok(list.items)
    }

    /// Fetch the member list of a clan
    ///
    /// A clan response without `memberList` yields `MemberFetch::MissingMemberList`
    /// rather than an empty list.
    #[instrument(skip(self))]
    pub async fn get_members(&self, tag: &str) -> RepoResult<MemberFetch> {
        let clan = self.find_clan(tag).await?;

        match clan.member_list {
            Some(list) => {
                debug!(count = list.len(), "member list received");
                Ok(MemberFetch::Fetched(list.into_iter().map(Member::from).collect()))
            }
            None => {
                warn!(clan_tag = %tag, "Members list is empty");
                Ok(MemberFetch::MissingMemberList)
            }
        }
    }
}

impl std::fmt::Debug for CocClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CocClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// `MemberSource` bound to one clan
#[derive(Debug, Clone)]
pub struct ClanMemberSource {
    client: CocClient,
    clan_tag: String,
}

impl ClanMemberSource {
    pub fn new(client: CocClient, clan_tag: impl Into<String>) -> Self {
        Self {
            client,
            clan_tag: clan_tag.into(),
        }
    }

    pub fn clan_tag(&self) -> &str {
        &self.clan_tag
    }
}

#[async_trait]
impl MemberSource for ClanMemberSource {
    async fn fetch_members(&self) -> RepoResult<MemberFetch> {
        self.client.get_members(&self.clan_tag).await
    }
}
