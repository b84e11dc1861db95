//! REST clients and port implementations

mod coc;
mod error;
mod notion;
mod token;

use std::time::Duration;

use roster_core::RepoResult;

pub use coc::{encode_clan_tag, ClanMemberSource, CocClient, COC_SERVICE};
pub use notion::{NotionClient, NotionRosterStore, DEFAULT_NOTION_VERSION, NOTION_SERVICE};
pub use token::StaticTokenProvider;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client
///
/// `reqwest::Client` uses an `Arc` internally, so one instance is cloned
/// into every API client. Timeouts are applied per request.
pub fn build_http_client() -> RepoResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("roster-sync/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| error::map_transport_error("http", e))
}
