//! # roster-clients
//!
//! Client layer implementing the `roster-core` ports over the Clash of Clans
//! and Notion REST APIs.
//!
//! ## Overview
//!
//! This crate handles:
//!
//! - Shared `reqwest` client construction
//! - Wire models with serde derives, decoded at the adapter boundary
//! - Model ↔ entity mappers
//! - Port implementations (`MemberSource`, `RosterStore`, `TokenProvider`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use roster_clients::{build_http_client, CocClient, ClanMemberSource, StaticTokenProvider};
//! use roster_core::MemberSource;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = build_http_client()?;
//!     let tokens = Arc::new(StaticTokenProvider::new("token"));
//!     let client = CocClient::new("https://api.clashofclans.com/v1", http, tokens)
//!         .with_timeout(Duration::from_secs(30));
//!     let source = ClanMemberSource::new(client, "#2PP");
//!     let fetch = source.fetch_members().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod mappers;
pub mod models;

// Re-export commonly used types
pub use clients::{
    build_http_client, encode_clan_tag, ClanMemberSource, CocClient, NotionClient,
    NotionRosterStore, StaticTokenProvider, COC_SERVICE, DEFAULT_NOTION_VERSION, DEFAULT_TIMEOUT,
    NOTION_SERVICE,
};
pub use models::ClanSearch;
