//! Clash of Clans API models

use serde::{Deserialize, Serialize};

/// Response of `GET /clans/{tag}`
///
/// Only the fields the sync needs are modeled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanModel {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Option<u32>,
    /// Absent when the API cannot list the clan's members
    #[serde(default)]
    pub member_list: Option<Vec<ClanMemberModel>>,
}

/// One entry of a clan member list
#[derive(Debug, Clone, Deserialize)]
pub struct ClanMemberModel {
    pub tag: String,
    pub name: String,
}

/// Response of `GET /clans/{tag}/members`
#[derive(Debug, Clone, Deserialize)]
pub struct ClanMemberListModel {
    pub items: Vec<ClanMemberModel>,
}

/// Response of `GET /clans`
#[derive(Debug, Clone, Deserialize)]
pub struct ClanListModel {
    pub items: Vec<ClanModel>,
}

/// Query parameters for `GET /clans`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_members: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_clan_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ClanSearch {
    /// Search clans by name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_min_members(mut self, min_members: u32) -> Self {
        self.min_members = Some(min_members);
        self
    }
}
