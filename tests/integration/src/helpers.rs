//! Test helpers for integration tests
//!
//! Spawns mock Clash of Clans and Notion servers and builds an `AppConfig`
//! pointing at them, with snapshots going to a temporary directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use roster_common::AppConfig;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Database id configured for the `test` mode
pub const TEST_DATABASE_ID: &str = "db-test";

/// Database id configured for the `prod` mode
pub const PROD_DATABASE_ID: &str = "db-prod";

pub const COC_TOKEN: &str = "coc-secret";
pub const NOTION_TOKEN: &str = "notion-secret";

/// Clan tag as written in the config file
pub const CLAN_TAG: &str = "#2PP";

/// Clan lookup path for `CLAN_TAG`
pub const CLAN_PATH: &str = "/clans/%232PP";

/// Mocked upstream APIs plus a scratch directory
pub struct TestApis {
    pub coc: MockServer,
    pub notion: MockServer,
    workdir: TempDir,
}

impl TestApis {
    /// Start both mock servers
    pub async fn start() -> Result<Self> {
        Ok(Self {
            coc: MockServer::start().await,
            notion: MockServer::start().await,
            workdir: tempfile::tempdir()?,
        })
    }

    /// Directory receiving snapshots
    pub fn saves_dir(&self) -> PathBuf {
        self.workdir.path().join("saves")
    }

    /// Configuration pointing at the mock servers
    pub fn config(&self) -> Result<AppConfig> {
        self.config_with(|_| {})
    }

    /// Configuration with extra edits applied to the JSON document
    pub fn config_with(&self, edit: impl FnOnce(&mut Value)) -> Result<AppConfig> {
        Ok(AppConfig::from_json(&self.config_doc(edit).to_string())?)
    }

    /// Write the configuration to `conf.json` in the scratch directory
    pub fn write_config(&self, edit: impl FnOnce(&mut Value)) -> Result<PathBuf> {
        let path = self.workdir.path().join("conf.json");
        std::fs::write(&path, self.config_doc(edit).to_string())?;
        Ok(path)
    }

    fn config_doc(&self, edit: impl FnOnce(&mut Value)) -> Value {
        let mut doc = json!({
            "coc_token": COC_TOKEN,
            "notion_token": NOTION_TOKEN,
            "clan_tag": CLAN_TAG,
            "notion_db_prod": PROD_DATABASE_ID,
            "notion_db_test": TEST_DATABASE_ID,
            "coc_api_base": self.coc.uri(),
            "notion_api_base": self.notion.uri(),
            "coc_timeout_secs": 5,
            "notion_timeout_secs": 5,
            "saves_dir": self.saves_dir(),
            "logs_dir": self.workdir.path().join("logs"),
        });
        edit(&mut doc);
        doc
    }

    // ------------------------------------------------------------------------
    // Clash of Clans
    // ------------------------------------------------------------------------

    /// Serve a clan response for `CLAN_TAG`
    pub async fn mount_clan(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path(CLAN_PATH))
            .and(header("authorization", format!("Bearer {COC_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.coc)
            .await;
    }

    /// Fail the clan lookup with `status`
    pub async fn mount_clan_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(CLAN_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "reason": "accessDenied",
                "message": "Invalid authorization"
            })))
            .mount(&self.coc)
            .await;
    }

    // ------------------------------------------------------------------------
    // Notion
    // ------------------------------------------------------------------------

    /// Serve a query response for `database_id`
    pub async fn mount_query(&self, database_id: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(format!("/databases/{database_id}/query")))
            .and(header("authorization", format!("Bearer {NOTION_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.notion)
            .await;
    }

    /// Accept page creation, answering with `status`
    pub async fn mount_create(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/pages"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"object": "page"})))
            .mount(&self.notion)
            .await;
    }

    /// Accept deletion of `block_id`, answering with `status`
    pub async fn mount_delete(&self, block_id: &str, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(format!("/blocks/{block_id}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"object": "block"})))
            .mount(&self.notion)
            .await;
    }

    /// Requests received by the Notion mock, minus queries
    pub async fn notion_mutations(&self) -> Vec<Request> {
        self.notion
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| !r.url.path().ends_with("/query"))
            .collect()
    }

    /// JSON bodies of page creation requests, in order
    pub async fn created_pages(&self) -> Vec<Value> {
        self.notion_mutations()
            .await
            .iter()
            .filter(|r| r.method.as_str() == "POST")
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }

    /// Ids passed to block deletion, in order
    pub async fn deleted_blocks(&self) -> Vec<String> {
        self.notion_mutations()
            .await
            .iter()
            .filter(|r| r.method.as_str() == "DELETE")
            .filter_map(|r| r.url.path().strip_prefix("/blocks/").map(str::to_owned))
            .collect()
    }
}

/// Snapshot files in `dir`
pub fn snapshot_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok().map(|e| e.path())).collect())
        .unwrap_or_default()
}
