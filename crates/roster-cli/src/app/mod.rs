//! Application setup
//!
//! Builds the sync context from configuration and runs the reconciler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use roster_clients::{
    build_http_client, ClanMemberSource, CocClient, NotionClient, NotionRosterStore,
    StaticTokenProvider,
};
use roster_common::{
    try_init_tracing_with_config, AppConfig, AppError, AppResult, Mode, TracingConfig,
};
use roster_service::{Reconciler, SnapshotWriter, SyncContext, SyncOutcome, SyncReport};
use tracing::{error, info, warn};

/// Log directory used when the configuration cannot be loaded
const FALLBACK_LOGS_DIR: &str = "logs";

/// Run the command line: `args` excludes the program name
///
/// Anything other than exactly one argument does nothing and succeeds.
/// Returns the process exit status.
pub async fn run_with_args(args: &[String], config_path: &Path) -> u8 {
    let [mode] = args else {
        return 0;
    };

    let config = AppConfig::load(config_path);
    init_tracing(config.as_ref().ok());

    let result = match config {
        Ok(config) => run_mode(&config, mode).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, code = e.error_code(), "Roster sync failed");
            u8::try_from(e.exit_code()).unwrap_or(1)
        }
    }
}

fn init_tracing(config: Option<&AppConfig>) {
    let fallback = || TracingConfig::default().with_log_dir(PathBuf::from(FALLBACK_LOGS_DIR));
    let tracing = match config.map(AppConfig::tracing_config) {
        Some(Ok(tracing)) => tracing,
        Some(Err(e)) => {
            eprintln!("Warning: {e}");
            fallback()
        }
        None => fallback(),
    };

    if let Err(e) = try_init_tracing_with_config(tracing) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }
}

async fn run_mode(config: &AppConfig, mode: &str) -> AppResult<()> {
    let mode: Mode = mode.parse()?;
    info!(mode = %mode, "Configuration loaded");

    run(config, mode).await?;
    Ok(())
}

/// Initialize the API clients and create the SyncContext
pub fn create_context(config: &AppConfig, mode: Mode) -> AppResult<SyncContext> {
    let database_id = config.database_id(mode)?;
    let http = build_http_client()?;

    let tokens = Arc::new(StaticTokenProvider::new(config.coc_token.clone()));
    let coc = CocClient::new(config.coc_api_base.clone(), http.clone(), tokens)
        .with_timeout(config.coc_timeout());
    let member_source = Arc::new(ClanMemberSource::new(coc, config.clan_tag.clone()));

    let notion = NotionClient::new(
        config.notion_api_base.clone(),
        config.notion_token.clone(),
        http,
    )
    .with_version(config.notion_version.clone())
    .with_timeout(config.notion_timeout());
    let roster_store = Arc::new(NotionRosterStore::new(notion, database_id));

    let snapshots = SnapshotWriter::new(config.saves_dir.clone());

    Ok(SyncContext::new(member_source, roster_store, snapshots))
}

/// Run one sync against the database selected by `mode`
pub async fn run(config: &AppConfig, mode: Mode) -> AppResult<SyncReport> {
    info!(mode = %mode, clan = %config.clan_tag, "Starting roster sync");

    let ctx = create_context(config, mode)?;
    let report = Reconciler::new(&ctx).run().await?;

    match report.outcome {
        SyncOutcome::Applied => {
            for failure in report.failures() {
                warn!(
                    kind = ?failure.kind,
                    tag = %failure.tag,
                    error = failure.error.as_deref().unwrap_or_default(),
                    "Operation failed"
                );
            }
            info!(
                removed = report.removed.len(),
                added = report.added.len(),
                clean = report.is_clean(),
                "Roster sync finished"
            );
        }
        SyncOutcome::Aborted(reason) => {
            warn!(reason = %reason, "Roster sync aborted");
        }
    }

    Ok(report)
}
