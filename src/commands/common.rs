// Shared wiring for commands: builds collaborators from configuration

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::completion::{CompletionClient, OpenAiClient};
use crate::config::{AppConfig, SheetsBackend};
use crate::generator::HeadlineGenerator;
use crate::selector::{SheetRouter, SheetUser};
use crate::sheets::{GoogleSheet, MemorySheet, RowWriter, ServiceAccountKey, SheetStore, TokenProvider};
use crate::web::AppState;

/// Completion client for the configured endpoint
pub fn build_generator(config: &AppConfig) -> Result<HeadlineGenerator> {
    let client = OpenAiClient::new(&config.completion).context("Failed to build completion client")?;
    let client: Arc<dyn CompletionClient> = Arc::new(client);
    Ok(HeadlineGenerator::new(client))
}

/// One row writer per user, backed by the configured spreadsheet
pub fn build_router(config: &AppConfig) -> Result<SheetRouter> {
    let stores: Vec<Arc<dyn SheetStore>> = match config.sheets.backend {
        SheetsBackend::Memory => SheetUser::ALL
            .iter()
            .map(|user| {
                let store: Arc<dyn SheetStore> = Arc::new(MemorySheet::new(&format!(
                    "sheet{}",
                    user.worksheet_index() + 1
                )));
                store
            })
            .collect(),
        SheetsBackend::Google => {
            let key = ServiceAccountKey::from_file(&config.sheets.credentials_path)
                .context("Failed to load service-account credentials")?;
            let timeout = Duration::from_secs(config.completion.request_timeout_secs);
            let auth = Arc::new(TokenProvider::new(key, timeout)?);
            let mut stores = Vec::new();
            for user in SheetUser::ALL {
                let sheet = GoogleSheet::new(
                    &config.sheets.spreadsheet_id,
                    user.worksheet_index(),
                    auth.clone(),
                    timeout,
                )?;
                let store: Arc<dyn SheetStore> = Arc::new(sheet);
                stores.push(store);
            }
            stores
        }
    };

    info!(backend = ?config.sheets.backend, "Sheet backend ready");

    let mut writers = stores.into_iter().map(|s| Arc::new(RowWriter::new(s)));
    let (january, matt) = match (writers.next(), writers.next()) {
        (Some(january), Some(matt)) => (january, matt),
        _ => anyhow::bail!("expected one sheet per user"),
    };
    Ok(SheetRouter::new(january, matt))
}

pub fn build_state(config: &AppConfig) -> Result<AppState> {
    config.validate()?;
    Ok(AppState {
        generator: build_generator(config)?,
        router: build_router(config)?,
        recent_limit: config.recent_limit,
    })
}
