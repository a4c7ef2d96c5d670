pub mod config;
pub mod list;
pub mod shell;

use anyhow::{Context, Result};
use apptbook_core::{AppConfig, AppointmentStore, DataSource};

use crate::utils::tui;

/// Build a store from config and run its one-shot load.
///
/// `source` overrides the configured data source.
pub async fn open_store(config: &AppConfig, source: Option<&str>) -> Result<AppointmentStore> {
    let source = match source {
        Some(s) => DataSource::parse(s)?,
        None => config.data_source()?,
    };

    let mut store = AppointmentStore::new(config.view_state());
    let result = tui::with_spinner(format!("Loading {source}"), store.load(&source)).await;
    result.with_context(|| format!("Could not load appointments from {source}"))?;

    Ok(store)
}
