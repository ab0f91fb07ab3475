// Recent entries of a sheet

use anyhow::Result;
use colored::*;
use std::time::Instant;

use super::common::build_router;
use crate::config::AppConfig;
use crate::recent::latest_entries;

pub async fn handle_latest(config: &AppConfig, user: &str, start: Instant) -> Result<()> {
    let router = build_router(config)?;
    let (user, sheet) = router.select(user)?;
    let entries = latest_entries(sheet.store().as_ref(), config.recent_limit).await?;

    if entries.is_empty() {
        println!("No headlines yet for {}", user);
    }
    for entry in &entries {
        println!(
            "{:<24} {:<14} {}",
            entry.topic.bold(),
            entry.tone.cyan(),
            entry.headline
        );
    }
    println!("⏱️  {} entries read ({}ms)", entries.len(), start.elapsed().as_millis());
    Ok(())
}
