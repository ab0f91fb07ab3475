// One-shot generation from the command line

use anyhow::Result;
use colored::*;
use std::time::Instant;

use super::common::{build_generator, build_router};
use crate::config::AppConfig;
use crate::prompt::PromptBuilder;

pub async fn handle_generate(
    config: &AppConfig,
    user: &str,
    topic: &str,
    format: &str,
    trigger: &str,
    tone: &str,
    start: Instant,
) -> Result<()> {
    config.validate()?;
    let router = build_router(config)?;
    let (user, sheet) = router.select(user)?;
    let generator = build_generator(config)?;

    let builder = PromptBuilder::new(topic, format, trigger, tone);
    let summary = generator.generate(&builder, sheet).await?;

    if summary.header_written {
        println!("{} header row written to {}", "•".dimmed(), sheet.name());
    }
    for row in &summary.rows {
        println!("{}", row.headline.bold());
        println!(
            "  {} | {} | {}",
            row.engagement_format.cyan(),
            row.emotional_trigger.cyan(),
            row.tone.cyan()
        );
        println!("  {}", row.description.dimmed());
    }
    println!(
        "✓ {} ({} → {}, {}ms)",
        summary.message().green(),
        user,
        sheet.name(),
        start.elapsed().as_millis()
    );
    Ok(())
}
