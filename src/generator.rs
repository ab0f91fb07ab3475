//! Headline generation loop
//!
//! Each submission produces [`HEADLINES_PER_REQUEST`] rows. For every row the
//! `random` fields are drawn again, a headline is completed, the model is
//! asked for a matching emoji, and a short description is completed
//! alongside. The header row is written first if the sheet is empty.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::completion::CompletionClient;
use crate::error::{AppError, Result};
use crate::prompt::{
    description_prompt, emoji_prompt, headline_prompt, truncate_words, with_emoji,
    PromptBuilder, ResolvedFields, DESCRIPTION_MAX_TOKENS, DESCRIPTION_MAX_WORDS,
    EMOJI_MAX_TOKENS, HEADLINE_MAX_TOKENS,
};
use crate::sheets::{GeneratedRow, RowWriter};

pub const HEADLINES_PER_REQUEST: usize = 3;

/// What one submission produced
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub topic: String,
    pub header_written: bool,
    pub rows: Vec<GeneratedRow>,
}

impl GenerationSummary {
    /// Confirmation shown on the result page
    pub fn message(&self) -> String {
        format!(
            "{} headlines about {} have been generated.",
            self.rows.len(),
            self.topic
        )
    }
}

#[derive(Clone)]
pub struct HeadlineGenerator {
    completion: Arc<dyn CompletionClient>,
}

impl HeadlineGenerator {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Produce one row from already-resolved fields
    pub async fn generate_row(&self, fields: ResolvedFields) -> Result<GeneratedRow> {
        let headline_chain = async {
            let headline = self
                .completion
                .complete(&headline_prompt(&fields), HEADLINE_MAX_TOKENS)
                .await?;
            let emoji = self
                .completion
                .complete(&emoji_prompt(&headline), EMOJI_MAX_TOKENS)
                .await?;
            Ok::<_, AppError>(with_emoji(&emoji, &headline))
        };
        let description = async {
            let text = self
                .completion
                .complete(&description_prompt(&fields.topic), DESCRIPTION_MAX_TOKENS)
                .await?;
            Ok::<_, AppError>(truncate_words(&text, DESCRIPTION_MAX_WORDS))
        };

        let (headline, description) = tokio::try_join!(headline_chain, description)?;

        Ok(GeneratedRow {
            topic: fields.topic,
            engagement_format: fields.engagement_format,
            emotional_trigger: fields.emotional_trigger,
            tone: fields.tone,
            headline,
            description,
        })
    }

    /// Generate and append [`HEADLINES_PER_REQUEST`] rows to `sheet`
    #[instrument(skip(self, builder, sheet), fields(topic = %builder.topic(), sheet = %sheet.name()))]
    pub async fn generate(
        &self,
        builder: &PromptBuilder,
        sheet: &RowWriter,
    ) -> Result<GenerationSummary> {
        let header_written = sheet.ensure_header().await?;

        let mut rows = Vec::with_capacity(HEADLINES_PER_REQUEST);
        for _ in 0..HEADLINES_PER_REQUEST {
            // ThreadRng is not Send; draw before the first await
            let fields = builder.resolve(&mut rand::rng());
            let row = self.generate_row(fields).await?;
            sheet.append(&row).await?;
            rows.push(row);
        }

        info!(rows = rows.len(), header_written, "Headlines generated");

        Ok(GenerationSummary {
            topic: builder.topic().to_string(),
            header_written,
            rows,
        })
    }
}
