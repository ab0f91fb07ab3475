//! Spreadsheet persistence
//!
//! A sheet is an append-only table. [`SheetStore`] is the backend seam
//! (Google Sheets in production, [`MemorySheet`] for tests and local runs);
//! [`RowWriter`] adds the header-row bookkeeping on top of a store.

mod auth;
mod google;
mod memory;

pub use auth::{ServiceAccountKey, TokenProvider};
pub use google::{column_letter, GoogleSheet};
pub use memory::MemorySheet;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::logging::log_sheet_operation;

/// Column titles written once to an empty sheet
pub const HEADER_ROW: [&str; 6] = [
    "Topic",
    "Engagement Format",
    "Emotional Trigger",
    "Tone",
    "Headline",
    "Description",
];

/// 1-based column positions matching [`HEADER_ROW`]
pub const TOPIC_COLUMN: usize = 1;
pub const TONE_COLUMN: usize = 4;
pub const HEADLINE_COLUMN: usize = 5;

#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// True when no row holds any value, header included
    async fn is_empty(&self) -> Result<bool>;

    async fn append_row(&self, row: &[String]) -> Result<()>;

    /// Every cell of a 1-based column, header first
    async fn col_values(&self, column: usize) -> Result<Vec<String>>;
}

/// One generated ad, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRow {
    pub topic: String,
    pub engagement_format: String,
    pub emotional_trigger: String,
    pub tone: String,
    pub headline: String,
    pub description: String,
}

impl GeneratedRow {
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.topic.clone(),
            self.engagement_format.clone(),
            self.emotional_trigger.clone(),
            self.tone.clone(),
            self.headline.clone(),
            self.description.clone(),
        ]
    }
}

/// Appends generated rows to one sheet
pub struct RowWriter {
    store: Arc<dyn SheetStore>,
    // Serializes the empty-check and header append within this process
    header_lock: Mutex<()>,
}

impl RowWriter {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            store,
            header_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn SheetStore> {
        &self.store
    }

    pub fn name(&self) -> &str {
        self.store.name()
    }

    /// Append [`HEADER_ROW`] if the sheet is empty. Returns whether it was written.
    pub async fn ensure_header(&self) -> Result<bool> {
        let _guard = self.header_lock.lock().await;
        if !self.store.is_empty().await? {
            return Ok(false);
        }
        let header: Vec<String> = HEADER_ROW.iter().map(|s| s.to_string()).collect();
        self.timed("append_header", self.store.append_row(&header))
            .await?;
        Ok(true)
    }

    pub async fn append(&self, row: &GeneratedRow) -> Result<()> {
        self.timed("append_row", self.store.append_row(&row.to_cells()))
            .await
    }

    async fn timed<T>(
        &self,
        operation: &str,
        fut: impl std::future::Future<Output = Result<T>>,
    ) -> Result<T> {
        let start = Instant::now();
        let result = fut.await;
        log_sheet_operation(
            operation,
            self.store.name(),
            result.is_ok(),
            Some(start.elapsed().as_millis() as u64),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(topic: &str) -> GeneratedRow {
        GeneratedRow {
            topic: topic.to_string(),
            engagement_format: "Question".to_string(),
            emotional_trigger: "Hope".to_string(),
            tone: "Calm".to_string(),
            headline: "💡 Ever Wondered?".to_string(),
            description: "A short description.".to_string(),
        }
    }

    #[test]
    fn test_cells_follow_header_order() {
        let cells = row("sleep").to_cells();
        assert_eq!(cells.len(), HEADER_ROW.len());
        assert_eq!(cells[TOPIC_COLUMN - 1], "sleep");
        assert_eq!(cells[TONE_COLUMN - 1], "Calm");
        assert_eq!(cells[HEADLINE_COLUMN - 1], "💡 Ever Wondered?");
    }

    #[tokio::test]
    async fn test_header_written_once() {
        let sheet = Arc::new(MemorySheet::new("sheet1"));
        let writer = RowWriter::new(sheet.clone());

        assert!(writer.ensure_header().await.unwrap());
        assert!(!writer.ensure_header().await.unwrap());
        writer.append(&row("sleep")).await.unwrap();

        let rows = sheet.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], HEADER_ROW.map(String::from).to_vec());
        assert_eq!(rows[1][0], "sleep");
    }

    #[tokio::test]
    async fn test_header_skipped_for_non_empty_sheet() {
        let sheet = Arc::new(MemorySheet::with_rows(
            "legacy",
            vec![vec!["Topic".to_string(), "Headline".to_string()]],
        ));
        let writer = RowWriter::new(sheet.clone());
        assert!(!writer.ensure_header().await.unwrap());
        assert_eq!(sheet.rows().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_header_checks_write_one_header() {
        let sheet = Arc::new(MemorySheet::new("shared"));
        let writer = Arc::new(RowWriter::new(sheet.clone()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let writer = writer.clone();
            handles.push(tokio::spawn(async move { writer.ensure_header().await }));
        }
        let mut written = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap() {
                written += 1;
            }
        }

        assert_eq!(written, 1);
        assert_eq!(sheet.rows().len(), 1);
    }
}
