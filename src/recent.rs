//! Reads the trailing rows of a sheet for display

use serde::Serialize;

use crate::error::Result;
use crate::sheets::{SheetStore, HEADLINE_COLUMN, TONE_COLUMN, TOPIC_COLUMN};

/// One line of the latest-topics view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentEntry {
    pub topic: String,
    pub tone: String,
    pub headline: String,
}

/// Last `limit` non-blank values of a 1-based column, oldest first.
/// The header cell is skipped.
pub async fn recent_values(
    sheet: &dyn SheetStore,
    column: usize,
    limit: usize,
) -> Result<Vec<String>> {
    let values: Vec<String> = sheet
        .col_values(column)
        .await?
        .into_iter()
        .skip(1)
        .filter(|v| !v.trim().is_empty())
        .collect();
    let start = values.len().saturating_sub(limit);
    Ok(values[start..].to_vec())
}

/// Most recent entries, newest first.
///
/// Columns are read independently and zipped by position, so a column with
/// blank cells in the window shifts against the others.
pub async fn latest_entries(sheet: &dyn SheetStore, limit: usize) -> Result<Vec<RecentEntry>> {
    let topics = recent_values(sheet, TOPIC_COLUMN, limit).await?;
    let tones = recent_values(sheet, TONE_COLUMN, limit).await?;
    let headlines = recent_values(sheet, HEADLINE_COLUMN, limit).await?;

    Ok(topics
        .into_iter()
        .rev()
        .zip(tones.into_iter().rev())
        .zip(headlines.into_iter().rev())
        .map(|((topic, tone), headline)| RecentEntry {
            topic,
            tone,
            headline,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::{MemorySheet, HEADER_ROW};

    fn sheet_with(n: usize) -> MemorySheet {
        let mut rows = vec![HEADER_ROW.map(String::from).to_vec()];
        for i in 1..=n {
            rows.push(vec![
                format!("topic {}", i),
                "Question".to_string(),
                "Hope".to_string(),
                format!("tone {}", i),
                format!("headline {}", i),
                "desc".to_string(),
            ]);
        }
        MemorySheet::with_rows("sheet1", rows)
    }

    #[tokio::test]
    async fn test_recent_values_window_in_sheet_order() {
        let sheet = sheet_with(15);
        let values = recent_values(&sheet, TOPIC_COLUMN, 10).await.unwrap();
        assert_eq!(values.len(), 10);
        assert_eq!(values.first().unwrap(), "topic 6");
        assert_eq!(values.last().unwrap(), "topic 15");
    }

    #[tokio::test]
    async fn test_recent_values_skip_header_and_blanks() {
        let sheet = MemorySheet::with_rows(
            "sheet1",
            vec![
                vec!["Topic".to_string()],
                vec!["a".to_string()],
                vec!["   ".to_string()],
                vec!["".to_string()],
                vec!["b".to_string()],
            ],
        );
        let values = recent_values(&sheet, 1, 10).await.unwrap();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_empty_sheet() {
        let sheet = MemorySheet::new("empty");
        assert!(recent_values(&sheet, 1, 10).await.unwrap().is_empty());
        assert!(latest_entries(&sheet, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_latest_entries_newest_first() {
        let sheet = sheet_with(12);
        let entries = latest_entries(&sheet, 10).await.unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(
            entries[0],
            RecentEntry {
                topic: "topic 12".to_string(),
                tone: "tone 12".to_string(),
                headline: "headline 12".to_string(),
            }
        );
        assert_eq!(entries[9].topic, "topic 3");
        assert!(entries.iter().all(|e| !e.topic.trim().is_empty()));
    }

    #[tokio::test]
    async fn test_latest_entries_with_short_sheet() {
        let sheet = sheet_with(3);
        let entries = latest_entries(&sheet, 12).await.unwrap();
        let topics: Vec<_> = entries.iter().map(|e| e.topic.as_str()).collect();
        assert_eq!(topics, vec!["topic 3", "topic 2", "topic 1"]);
    }
}
