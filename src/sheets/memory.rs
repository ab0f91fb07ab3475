use async_trait::async_trait;
use std::sync::RwLock;

use super::SheetStore;
use crate::error::{AppError, Result};

/// In-process sheet, used by tests and by the `memory` backend
#[derive(Debug, Default)]
pub struct MemorySheet {
    name: String,
    rows: RwLock<Vec<Vec<String>>>,
}

impl MemorySheet {
    pub fn new(name: &str) -> Self {
        Self::with_rows(name, Vec::new())
    }

    pub fn with_rows(name: &str, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.to_string(),
            rows: RwLock::new(rows),
        }
    }

    /// Snapshot of all stored rows
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.read().map(|rows| rows.clone()).unwrap_or_default()
    }
}

fn poisoned(name: &str) -> AppError {
    AppError::Sheet(format!("sheet '{}' lock poisoned", name))
}

#[async_trait]
impl SheetStore for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    async fn is_empty(&self) -> Result<bool> {
        let rows = self.rows.read().map_err(|_| poisoned(&self.name))?;
        Ok(rows.iter().all(|row| row.iter().all(|cell| cell.is_empty())))
    }

    async fn append_row(&self, row: &[String]) -> Result<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned(&self.name))?;
        rows.push(row.to_vec());
        Ok(())
    }

    async fn col_values(&self, column: usize) -> Result<Vec<String>> {
        if column == 0 {
            return Err(AppError::Validation("column index is 1-based".to_string()));
        }
        let rows = self.rows.read().map_err(|_| poisoned(&self.name))?;
        let mut values: Vec<String> = rows
            .iter()
            .map(|row| row.get(column - 1).cloned().unwrap_or_default())
            .collect();
        // Like the Sheets API, trailing empty cells are not returned
        while values.last().is_some_and(|v| v.is_empty()) {
            values.pop();
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_append_and_emptiness() {
        let sheet = MemorySheet::new("sheet1");
        assert!(sheet.is_empty().await.unwrap());

        sheet.append_row(&cells(&["a", "b"])).await.unwrap();
        sheet.append_row(&cells(&["c"])).await.unwrap();
        assert!(!sheet.is_empty().await.unwrap());
        assert_eq!(sheet.rows().len(), 2);
        assert_eq!(sheet.name(), "sheet1");
    }

    #[tokio::test]
    async fn test_blank_rows_count_as_empty() {
        let sheet = MemorySheet::with_rows("sheet1", vec![cells(&["", ""]), Vec::new()]);
        assert!(sheet.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_col_values_pads_short_rows_and_trims_tail() {
        let sheet = MemorySheet::with_rows(
            "sheet1",
            vec![
                cells(&["Topic", "Tone"]),
                cells(&["sleep"]),
                cells(&["diet", "Calm"]),
                cells(&["walks"]),
            ],
        );
        assert_eq!(
            sheet.col_values(2).await.unwrap(),
            cells(&["Tone", "", "Calm"])
        );
        assert_eq!(sheet.col_values(1).await.unwrap().len(), 4);
        assert!(sheet.col_values(9).await.unwrap().is_empty());
        assert!(sheet.col_values(0).await.is_err());
    }
}
