use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use super::auth::TokenProvider;
use super::SheetStore;
use crate::error::{AppError, Result};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// One worksheet (tab) of a Google spreadsheet, addressed by position
pub struct GoogleSheet {
    spreadsheet_id: String,
    index: usize,
    name: String,
    auth: Arc<TokenProvider>,
    client: reqwest::Client,
    title: OnceCell<String>,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Spreadsheet column letters for a 1-based index (1 → A, 27 → AA)
pub fn column_letter(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        column = (column - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A1 range for a whole tab, quoting the title
fn quoted_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Appends fill a tab from row 1, so an empty first row means an empty tab
fn first_row_range(title: &str) -> String {
    format!("{}!1:1", quoted_title(title))
}

impl GoogleSheet {
    pub fn new(
        spreadsheet_id: &str,
        index: usize,
        auth: Arc<TokenProvider>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            spreadsheet_id: spreadsheet_id.to_string(),
            index,
            name: format!("sheet{}", index + 1),
            auth,
            client,
            title: OnceCell::new(),
        })
    }

    async fn title(&self) -> Result<&str> {
        let title = self
            .title
            .get_or_try_init(|| async {
                let url = format!(
                    "{}/{}?fields=sheets.properties.title",
                    SHEETS_API_BASE, self.spreadsheet_id
                );
                let metadata: SpreadsheetMetadata = self.get_json(&url).await?;
                metadata
                    .sheets
                    .into_iter()
                    .nth(self.index)
                    .map(|s| s.properties.title)
                    .ok_or_else(|| {
                        AppError::Sheet(format!(
                            "spreadsheet has no worksheet at position {}",
                            self.index
                        ))
                    })
            })
            .await?;
        Ok(title.as_str())
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/{}/values/{}",
            SHEETS_API_BASE,
            self.spreadsheet_id,
            urlencoding::encode(range)
        )
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let token = self.auth.access_token().await?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Sheet(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Sheet(format!(
                "{} returned status {}: {}",
                self.name, status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Sheet(format!("malformed response: {}", e)))
    }

    async fn get_values(&self, range: &str, major_dimension: &str) -> Result<Vec<Vec<String>>> {
        let url = format!(
            "{}?majorDimension={}",
            self.values_url(range),
            major_dimension
        );
        let range: ValueRange = self.get_json(&url).await?;
        Ok(range.values)
    }
}

#[async_trait]
impl SheetStore for GoogleSheet {
    fn name(&self) -> &str {
        &self.name
    }

    async fn is_empty(&self) -> Result<bool> {
        let range = first_row_range(self.title().await?);
        let rows = self.get_values(&range, "ROWS").await?;
        Ok(rows.iter().all(|row| row.iter().all(|cell| cell.is_empty())))
    }

    async fn append_row(&self, row: &[String]) -> Result<()> {
        let range = quoted_title(self.title().await?);
        let url = format!(
            "{}:append?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS",
            self.values_url(&range)
        );
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| AppError::Sheet(format!("append failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Sheet(format!(
                "append to {} failed with status {}: {}",
                self.name, status, error_text
            )));
        }
        Ok(())
    }

    async fn col_values(&self, column: usize) -> Result<Vec<String>> {
        if column == 0 {
            return Err(AppError::Validation("column index is 1-based".to_string()));
        }
        let letter = column_letter(column);
        let range = format!("{}!{}:{}", quoted_title(self.title().await?), letter, letter);
        Ok(self
            .get_values(&range, "COLUMNS")
            .await?
            .into_iter()
            .next()
            .unwrap_or_default())
    }
}
