//! Error types shared by the generator, the storage backends and the web layer

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Body returned when the `user` form field names no known sheet
pub const INVALID_SHEET_MESSAGE: &str = "Invalid sheet name.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid sheet name.")]
    InvalidSheet,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Completion API error: {0}")]
    Completion(String),
    #[error("Spreadsheet error: {0}")]
    Sheet(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSheet | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Completion(_) | AppError::Sheet(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::InvalidSheet => INVALID_SHEET_MESSAGE.to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(body)
    }
}
