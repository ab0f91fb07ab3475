//! Headliner - ad headline generation backed by a shared spreadsheet
//!
//! A user submits a topic plus an engagement format, an emotional trigger and
//! a tone (each optionally `random`). The service asks an LLM for three
//! headlines, an emoji for each, and a short description, and appends every
//! result as a row to the sheet that belongs to the submitting user.
//!
//! # Modules
//!
//! - [`vocabulary`]: fixed formats, triggers and tones
//! - [`prompt`]: `random` substitution and prompt text
//! - [`completion`]: LLM client seam and the OpenAI-compatible implementation
//! - [`sheets`]: spreadsheet backends and the header-aware row writer
//! - [`selector`]: username to sheet routing
//! - [`recent`]: trailing-row reader for the latest-topics view
//! - [`generator`]: the three-headline generation loop
//! - [`web`]: actix-web routes

pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod prompt;
pub mod recent;
pub mod selector;
pub mod sheets;
pub mod vocabulary;
pub mod web;

pub use completion::{CompletionClient, OpenAiClient};
pub use config::{ApiStyle, AppConfig, CompletionConfig, SheetsBackend, SheetsConfig};
pub use error::{AppError, Result};
pub use generator::{GenerationSummary, HeadlineGenerator, HEADLINES_PER_REQUEST};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use prompt::{Choice, HeadlineRequest, PromptBuilder, ResolvedFields};
pub use recent::{latest_entries, recent_values, RecentEntry};
pub use selector::{SheetRouter, SheetUser};
pub use sheets::{GeneratedRow, GoogleSheet, MemorySheet, RowWriter, SheetStore};
pub use vocabulary::Vocabulary;
pub use web::{configure, run_server, AppState};
