//! Command-line interface definitions and parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "headliner")]
#[command(version)]
#[command(about = "Headliner - LLM-written ad headlines, logged to a shared spreadsheet")]
#[command(after_help = "EXAMPLES:
  headliner serve --bind 0.0.0.0:5000
  headliner generate --user january --topic \"knee pain relief\" --trigger Urgency
  headliner latest --user matt
  headliner vocab

Running without a command starts the server.")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Address to bind, overriding the configuration
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Generate three headlines from the command line
    #[command(alias = "g")]
    Generate {
        /// Sheet owner (january or matt)
        #[arg(short, long)]
        user: String,
        /// Ad topic
        #[arg(short, long)]
        topic: String,
        /// Engagement format, or "random"
        #[arg(short, long, default_value = "random")]
        format: String,
        /// Emotional trigger, or "random"
        #[arg(short = 'r', long, default_value = "random")]
        trigger: String,
        /// Tone, or "random"
        #[arg(short = 'n', long, default_value = "random")]
        tone: String,
    },
    /// Show the most recent entries of a sheet
    #[command(alias = "l")]
    Latest {
        /// Sheet owner (january or matt)
        #[arg(short, long, default_value = "january")]
        user: String,
    },
    /// List the engagement formats, emotional triggers and tones
    Vocab,
}
