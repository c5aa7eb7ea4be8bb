// src/config.rs
use crate::constants::{DEFAULT_DIGEST_FILENAME, DEFAULT_OUTPUT_DIR};
use crate::error::AppError;
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Output directory for exported files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: String,

    /// Merge all notes into a single file instead of one file per book
    #[arg(long, default_value_t = false)]
    pub single: bool,

    /// Output filename in single-file mode
    #[arg(long, default_value = DEFAULT_DIGEST_FILENAME)]
    pub filename: String,

    /// Export only the first book whose title contains this keyword
    #[arg(long)]
    pub book: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Which export mode the run is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportMode {
    /// One outline file per book.
    PerBook,
    /// All books merged into one digest document.
    SingleFile,
    /// Only the first book whose title contains the keyword.
    ByTitle(String),
}

/// Resolved export configuration, validated and ready to drive a run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub cookie: String,
    pub output_dir: PathBuf,
    pub digest_filename: String,
    pub mode: ExportMode,
    pub verbose: bool,
}

impl ExportConfig {
    /// Resolves a complete configuration from CLI input and environment.
    ///
    /// The WeRead session cookie comes from `WEREAD_COOKIE`; a missing
    /// cookie is the fatal initialization failure; nothing can be
    /// fetched without it.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let cookie = std::env::var("WEREAD_COOKIE").map_err(|_| {
            AppError::MissingConfiguration(
                "WEREAD_COOKIE environment variable not set".to_string(),
            )
        })?;
        if cookie.trim().is_empty() {
            return Err(AppError::MissingConfiguration(
                "WEREAD_COOKIE is empty".to_string(),
            ));
        }

        let mode = if let Some(keyword) = cli.book {
            ExportMode::ByTitle(keyword)
        } else if cli.single {
            ExportMode::SingleFile
        } else {
            ExportMode::PerBook
        };

        Ok(ExportConfig {
            cookie,
            output_dir: PathBuf::from(cli.output),
            digest_filename: cli.filename,
            mode,
            verbose: cli.verbose,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cookie: String::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            digest_filename: DEFAULT_DIGEST_FILENAME.to_string(),
            mode: ExportMode::PerBook,
            verbose: false,
        }
    }
}
