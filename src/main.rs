// src/main.rs

use clap::Parser;
use weread2logseq::{
    AppError, CommandLineInput, ExportConfig, ExportMode, ExportSummary, Exporter,
    WereadHttpClient,
};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("weread2logseq.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Prints the batch summary. Partial failures are informational; only a
/// batch where every book failed counts as a run failure.
fn report_batch(summary: &ExportSummary, config: &ExportConfig) -> Result<(), AppError> {
    println!();
    println!("📊 Export complete:");
    println!("   exported: {} books", summary.exported.len());
    println!("   skipped (no highlights): {}", summary.skipped);
    println!("   failed: {}", summary.failed.len());
    println!("   output directory: {}", config.output_dir.display());

    if !summary.failed.is_empty() {
        println!();
        println!("⚠️  Failed books:");
        for title in &summary.failed {
            println!("   - {}", title);
        }
    }

    if summary.is_total_failure() {
        return Err(AppError::InternalError {
            message: "every book in the batch failed".to_string(),
            source: None,
        });
    }
    Ok(())
}

/// Executes the selected export mode.
async fn run(config: ExportConfig) -> Result<(), AppError> {
    let client = WereadHttpClient::new(&config.cookie)?;
    let exporter = Exporter::new(Arc::new(client), config.clone());

    match &config.mode {
        ExportMode::PerBook => {
            let summary = exporter.export_all().await?;
            report_batch(&summary, &config)?;
        }
        ExportMode::SingleFile => {
            let path = exporter.export_single_file().await?;
            println!("✓ Digest saved to {}", path.display());
        }
        ExportMode::ByTitle(keyword) => match exporter.export_by_title(keyword).await? {
            Some(path) => println!("✓ Exported to {}", path.display()),
            None => println!("No exportable book matched '{}'", keyword),
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("logging setup failed: {}", e))?;

    let config = ExportConfig::resolve(cli)?;

    run(config).await?;

    Ok(())
}
