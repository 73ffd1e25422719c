use anyhow::Context;
use cite_strip::config::LogFormat;
use cite_strip::utils::logger::{self, LogTarget};
use cite_strip::{CitationStripper, CliConfig, CiteError, FolderProcessor, LocalStorage};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // stdout carries the summary when --json is set.
    let target = if cli.json {
        LogTarget::Stderr
    } else {
        LogTarget::Stdout
    };
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, target),
        LogFormat::Json => logger::init_json_logger(cli.verbose, target),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    tracing::info!("Cleaning citations in {}", config.folder.display());

    let stripper = CitationStripper::new().context("failed to build citation matcher")?;
    let processor = FolderProcessor::new(LocalStorage::new(), config, stripper);

    let summary = match processor.run() {
        Ok(summary) => summary,
        Err(e) => exit_with(&e),
    };

    if cli.json {
        println!("{}", summary.to_json().context("failed to render summary")?);
    }

    Ok(())
}

fn exit_with(e: &CiteError) -> ! {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(1);
}
