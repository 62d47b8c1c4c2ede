use clap::Parser;
use inmax_gateway::utils::{logger, validation::Validate};
use inmax_gateway::{concatenate_important_files, ConcatConfig};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConcatConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let summary = concatenate_important_files(Path::new(&config.root), &config.output)?;

    if summary.files_skipped > 0 {
        tracing::warn!("Skipped {} unreadable file(s)", summary.files_skipped);
    }
    tracing::info!(
        "Concatenated {} file(s) into {}",
        summary.files_written,
        summary.output_path.display()
    );
    println!(
        "Important files concatenated into {}",
        summary.output_path.display()
    );

    Ok(())
}
