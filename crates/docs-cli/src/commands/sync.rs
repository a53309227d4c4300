//! Sync command implementation
//!
//! Loads a pipeline config, a version catalog and generated content, then
//! reconciles the pipeline's target directory.

use colored::Colorize;

use docs_core::{ContentSynchronizer, PipelineConfig, SyncAction, load_source_content};
use docs_fs::{ConfigStore, NormalizedPath};
use docs_versions::VersionCatalog;

use crate::cli::SyncArgs;
use crate::error::{CliError, Result};

/// Run the sync command
pub fn run_sync(args: &SyncArgs) -> Result<()> {
    let root = NormalizedPath::new(&args.root);
    if !root.is_dir() {
        return Err(CliError::user(format!(
            "Repository root {} is not a directory",
            root
        )));
    }

    let config = PipelineConfig::load(&NormalizedPath::new(&args.config))?;
    let catalog: VersionCatalog = ConfigStore::new().load(&NormalizedPath::new(&args.catalog))?;
    let source = load_source_content(&NormalizedPath::new(&args.source))?;
    tracing::debug!(
        target_directory = %config.target_directory,
        plans = catalog.plans().len(),
        documents = source.len(),
        "Loaded pipeline inputs"
    );

    if !args.json {
        println!(
            "{} Synchronizing {} ({} documents)...",
            "=>".blue().bold(),
            config.target_directory.cyan(),
            source.len()
        );
    }

    let report = ContentSynchronizer::from_config(root, &catalog, &config).sync(&config, &source)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for action in report.changes() {
        let marker = match action {
            SyncAction::Created(_) => "+".green(),
            SyncAction::Updated(_) | SyncAction::IndexWritten(_) => "~".yellow(),
            SyncAction::Deleted(_) | SyncAction::DirectoryRemoved(_) => "-".red(),
            SyncAction::Unchanged(_) | SyncAction::IndexUnchanged(_) => continue,
        };
        println!("   {} {}", marker, action);
    }

    if report.is_noop() {
        println!("{} Content is up to date.", "OK".green().bold());
    } else {
        println!("{} {}", "OK".green().bold(), report);
    }
    Ok(())
}
