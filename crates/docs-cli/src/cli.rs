//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Docs pipeline synchronizer - Reconcile generated Markdown with the content tree
#[derive(Parser, Debug)]
#[command(name = "docs-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize one pipeline's generated content into the content tree
    ///
    /// Examples:
    ///   docs-sync sync --config pipelines/rest.toml --catalog versions.toml --source build/rest.json
    ///   docs-sync sync --root ../docs --config rest.yaml --catalog versions.yaml --source rest.json --json
    Sync(SyncArgs),

    /// Print the compressed `versions` frontmatter for a set of versions
    ///
    /// Versions are written `<plan>@<release>`, where the plan may be a
    /// short name such as `ghes`.
    ///
    /// Examples:
    ///   docs-sync versions --catalog versions.toml ghes@3.4 ghes@3.5 fpt@latest
    Versions(VersionsArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SyncArgs {
    /// Repository root that content paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Pipeline config (TOML, JSON or YAML)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Version catalog (TOML, JSON or YAML)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Generated content (JSON or YAML)
    #[arg(short, long)]
    pub source: PathBuf,

    /// Output the report as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct VersionsArgs {
    /// Version catalog (TOML, JSON or YAML)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Versions to compress
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sync_defaults_root() {
        let cli = Cli::parse_from([
            "docs-sync", "sync", "--config", "rest.toml", "--catalog", "versions.toml", "--source",
            "rest.json",
        ]);
        match cli.command {
            Commands::Sync(args) => {
                assert_eq!(args.root, PathBuf::from("."));
                assert_eq!(args.config, PathBuf::from("rest.toml"));
                assert!(!args.json);
            }
            other => panic!("expected sync, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_versions_with_global_verbose() {
        let cli = Cli::parse_from([
            "docs-sync", "versions", "-v", "--catalog", "versions.toml", "ghes@3.4", "fpt@latest",
        ]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Versions(VersionsArgs {
                catalog: PathBuf::from("versions.toml"),
                versions: vec!["ghes@3.4".to_string(), "fpt@latest".to_string()],
            })
        );
    }

    #[test]
    fn test_versions_requires_at_least_one_version() {
        let result = Cli::try_parse_from(["docs-sync", "versions", "--catalog", "versions.toml"]);
        assert!(result.is_err());
    }
}
