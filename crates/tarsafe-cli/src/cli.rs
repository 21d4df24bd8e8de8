//! CLI argument parsing using clap.

use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tarsafe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a .tar or .tar.gz archive from a file or directory
    Create(CreateArgs),
    /// Extract archive contents
    Extract(ExtractArgs),
}

#[derive(Debug, clap::Args)]
pub struct CreateArgs {
    /// File or directory to archive
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output archive path (.tar or .tar.gz)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Skip paths containing this substring (relative to SOURCE, repeatable)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,
}

#[derive(Debug, clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file (.tar or .tar.gz)
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Ignore modes recorded in the archive
    #[arg(long)]
    pub no_preserve_permissions: bool,
}
