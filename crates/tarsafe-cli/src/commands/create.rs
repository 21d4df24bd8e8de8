//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use tarsafe_core::CreationConfig;
use tarsafe_core::NoopProgress;
use tarsafe_core::create_archive_with_progress;

pub fn execute(args: &CreateArgs, formatter: &dyn OutputFormatter, show_progress: bool) -> Result<()> {
    let config = CreationConfig::default().with_exclude_patterns(args.exclude.iter().cloned());

    let result = if show_progress {
        let mut progress = CliProgress::new("Creating");
        create_archive_with_progress(&args.source, &args.output, &config, &mut progress)
    } else {
        create_archive_with_progress(&args.source, &args.output, &config, &mut NoopProgress)
    };
    let report = add_archive_context(result, &args.output)?;

    formatter.format_creation_result(&args.output, &report)
}
