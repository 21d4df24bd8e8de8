//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use std::path::Path;
use tarsafe_core::ExtractionConfig;
use tarsafe_core::NoopProgress;
use tarsafe_core::extract_archive_with_progress;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter, show_progress: bool) -> Result<()> {
    // An empty path resolves to the current directory in the core.
    let output_dir = args.output_dir.as_deref().unwrap_or(Path::new(""));
    let config =
        ExtractionConfig::default().with_preserve_permissions(!args.no_preserve_permissions);

    let result = if show_progress {
        let mut progress = CliProgress::new("Extracting");
        extract_archive_with_progress(&args.archive, output_dir, &config, &mut progress)
    } else {
        extract_archive_with_progress(&args.archive, output_dir, &config, &mut NoopProgress)
    };
    let report = add_archive_context(result, &args.archive)?;

    formatter.format_extraction_result(&args.archive, &report)
}
