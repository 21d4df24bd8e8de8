//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use tarsafe_core::CreationReport;
use tarsafe_core::ExtractionReport;

use crate::progress::humanize_bytes;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn headline(&self, text: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {text}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(text);
        }
    }

    fn line(&self, label: &str, value: impl std::fmt::Display) {
        let _ = self.term.write_line(&format!("  {label:<18}{value}"));
    }

    fn warnings(&self, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }
        let _ = self.term.write_line("");
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style("Warnings:").yellow().bold()));
        } else {
            let _ = self.term.write_line("Warnings:");
        }
        for warning in warnings {
            let _ = self.term.write_line(&format!("  - {warning}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(&self, archive: &Path, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Extraction complete: {}", archive.display()));
        self.line("Files extracted:", report.files_extracted);
        self.line("Directories:", report.directories_created);
        self.line("Total size:", humanize_bytes(report.bytes_written));
        if report.entries_skipped > 0 {
            self.line("Entries skipped:", report.entries_skipped);
        }
        if self.verbose {
            self.line("Duration:", format!("{:?}", report.duration));
        }
        self.warnings(&report.warnings);

        Ok(())
    }

    fn format_creation_result(&self, output_path: &Path, report: &CreationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Archive created: {}", output_path.display()));
        self.line("Files added:", report.files_added);
        self.line("Directories:", report.directories_added);
        self.line("Content size:", humanize_bytes(report.content_bytes));
        self.line("Archive size:", humanize_bytes(report.archive_bytes));
        if report.entries_excluded > 0 {
            self.line("Excluded:", report.entries_excluded);
        }
        if report.entries_skipped > 0 {
            self.line("Entries skipped:", report.entries_skipped);
        }
        if self.verbose {
            self.line("Ratio:", format!("{:.2}", report.compression_ratio()));
            self.line("Duration:", format!("{:?}", report.duration));
        }
        self.warnings(&report.warnings);

        Ok(())
    }
}
