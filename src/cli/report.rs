//! Console output for generation results.
//!
//! Separate from core logic so icongen can be used as a library. All
//! printing goes through `*_to` variants taking a writer, which the
//! public entry points bind to stdout/stderr.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::GenerateResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the result of a generation run.
pub fn print(result: &GenerateResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_skip_warning(result, verbose);
}

/// Print the result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &GenerateResult, verbose: bool, writer: &mut W) {
    if verbose || result.dry_run {
        for icon in &result.icons {
            let _ = writeln!(writer, "  {}", icon);
        }
    }

    let count = result.icons.len();
    let noun = if count == 1 { "icon" } else { "icons" };

    if result.dry_run {
        let _ = writeln!(
            writer,
            "{} {} {} to {}",
            "Would generate".yellow().bold(),
            count,
            noun,
            result.output_path.display()
        );
        let _ = writeln!(
            writer,
            "Run without {} to write the manifest.",
            "--dry-run".cyan()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Generated {} {} to {} ({} source {} scanned)",
                count,
                noun,
                result.output_path.display(),
                result.files_scanned,
                if result.files_scanned == 1 {
                    "file"
                } else {
                    "files"
                }
            )
            .green()
        );
    }
}

/// Print a warning about files that could not be read.
pub fn print_skip_warning(result: &GenerateResult, verbose: bool) {
    print_skip_warning_to(result, verbose, &mut io::stderr().lock());
}

/// Print the skipped-file warning to a custom writer.
pub fn print_skip_warning_to<W: Write>(result: &GenerateResult, verbose: bool, writer: &mut W) {
    if result.skipped.is_empty() {
        return;
    }

    if verbose {
        for (path, error) in &result.skipped {
            let _ = writeln!(
                writer,
                "{} Cannot read {}: {}",
                "warning:".bold().yellow(),
                path,
                error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) skipped due to read errors (use {} for details)",
            "warning:".bold().yellow(),
            result.skipped.len(),
            "-v".cyan()
        );
    }
}

// ============================================================
// Tests
// ============================================================
