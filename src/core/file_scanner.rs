use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning the source root.
pub struct ScanResult {
    pub files: HashSet<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect every scannable file under `source_root`.
///
/// Paths matching an ignore pattern are dropped; paths that cannot be
/// accessed are counted and skipped, never fatal.
pub fn scan_files(source_root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files: HashSet<PathBuf> = HashSet::new();
    let mut skipped_count = 0;

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if glob_patterns
            .iter()
            .any(|p| p.matches(&path.to_string_lossy()))
        {
            continue;
        }

        if path.is_file() && is_scannable_file(path) {
            files.insert(path.to_path_buf());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Extension allow-list: stylesheet, markup, and script file kinds.
fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ts" | "html" | "css" | "less" | "scss" | "js")
    )
}
