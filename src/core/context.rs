//! Pipeline orchestration for one generation run.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::PathBuf,
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{
    cli::args::GenerateArgs,
    config::{self, ResolvedProject},
    core::{
        extract::extract_tokens,
        file_scanner::scan_files,
        manifest::build_manifest,
        resolve::{CanonicalIcon, resolve_icon_name},
    },
};

/// Outcome of one generation run, consumed by the CLI reporter.
#[derive(Debug)]
pub struct GenerateResult {
    /// Canonical identifiers in manifest order.
    pub icons: Vec<String>,
    /// Where the manifest was (or would be) written.
    pub output_path: PathBuf,
    /// Number of source files whose content was scanned.
    pub files_scanned: usize,
    /// Files that could not be read, with the error text.
    pub skipped: Vec<(String, String)>,
    /// True when `--dry-run` suppressed the write.
    pub dry_run: bool,
}

/// Orchestrates one run: scan the corpus, extract and resolve icon
/// references, render and write the manifest.
///
/// The token and icon sets are owned by the run and touched by a single
/// logical thread of control; nothing persists between runs.
pub struct GenerateContext {
    project: ResolvedProject,
    output: String,
    ignore: Vec<String>,
    dry_run: bool,
    verbose: bool,
}

impl GenerateContext {
    /// Resolve the project descriptor up front so configuration errors
    /// abort before any scanning.
    pub fn new(args: &GenerateArgs) -> Result<Self> {
        let project =
            config::resolve_project(&args.common.project_dir, args.common.project.as_deref())?;

        Ok(Self {
            project,
            output: args.output.clone(),
            ignore: args.ignore.clone(),
            dry_run: args.dry_run,
            verbose: args.common.verbose,
        })
    }

    /// Run the pipeline and write the manifest (unless dry-run).
    ///
    /// Individual unreadable files are skipped and reported in the result;
    /// only a manifest write failure is fatal here.
    pub fn run(&self) -> Result<GenerateResult> {
        let scan = scan_files(&self.project.source_root, &self.ignore, self.verbose);

        if scan.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan.skipped_count,
                if self.verbose { "" } else { " (use -v for details)" }
            );
        }

        // Gather phase: reads fan out against the filesystem and fan back in.
        let read_results: Vec<(&PathBuf, std::io::Result<String>)> = scan
            .files
            .par_iter()
            .map(|path| (path, fs::read_to_string(path)))
            .collect();

        // Everything past the gather is sequential over run-owned sets.
        let mut raw_tokens: HashSet<String> = HashSet::new();
        let mut skipped: Vec<(String, String)> = Vec::new();
        let mut files_scanned = 0;

        for (path, content) in read_results {
            match content {
                Ok(content) => {
                    files_scanned += 1;
                    raw_tokens.extend(extract_tokens(&content));
                }
                Err(e) => {
                    skipped.push((path.display().to_string(), e.to_string()));
                }
            }
        }

        let icons: BTreeSet<CanonicalIcon> = raw_tokens
            .iter()
            .filter_map(|token| resolve_icon_name(token))
            .collect();

        let output_path = self.project.source_root.join(&self.output);
        if !self.dry_run {
            fs::write(&output_path, build_manifest(&icons))
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }

        skipped.sort();

        Ok(GenerateResult {
            icons: icons.iter().map(|i| i.as_str().to_string()).collect(),
            output_path,
            files_scanned,
            skipped,
            dry_run: self.dry_run,
        })
    }
}
