//! `angular.json` loading and project resolution.
//!
//! The workspace descriptor is the only configuration source: it names the
//! default project and each project's source root. Everything here fails
//! fast, before any scanning starts.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

/// The Angular CLI workspace descriptor read from the project directory.
pub const ANGULAR_CONFIG_FILE: &str = "angular.json";

/// Default filename for the generated manifest, written under the source root.
pub const DEFAULT_OUTPUT_FILE: &str = "ant-svg-icons.ts";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularConfig {
    #[serde(default)]
    pub default_project: Option<String>,
    #[serde(default)]
    pub projects: HashMap<String, ProjectConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub source_root: Option<String>,
}

/// A project entry resolved against the workspace descriptor.
#[derive(Debug, Clone)]
pub struct ResolvedProject {
    pub name: String,
    /// Root of the sources to scan, joined onto the project directory.
    pub source_root: PathBuf,
}

/// Load `angular.json` from `project_dir` and resolve the project to scan.
///
/// `project_override` takes precedence over the descriptor's
/// `defaultProject` field.
///
/// # Errors
///
/// Fails when the descriptor is absent, no project is named, the named
/// project is unknown, or it declares no `sourceRoot`.
pub fn resolve_project(
    project_dir: &Path,
    project_override: Option<&str>,
) -> Result<ResolvedProject> {
    let config_path = project_dir.join(ANGULAR_CONFIG_FILE);
    if !config_path.exists() {
        bail!(
            "No {} found in {}",
            ANGULAR_CONFIG_FILE,
            project_dir.display()
        );
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: AngularConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let name = match project_override {
        Some(name) => name.to_string(),
        None => config
            .default_project
            .clone()
            .ok_or_else(|| anyhow!("No [defaultProject] field in {}", ANGULAR_CONFIG_FILE))?,
    };

    let project = config
        .projects
        .get(&name)
        .ok_or_else(|| anyhow!("Project '{}' not found in {}", name, ANGULAR_CONFIG_FILE))?;

    let source_root = project
        .source_root
        .as_deref()
        .ok_or_else(|| anyhow!("Project '{}' has no [sourceRoot] field", name))?;

    Ok(ResolvedProject {
        name,
        source_root: project_dir.join(source_root),
    })
}
