use crate::ports::outbound::{DependencySource, LookupError, LookupResult};
use crate::resolution::domain::PackageName;
use crate::shared::error::GraphError;
use crate::shared::security;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix of per-package metadata directories in site-packages
const DIST_INFO_SUFFIX: &str = ".dist-info";

/// Metadata file name inside a dist-info directory
const METADATA_FILE: &str = "METADATA";

/// LocalMetadataSource adapter reading installed-package metadata
///
/// Scans a site-packages directory once at construction and indexes every
/// `*.dist-info/METADATA` file by normalized package name. Lookups are then
/// answered from memory without touching the disk again, so the adapter is
/// deterministic for the lifetime of one resolution run.
#[derive(Debug)]
pub struct LocalMetadataSource {
    index: HashMap<PackageName, Vec<PackageName>>,
}

impl LocalMetadataSource {
    /// Builds the index from the given site-packages directory.
    pub fn new(site_packages: &Path) -> Result<Self> {
        if !site_packages.is_dir() {
            return Err(GraphError::SitePackagesNotFound {
                path: site_packages.to_path_buf(),
                suggestion: "Pass --site-packages pointing at a Python environment's site-packages directory, or run inside a project with a .venv.".to_string(),
            }
            .into());
        }

        let mut dist_info_dirs: Vec<PathBuf> = fs::read_dir(site_packages)
            .map_err(|e| {
                anyhow::anyhow!(
                    "Failed to read site-packages directory {}: {}",
                    site_packages.display(),
                    e
                )
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_dir()
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.ends_with(DIST_INFO_SUFFIX))
            })
            .collect();
        // Scan order must not depend on readdir order
        dist_info_dirs.sort();

        let mut index = HashMap::new();
        for dir in dist_info_dirs {
            let metadata_path = dir.join(METADATA_FILE);
            if !metadata_path.is_file() {
                continue;
            }

            let content = match security::safe_read_to_string(&metadata_path, "metadata file") {
                Ok(content) => content,
                Err(e) => {
                    eprintln!(
                        "⚠️  Warning: Skipping unreadable metadata file {}: {}",
                        metadata_path.display(),
                        e
                    );
                    continue;
                }
            };

            match Self::parse_metadata(&content) {
                Some((name, dependencies)) => {
                    index.insert(name, dependencies);
                }
                None => {
                    eprintln!(
                        "⚠️  Warning: {} has no usable Name field, skipping",
                        metadata_path.display()
                    );
                }
            }
        }

        Ok(Self { index })
    }

    /// Discovers a project-local virtualenv site-packages directory.
    ///
    /// Checks `.venv/lib/python*/site-packages` under `project_dir` and
    /// returns the first match in lexical order.
    pub fn discover(project_dir: &Path) -> Option<PathBuf> {
        let lib_dir = project_dir.join(".venv").join("lib");
        let mut candidates: Vec<PathBuf> = fs::read_dir(&lib_dir)
            .ok()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("python"))
            })
            .map(|path| path.join("site-packages"))
            .filter(|path| path.is_dir())
            .collect();
        candidates.sort();
        candidates.into_iter().next()
    }

    /// Number of packages found in the scanned directory
    pub fn package_count(&self) -> usize {
        self.index.len()
    }

    /// Parses the header block of a METADATA file.
    ///
    /// Headers follow the email message format: `Key: value` lines until the
    /// first blank line, after which the package description begins. Only
    /// `Name` and `Requires-Dist` are of interest here. Requirement strings
    /// that fail normalization are skipped with a warning; the remaining
    /// entries are kept in file order.
    fn parse_metadata(content: &str) -> Option<(PackageName, Vec<PackageName>)> {
        let mut name = None;
        let mut dependencies = Vec::new();

        for line in content.lines() {
            if line.is_empty() {
                break;
            }

            if let Some(value) = line.strip_prefix("Name:") {
                match PackageName::new(value) {
                    Ok(parsed) => name = Some(parsed),
                    Err(_) => return None,
                }
            } else if let Some(value) = line.strip_prefix("Requires-Dist:") {
                match PackageName::parse_requirement(value) {
                    Ok(dependency) => dependencies.push(dependency),
                    Err(e) => {
                        eprintln!(
                            "⚠️  Warning: Skipping unparseable requirement '{}': {}",
                            value.trim(),
                            e
                        );
                    }
                }
            }
        }

        name.map(|name| (name, dependencies))
    }
}

#[async_trait]
impl DependencySource for LocalMetadataSource {
    async fn direct_dependencies(&self, package: &PackageName) -> LookupResult {
        match self.index.get(package) {
            Some(dependencies) => Ok(dependencies.clone()),
            None => Err(LookupError::NotFound),
        }
    }
}
