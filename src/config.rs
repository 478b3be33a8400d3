//! Configuration file support for pipgraph.
//!
//! Provides YAML-based configuration through `pipgraph.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::DEFAULT_REPOSITORY_URL;
use crate::adapters::outbound::render::DEFAULT_DOT_BINARY;
use crate::cli::{Args, OutputFormat, SourceKind};
use crate::shared::error::GraphError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "pipgraph.config.yml";

/// Depth explored when neither the CLI nor the config file sets one
const DEFAULT_MAX_DEPTH: usize = 1;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package: Option<String>,
    pub max_depth: Option<usize>,
    pub source: Option<String>,
    pub repository: Option<String>,
    pub site_packages: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub dot_binary: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    eprintln!("📋 Auto-discovered config file: {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref package) = config.package {
        if package.trim().is_empty() {
            bail!(
                "Invalid config: 'package' must not be empty.\n\n\
                 💡 Hint: Set it to the package whose graph you want, e.g. \"requests\"."
            );
        }
    }
    if let Some(ref repository) = config.repository {
        if repository.trim().is_empty() {
            bail!(
                "Invalid config: 'repository' must not be empty.\n\n\
                 💡 Hint: Use a PyPI-compatible base URL such as \"https://pypi.org/pypi\"."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective options after merging CLI arguments over config file values.
///
/// CLI flags always win; config file values fill the gaps; built-in defaults
/// cover whatever remains.
#[derive(Debug)]
pub struct Settings {
    pub package: String,
    pub max_depth: usize,
    pub source: SourceKind,
    pub repository: String,
    pub site_packages: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub dot_binary: String,
}

impl Settings {
    pub fn merge(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let package = args
            .package
            .or(config.package)
            .ok_or(GraphError::MissingPackage)?;

        let source = match args.source {
            Some(source) => source,
            None => match config.source.as_deref() {
                Some(value) => SourceKind::from_str(value).map_err(|e| anyhow::anyhow!(e))?,
                None => SourceKind::Local,
            },
        };

        let format = match args.format {
            Some(format) => format,
            None => match config.format.as_deref() {
                Some(value) => OutputFormat::from_str(value).map_err(|e| anyhow::anyhow!(e))?,
                None => OutputFormat::Dot,
            },
        };

        let output = args
            .output
            .or(config.output)
            .map(PathBuf::from);

        if format == OutputFormat::Png && output.is_none() {
            return Err(GraphError::MissingOutputPath {
                format: "png".to_string(),
            }
            .into());
        }

        Ok(Self {
            package,
            max_depth: args
                .max_depth
                .or(config.max_depth)
                .unwrap_or(DEFAULT_MAX_DEPTH),
            source,
            repository: args
                .repository
                .or(config.repository)
                .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string()),
            site_packages: args
                .site_packages
                .or(config.site_packages)
                .map(PathBuf::from),
            format,
            output,
            dot_binary: args
                .dot_binary
                .or(config.dot_binary)
                .unwrap_or_else(|| DEFAULT_DOT_BINARY.to_string()),
        })
    }
}
