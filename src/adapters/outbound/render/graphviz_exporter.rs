use crate::shared::error::GraphError;
use crate::shared::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// Default Graphviz program used when the caller does not configure one
pub const DEFAULT_DOT_BINARY: &str = "dot";

/// GraphvizExporter adapter persisting a PNG artifact
///
/// Invokes the Graphviz `dot` program at an explicitly configured location.
/// The process environment is never modified to locate the binary; callers
/// that need a non-PATH installation pass its full path instead.
pub struct GraphvizExporter {
    dot_binary: PathBuf,
}

impl GraphvizExporter {
    pub fn new(dot_binary: impl Into<PathBuf>) -> Self {
        Self {
            dot_binary: dot_binary.into(),
        }
    }

    /// Renders DOT source to a PNG file at `output_path`.
    ///
    /// The DOT text is staged through a temporary file so the Graphviz
    /// process never reads from a pipe, matching how it is usually invoked.
    pub fn export_png(&self, dot_source: &str, output_path: &Path) -> Result<()> {
        let mut dot_file = NamedTempFile::new().map_err(|e| GraphError::RenderFailed {
            details: format!("failed to stage DOT source: {}", e),
            hint: "Check that the system temporary directory is writable.".to_string(),
        })?;
        dot_file
            .write_all(dot_source.as_bytes())
            .and_then(|_| dot_file.flush())
            .map_err(|e| GraphError::RenderFailed {
                details: format!("failed to stage DOT source: {}", e),
                hint: "Check that the system temporary directory is writable.".to_string(),
            })?;

        let status = Command::new(&self.dot_binary)
            .arg("-Tpng")
            .arg(dot_file.path())
            .arg("-o")
            .arg(output_path)
            .status()
            .map_err(|e| GraphError::RenderFailed {
                details: format!("failed to run '{}': {}", self.dot_binary.display(), e),
                hint: "Install Graphviz or point --dot-binary at the dot executable.".to_string(),
            })?;

        if !status.success() {
            return Err(GraphError::RenderFailed {
                details: format!("'{}' exited with {}", self.dot_binary.display(), status),
                hint: "Check that the output directory exists and is writable.".to_string(),
            }
            .into());
        }

        eprintln!("✅ Graph image written to: {}", output_path.display());
        Ok(())
    }
}
