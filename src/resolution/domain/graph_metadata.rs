use super::PackageName;
use chrono::Utc;

/// GraphMetadata value object describing one resolution run
///
/// Embedded as a header comment in rendered output so an artifact can be
/// traced back to the tool version, root package and time that produced it.
#[derive(Debug, Clone)]
pub struct GraphMetadata {
    root: String,
    max_depth: usize,
    tool_name: String,
    tool_version: String,
    timestamp: String,
}

impl GraphMetadata {
    pub fn new(
        root: String,
        max_depth: usize,
        tool_name: String,
        tool_version: String,
        timestamp: String,
    ) -> Self {
        Self {
            root,
            max_depth,
            tool_name,
            tool_version,
            timestamp,
        }
    }

    /// Stamps metadata with the current time and this crate's identity
    pub fn generate(root: &PackageName, max_depth: usize) -> Self {
        Self::new(
            root.as_str().to_string(),
            max_depth,
            "pipgraph".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            Utc::now().to_rfc3339(),
        )
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
