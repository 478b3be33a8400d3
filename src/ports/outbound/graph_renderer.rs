use crate::resolution::domain::{GraphMetadata, GraphModel};
use crate::shared::Result;

/// GraphRenderer port for turning a resolved graph into output text
///
/// Implementations produce one textual format (DOT, Mermaid). Rendering is a
/// pure function of the graph and metadata; persisting the result is the
/// presenter's or exporter's concern.
pub trait GraphRenderer {
    /// Renders the graph with a metadata header
    ///
    /// # Arguments
    /// * `graph` - The resolved dependency graph
    /// * `metadata` - Information about the resolution run (tool, root, timestamp)
    fn render(&self, graph: &GraphModel, metadata: &GraphMetadata) -> Result<String>;
}
