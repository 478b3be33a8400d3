use crate::ports::outbound::GraphRenderer;
use crate::resolution::domain::{GraphMetadata, GraphModel};
use crate::shared::Result;

/// MermaidRenderer adapter producing a Markdown-embeddable diagram
///
/// Node identifiers are sanitized (hyphens become underscores) and carry the
/// original package name as a label, since Mermaid identifiers are more
/// restrictive than package names.
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn new() -> Self {
        Self
    }

    fn node_id(name: &str) -> String {
        name.replace(|c: char| !c.is_alphanumeric(), "_")
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for MermaidRenderer {
    fn render(&self, graph: &GraphModel, metadata: &GraphMetadata) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "%% Generated by {} {} on {}\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
        output.push_str(&format!(
            "%% Root: {} (max depth: {})\n",
            metadata.root(),
            metadata.max_depth()
        ));
        output.push_str("graph LR\n");

        for node in graph.nodes() {
            output.push_str(&format!(
                "    {}[\"{}\"]\n",
                Self::node_id(node.as_str()),
                node.as_str()
            ));
        }
        for (from, to) in graph.edges() {
            output.push_str(&format!(
                "    {} --> {}\n",
                Self::node_id(from.as_str()),
                Self::node_id(to.as_str())
            ));
        }

        Ok(output)
    }
}
