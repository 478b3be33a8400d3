use crate::ports::outbound::GraphRenderer;
use crate::resolution::domain::{GraphMetadata, GraphModel};
use crate::shared::Result;

/// DotRenderer adapter producing Graphviz DOT source
///
/// Node and edge statements follow graph insertion order, so output is
/// byte-identical across runs for identical resolutions.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Quotes an identifier for DOT, escaping backslashes and double quotes
    fn quote(name: &str) -> String {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &GraphModel, metadata: &GraphMetadata) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "// Generated by {} {} on {}\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
        output.push_str(&format!(
            "// Root: {} (max depth: {})\n",
            metadata.root(),
            metadata.max_depth()
        ));
        output.push_str("digraph dependencies {\n");
        output.push_str("    rankdir=LR;\n");
        output.push_str("    node [shape=box, fontname=\"Helvetica\"];\n");

        for node in graph.nodes() {
            output.push_str(&format!("    {};\n", Self::quote(node.as_str())));
        }
        for (from, to) in graph.edges() {
            output.push_str(&format!(
                "    {} -> {};\n",
                Self::quote(from.as_str()),
                Self::quote(to.as_str())
            ));
        }

        output.push_str("}\n");
        Ok(output)
    }
}
