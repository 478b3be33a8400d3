/// Render adapters turning a resolved graph into visual artifacts
mod dot_renderer;
mod graphviz_exporter;
mod mermaid_renderer;

pub use dot_renderer::DotRenderer;
pub use graphviz_exporter::{GraphvizExporter, DEFAULT_DOT_BINARY};
pub use mermaid_renderer::MermaidRenderer;
