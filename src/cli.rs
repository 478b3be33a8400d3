use clap::Parser;

use crate::adapters::outbound::render::{DotRenderer, MermaidRenderer};
use crate::ports::outbound::GraphRenderer;

/// Where dependency information comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Installed-package metadata in a site-packages directory
    Local,
    /// A PyPI-compatible JSON API over HTTP
    Registry,
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(SourceKind::Local),
            "registry" | "remote" | "pypi" => Ok(SourceKind::Registry),
            _ => Err(format!(
                "Invalid source: {}. Please specify 'local' or 'registry'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dot,
    Mermaid,
    Png,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "mermaid" | "mmd" => Ok(OutputFormat::Mermaid),
            "png" => Ok(OutputFormat::Png),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'dot', 'mermaid' or 'png'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a text renderer for this format
    ///
    /// PNG output renders DOT source first; the Graphviz exporter turns it
    /// into the final image.
    pub fn create_renderer(&self) -> Box<dyn GraphRenderer> {
        match self {
            OutputFormat::Dot | OutputFormat::Png => Box::new(DotRenderer::new()),
            OutputFormat::Mermaid => Box::new(MermaidRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Dot => "📝 Generating DOT output...",
            OutputFormat::Mermaid => "📝 Generating Mermaid output...",
            OutputFormat::Png => "📝 Rendering PNG via Graphviz...",
        }
    }
}

/// Draw dependency graphs for Python packages
#[derive(Parser, Debug)]
#[command(name = "pipgraph")]
#[command(version)]
#[command(about = "Resolve and draw the dependency graph of a Python package", long_about = None)]
pub struct Args {
    /// Package whose dependencies should be resolved
    /// (may instead come from the config file)
    pub package: Option<String>,

    /// Maximum number of dependency hops from the root
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Where dependency information comes from: local or registry
    #[arg(short, long)]
    pub source: Option<SourceKind>,

    /// Base URL of a PyPI-compatible JSON API (registry source)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// site-packages directory to scan (local source)
    #[arg(long, value_name = "DIR")]
    pub site_packages: Option<String>,

    /// Output format: dot, mermaid or png
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (stdout if not specified; required for png)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Graphviz executable used for png output
    #[arg(long, value_name = "PATH")]
    pub dot_binary: Option<String>,

    /// Explicit configuration file (default: ./pipgraph.config.yml)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
