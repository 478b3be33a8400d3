//! pipgraph - dependency graph tool for Python packages
//!
//! This library resolves the transitive dependency closure of a Python
//! package, from installed metadata or a PyPI-compatible registry, and
//! renders it as a directed graph.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): The resolution engine, package names,
//!   the discovered dependency mapping and the derived graph
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pipgraph::prelude::*;
//! use std::path::Path;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let source = LocalMetadataSource::new(Path::new(".venv/lib/python3.12/site-packages"))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = BuildGraphUseCase::new(source, progress_reporter);
//!
//! // Execute
//! let request = GraphRequest::new("requests".to_string(), 2);
//! let response = use_case.execute(request).await?;
//!
//! // Render output
//! let renderer = DotRenderer::new();
//! let dot = renderer.render(&response.graph, &response.metadata)?;
//! println!("{}", dot);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::metadata::LocalMetadataSource;
    pub use crate::adapters::outbound::network::RegistryDependencySource;
    pub use crate::adapters::outbound::render::{DotRenderer, GraphvizExporter, MermaidRenderer};
    pub use crate::application::dto::{GraphRequest, GraphResponse};
    pub use crate::application::use_cases::BuildGraphUseCase;
    pub use crate::ports::outbound::{
        DependencySource, GraphRenderer, LookupError, LookupResult, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::resolution::domain::{DependencyMap, GraphMetadata, GraphModel, PackageName};
    pub use crate::resolution::services::{Resolution, ResolutionEngine, ResolutionWarning};
    pub use crate::shared::Result;
}
