use crate::resolution::domain::{DependencyMap, GraphMetadata, GraphModel};

/// GraphResponse - Result of the build-graph use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// Package-to-dependencies mapping in discovery order
    pub dependency_map: DependencyMap,
    /// Directed graph derived from the mapping
    pub graph: GraphModel,
    /// Information about the resolution run
    pub metadata: GraphMetadata,
    /// Number of non-fatal warnings surfaced during resolution.
    /// A non-zero count means the graph is partial, not authoritative.
    pub warning_count: usize,
}

impl GraphResponse {
    pub fn new(
        dependency_map: DependencyMap,
        graph: GraphModel,
        metadata: GraphMetadata,
        warning_count: usize,
    ) -> Self {
        Self {
            dependency_map,
            graph,
            metadata,
            warning_count,
        }
    }
}
