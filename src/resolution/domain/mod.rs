pub mod dependency_map;
pub mod graph_metadata;
pub mod graph_model;
pub mod package;

pub use dependency_map::DependencyMap;
pub use graph_metadata::GraphMetadata;
pub use graph_model::GraphModel;
pub use package::PackageName;
