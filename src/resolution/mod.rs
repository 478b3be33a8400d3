/// Dependency resolution core - domain model and services
///
/// The domain submodule holds the value objects (package names, the
/// discovered dependency mapping, the derived graph); services holds the
/// resolution engine that drives traversal against a DependencySource.
pub mod domain;
pub mod services;
