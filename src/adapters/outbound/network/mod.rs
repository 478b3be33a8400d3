/// Network adapters for external API calls
mod registry_client;

pub use registry_client::{RegistryDependencySource, DEFAULT_REPOSITORY_URL};
