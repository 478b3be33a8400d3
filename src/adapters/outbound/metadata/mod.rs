/// Metadata adapters for installed-package lookups
mod local_source;

pub use local_source::LocalMetadataSource;
