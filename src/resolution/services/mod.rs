mod resolver;

pub use resolver::{Resolution, ResolutionEngine, ResolutionWarning};
