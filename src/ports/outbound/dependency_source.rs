use crate::resolution::domain::PackageName;
use async_trait::async_trait;
use thiserror::Error;

/// Errors a dependency source can produce for a single package lookup.
///
/// Every variant is non-fatal to a resolution run: the engine records the
/// package with an empty dependency list and keeps traversing, surfacing the
/// failure as a warning instead of aborting.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The source has no record of the package
    #[error("package not found")]
    NotFound,

    /// The source could not be reached (network or I/O failure)
    #[error("source unavailable: {details}")]
    SourceUnavailable { details: String },

    /// The source answered with data the adapter could not parse
    #[error("malformed response: {details}")]
    MalformedResponse { details: String },
}

impl LookupError {
    /// Short label used when reporting warnings
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::NotFound => "not found",
            LookupError::SourceUnavailable { .. } => "source unavailable",
            LookupError::MalformedResponse { .. } => "malformed response",
        }
    }
}

/// Result of a single dependency lookup
pub type LookupResult = std::result::Result<Vec<PackageName>, LookupError>;

/// DependencySource port answering "what does package P directly depend on?"
///
/// Implementations reduce raw requirement strings (version specifiers,
/// extras, environment markers) to bare normalized names before returning
/// them; the engine never sees unnormalized input. The reported order is
/// preserved so resolution output is deterministic for a deterministic
/// source.
///
/// A source MAY impose a rate-limiting delay between successive calls (for
/// example to respect a registry's usage policy). That delay is a property of
/// the source and invisible to the engine's contract.
#[async_trait]
pub trait DependencySource: Send + Sync {
    /// Returns the direct dependency names of `package`, in source order.
    async fn direct_dependencies(&self, package: &PackageName) -> LookupResult;
}
