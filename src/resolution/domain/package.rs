use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a normalized package name.
///
/// Names are canonicalized the way package indexes compare them: lowercased,
/// with runs of `-`, `_` and `.` collapsed to a single `-`. Two spellings of
/// the same package ("Flask_SQLAlchemy", "flask-sqlalchemy") therefore map to
/// one identity key throughout a resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if trimmed.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed."
            );
        }

        // Canonical form: lowercase, runs of separators collapse to one '-'
        let mut canonical = String::with_capacity(trimmed.len());
        let mut pending_separator = false;
        for c in trimmed.chars() {
            if matches!(c, '-' | '_' | '.') {
                pending_separator = true;
            } else {
                if pending_separator && !canonical.is_empty() {
                    canonical.push('-');
                }
                pending_separator = false;
                canonical.extend(c.to_lowercase());
            }
        }

        if canonical.is_empty() {
            anyhow::bail!("Package name must contain at least one alphanumeric character");
        }

        Ok(Self(canonical))
    }

    /// Reduces a raw requirement string to its bare package name.
    ///
    /// Requirement strings as found in package metadata carry extras, version
    /// specifiers and environment markers:
    /// `requests[socks] (>=2.25) ; python_version >= "3.8"`.
    /// Everything after the name is stripped before normalization.
    pub fn parse_requirement(requirement: &str) -> Result<Self> {
        let bare = requirement
            .split(';')
            .next()
            .unwrap_or("")
            .split('[')
            .next()
            .unwrap_or("")
            .trim();

        // The name ends at the first specifier, parenthesis or whitespace
        let end = bare
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '=' | '!' | '~' | '('))
            .unwrap_or(bare.len());

        Self::new(&bare[..end])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
