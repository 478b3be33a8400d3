use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish argument
/// mistakes from resolution or rendering failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - graph resolved and rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (lookup failure on the root, render error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for graph generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Invalid root package name: '{name}'\nReason: {reason}\n\n💡 Hint: Package names contain letters, digits, hyphens, underscores and dots, e.g. 'requests'")]
    InvalidRoot { name: String, reason: String },

    #[error("site-packages directory not found: {path}\n\n💡 Hint: {suggestion}")]
    SitePackagesNotFound { path: PathBuf, suggestion: String },

    #[error("No package specified\n\n💡 Hint: Pass a package name on the command line or set 'package' in pipgraph.config.yml")]
    MissingPackage,

    #[error("No output path specified for {format} output\n\n💡 Hint: The {format} format writes a binary artifact; pass a destination with --output")]
    MissingOutputPath { format: String },

    #[error("Graph rendering failed: {details}\n\n💡 Hint: {hint}")]
    RenderFailed { details: String, hint: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_equality() {
        assert_eq!(ExitCode::Success, ExitCode::Success);
        assert_ne!(ExitCode::Success, ExitCode::ApplicationError);
    }

    // GraphError tests
    #[test]
    fn test_invalid_root_display() {
        let error = GraphError::InvalidRoot {
            name: "".to_string(),
            reason: "Package name cannot be empty".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid root package name"));
        assert!(display.contains("Package name cannot be empty"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_site_packages_not_found_display() {
        let error = GraphError::SitePackagesNotFound {
            path: PathBuf::from("/missing/site-packages"),
            suggestion: "Pass --site-packages".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("site-packages directory not found"));
        assert!(display.contains("/missing/site-packages"));
        assert!(display.contains("Pass --site-packages"));
    }

    #[test]
    fn test_missing_package_display() {
        let display = format!("{}", GraphError::MissingPackage);
        assert!(display.contains("No package specified"));
        assert!(display.contains("pipgraph.config.yml"));
    }

    #[test]
    fn test_missing_output_path_display() {
        let error = GraphError::MissingOutputPath {
            format: "png".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("png"));
        assert!(display.contains("--output"));
    }

    #[test]
    fn test_render_failed_display() {
        let error = GraphError::RenderFailed {
            details: "dot exited with status 1".to_string(),
            hint: "Install Graphviz".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Graph rendering failed"));
        assert!(display.contains("dot exited with status 1"));
        assert!(display.contains("Install Graphviz"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = GraphError::FileWriteError {
            path: PathBuf::from("/test/output.dot"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.dot"));
        assert!(display.contains("Permission denied"));
    }
}
