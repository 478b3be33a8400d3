use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for a single metadata file (10 MB)
/// Installed-package METADATA files are a few kilobytes; anything near this
/// limit is not a file we should be loading into memory.
pub const MAX_METADATA_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` so the symlink itself is
/// checked, not the target it points to.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Security
/// Prevents resource exhaustion via oversized files placed in a scanned
/// site-packages directory.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a file after validating it is a regular file within the size limit.
pub fn safe_read_to_string(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;
    validate_file_size(metadata.len(), path, MAX_METADATA_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}
