use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Validate an output path before any generation work happens.
///
/// The extension must match the chosen format, the file must not
/// already exist unless overwriting was requested, and the parent
/// directory must be a writable directory.
pub fn validate_output_path(path: &Path, expected_ext: &str, force: bool) -> Result<(), CliError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            CliError::Validation(format!(
                "output '{}' has no file extension, expected '.{expected_ext}'",
                path.display()
            ))
        })?;
    if !ext.eq_ignore_ascii_case(expected_ext) {
        return Err(CliError::Validation(format!(
            "output extension '.{ext}' does not match the '{expected_ext}' format"
        )));
    }

    if path.exists() && !force {
        return Err(CliError::Validation(format!(
            "output '{}' already exists, pass --force to overwrite",
            path.display()
        )));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let metadata = std::fs::metadata(&parent).map_err(|_| {
        CliError::Validation(format!(
            "output directory '{}' does not exist",
            parent.display()
        ))
    })?;
    if !metadata.is_dir() {
        return Err(CliError::Validation(format!(
            "output parent '{}' is not a directory",
            parent.display()
        )));
    }
    if metadata.permissions().readonly() {
        return Err(CliError::Validation(format!(
            "output directory '{}' is not writable",
            parent.display()
        )));
    }

    Ok(())
}
