//! Client-side gate for files submitted to the audit service.
//!
//! The extension check is advisory: it saves a round trip for obviously wrong
//! files, the service performs its own validation.

use log::debug;
use std::fs;
use std::path::Path;

use crate::errors::{InputError, VerifyflowError};

/// A file ready to be sent to the audit service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Wraps already-loaded content after running the gate.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, allowed: &[String]) -> Result<Self, InputError> {
        let file_name = file_name.into();
        check_extension(&file_name, allowed)?;
        if bytes.is_empty() {
            return Err(InputError::EmptyFile { file_name });
        }
        Ok(Self { file_name, bytes })
    }

    /// Reads a file from disk. The extension is checked before the file is read.
    pub fn from_path(path: &Path, allowed: &[String]) -> Result<Self, VerifyflowError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or(InputError::NoFileSelected)?;
        check_extension(&file_name, allowed)?;
        let bytes = fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::new(file_name, bytes, allowed)?)
    }
}

/// Rejects file names whose extension is not in `allowed` (case-insensitive,
/// entries with or without the leading dot).
pub fn check_extension(file_name: &str, allowed: &[String]) -> Result<(), InputError> {
    let extension = Path::new(file_name.trim())
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    let accepted = extension.as_deref().map_or(false, |ext| {
        allowed.iter().any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(ext))
    });
    if accepted {
        Ok(())
    } else {
        Err(InputError::UnsupportedExtension {
            file_name: file_name.to_string(),
            allowed: describe_allowed(allowed),
        })
    }
}

fn describe_allowed(allowed: &[String]) -> String {
    allowed
        .iter()
        .map(|a| format!(".{}", a.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join("/")
}
