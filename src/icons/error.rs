use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating icons
///
/// Only `SourceNotFound` is a recognized condition. Everything else is
/// an unclassified fault that aborts the run.
#[derive(Debug, Error)]
pub enum IconError {
    /// The master image does not exist at the configured path
    #[error("Could not find {}. Check your folder names!", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Decoding the source or encoding an icon failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IconError {
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, IconError::SourceNotFound { .. })
    }
}
