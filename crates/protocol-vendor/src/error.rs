use std::path::PathBuf;

use crate::fetch::FetchError;

/// Errors that abort a vendoring run.
///
/// None of these are recovered locally. Side effects that happened before
/// the failure (deleted or already written files) are left in place.
#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    #[error("cannot list directory {}: {source}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete {}: {source}", path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download of {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl VendorError {
    pub(crate) fn transport(url: &str, err: FetchError) -> Self {
        match err {
            FetchError::Transport(message) => Self::Transport {
                url: url.to_owned(),
                message,
            },
        }
    }
}
