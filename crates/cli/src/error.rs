use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`Vault`](crate::vault::Vault) implementation.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Reading a note failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Note that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing an artifact failed; nothing was left at `path`.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Artifact that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Removing a stale artifact failed.
    #[error("failed to delete {}: {source}", path.display())]
    Delete {
        /// Artifact that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Listing a folder failed.
    #[error("failed to list {}: {source}", path.display())]
    List {
        /// Folder that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Errors that can occur while converting a single note.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Host I/O failed.
    #[error(transparent)]
    Vault(#[from] VaultError),
    /// The source is not a `.md` note.
    #[error("not a markdown note: {}", .0.display())]
    NotMarkdown(PathBuf),
    /// The source path has no file name to derive a title from.
    #[error("no file name in {}", .0.display())]
    MissingFileName(PathBuf),
}
