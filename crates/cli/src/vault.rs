//! Host file access.
//!
//! The conversion pipeline never touches the file system; everything it reads
//! or writes goes through a [`Vault`]. [`FsVault`] is the disk-backed
//! implementation used by the binary.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use noteport_hexo::is_conversion_candidate;
use tempfile::NamedTempFile;

use crate::error::VaultError;

/// File operations the converter needs from its host.
pub trait Vault: Send + Sync {
    /// Read a note as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, VaultError>;

    /// Write `content` to `path`, replacing any existing file.
    ///
    /// Implementations must not leave a partially written file behind.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), VaultError>;

    /// Check if a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Remove the file at `path`.
    fn delete(&self, path: &Path) -> Result<(), VaultError>;

    /// Convertible notes directly inside `dir`, sorted by path.
    ///
    /// Only `.md` files are returned; names containing the converted marker
    /// are skipped.
    fn list_notes(&self, dir: &Path) -> Result<Vec<PathBuf>, VaultError>;

    /// Convertible notes in the same folder as `path`, including `path` itself.
    fn list_sibling_files(&self, path: &Path) -> Result<Vec<PathBuf>, VaultError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.list_notes(dir)
    }
}

/// Mode given to written artifacts, matching a plain create under umask 022.
#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o644;

/// Temp files start out owner-only; widen them before they replace the target.
#[cfg(unix)]
fn publish_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(ARTIFACT_MODE))
}

#[cfg(not(unix))]
fn publish_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

/// [`Vault`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsVault;

impl FsVault {
    /// Creates a file-system vault.
    pub fn new() -> Self {
        Self
    }
}

impl Vault for FsVault {
    fn read_text(&self, path: &Path) -> Result<String, VaultError> {
        fs::read_to_string(path).map_err(|source| VaultError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), VaultError> {
        let write_err = |source: io::Error| VaultError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Stage next to the target so the final rename stays on one file system.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
        staged.write_all(content.as_bytes()).map_err(write_err)?;
        staged.flush().map_err(write_err)?;
        publish_permissions(staged.as_file()).map_err(write_err)?;
        staged.persist(path).map_err(|err| write_err(err.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn delete(&self, path: &Path) -> Result<(), VaultError> {
        fs::remove_file(path).map_err(|source| VaultError::Delete {
            path: path.to_path_buf(),
            source,
        })
    }

    fn list_notes(&self, dir: &Path) -> Result<Vec<PathBuf>, VaultError> {
        let list_err = |source: io::Error| VaultError::List {
            path: dir.to_path_buf(),
            source,
        };

        let mut notes = Vec::new();
        for entry in fs::read_dir(dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            if !entry.file_type().map_err(list_err)?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if name.to_str().is_some_and(is_conversion_candidate) {
                notes.push(entry.path());
            }
        }
        notes.sort();
        Ok(notes)
    }
}
