//! In-memory doubles for unit tests.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};
use noteport_hexo::is_conversion_candidate;

use crate::error::VaultError;
use crate::reporter::Reporter;
use crate::vault::Vault;

pub(crate) fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

/// Vault over a path-to-content map that records every mutating call.
#[derive(Debug, Default)]
pub(crate) struct MemoryVault {
    files: Mutex<BTreeMap<PathBuf, String>>,
    operations: Mutex<Vec<String>>,
}

impl MemoryVault {
    pub(crate) fn with_files(files: &[(&str, &str)]) -> Self {
        let files: BTreeMap<PathBuf, String> = files
            .iter()
            .map(|(path, content)| (PathBuf::from(path), (*content).to_owned()))
            .collect();
        Self {
            files: Mutex::new(files),
            operations: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn file(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub(crate) fn operations(&self) -> Vec<String> {
        self.operations.lock().unwrap().clone()
    }

    fn record(&self, op: &str, path: &Path) {
        self.operations
            .lock()
            .unwrap()
            .push(format!("{op} {}", path.display()));
    }
}

impl Vault for MemoryVault {
    fn read_text(&self, path: &Path) -> Result<String, VaultError> {
        self.record("read", path);
        self.file(path).ok_or_else(|| VaultError::Read {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), VaultError> {
        self.record("write", path);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn delete(&self, path: &Path) -> Result<(), VaultError> {
        self.record("delete", path);
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn list_notes(&self, dir: &Path) -> Result<Vec<PathBuf>, VaultError> {
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(is_conversion_candidate)
            })
            .cloned()
            .collect())
    }
}

/// Reporter that keeps every message for later assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    messages: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub(crate) fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }

    fn report_failure(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_owned());
    }
}
