use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use noteport_hexo::artifact::MARKDOWN_EXTENSION;
use noteport_hexo::{ConvertOptions, convert, converted_file_name};

use crate::error::ConvertError;
use crate::reporter::Reporter;
use crate::vault::Vault;

/// Converts notes stored in a [`Vault`] and writes the artifacts back to it.
#[derive(Debug, Clone)]
pub struct Converter<V> {
    vault: V,
    options: ConvertOptions,
    output_dir: Option<PathBuf>,
}

impl<V: Vault> Converter<V> {
    /// Create a converter with default options, writing next to each source.
    pub fn new(vault: V) -> Self {
        Self {
            vault,
            options: ConvertOptions::default(),
            output_dir: None,
        }
    }

    /// Set the conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Write artifacts into `dir` instead of next to their sources.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// The underlying vault.
    pub fn vault(&self) -> &V {
        &self.vault
    }

    /// Where the artifact for `source` is written.
    pub fn artifact_path(&self, source: &Path) -> Result<PathBuf, ConvertError> {
        let name = converted_file_name(&note_title(source)?);
        let dir = match &self.output_dir {
            Some(dir) => dir.as_path(),
            None => source.parent().unwrap_or(Path::new("")),
        };
        Ok(dir.join(name))
    }

    /// Convert one note and write its artifact.
    ///
    /// Steps: read the source, convert it with the note's base name as title,
    /// remove a stale artifact if one exists, write the new one. Returns the
    /// artifact path.
    pub fn convert_file(
        &self,
        source: &Path,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, ConvertError> {
        if source.extension().and_then(|ext| ext.to_str()) != Some(MARKDOWN_EXTENSION) {
            return Err(ConvertError::NotMarkdown(source.to_path_buf()));
        }
        let title = note_title(source)?;
        let target = self.artifact_path(source)?;

        let raw = self.vault.read_text(source)?;
        let converted = convert(&title, &raw, timestamp, &self.options);

        if self.vault.exists(&target) {
            log::debug!("removing stale artifact {}", target.display());
            self.vault.delete(&target)?;
        }
        self.vault.write_text(&target, &converted)?;

        log::info!("converted {} -> {}", source.display(), target.display());
        Ok(target)
    }

    /// Convert one note, reporting the outcome instead of returning an error.
    ///
    /// Failures are logged and reported; the artifact path is returned on success.
    pub fn convert_and_report(
        &self,
        source: &Path,
        timestamp: NaiveDateTime,
        reporter: &dyn Reporter,
    ) -> Option<PathBuf> {
        match self.convert_file(source, timestamp) {
            Ok(target) => {
                let name = target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                reporter.report(&format!("✅ Converted: {name}"));
                Some(target)
            }
            Err(err) => {
                log::error!("conversion of {} failed: {err}", source.display());
                reporter.report_failure(&format!("❌ Conversion failed: {err}"));
                None
            }
        }
    }
}

/// Post title for a note: its file name without the extension.
fn note_title(source: &Path) -> Result<String, ConvertError> {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| ConvertError::MissingFileName(source.to_path_buf()))
}
