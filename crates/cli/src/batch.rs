//! Batch conversion with per-document failure isolation.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use chrono::NaiveDateTime;
use rayon::prelude::*;

use crate::convert::Converter;
use crate::error::VaultError;
use crate::reporter::Reporter;
use crate::vault::Vault;

/// Result for a single note in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// Source note.
    pub source: PathBuf,
    /// Error message (present on failure).
    pub error: Option<String>,
}

impl BatchItem {
    /// Whether this note converted successfully.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Statistics for batch processing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    /// Total number of notes processed.
    pub total: u32,
    /// Number of successfully converted notes.
    pub succeeded: u32,
    /// Number of failed conversions.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Maximum number of worker threads. Defaults to the rayon global pool.
    pub max_threads: Option<usize>,
}

/// Result of batch processing containing all results and statistics.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Individual results, in input order.
    pub results: Vec<BatchItem>,
    /// Processing statistics.
    pub stats: BatchStats,
}

impl BatchReport {
    /// `succeeded/total`, e.g. `3/4`.
    pub fn summary(&self) -> String {
        format!("{}/{}", self.stats.succeeded, self.stats.total)
    }

    /// Whether every note converted.
    pub fn all_succeeded(&self) -> bool {
        self.stats.failed == 0
    }

    /// Items that failed.
    pub fn failures(&self) -> impl Iterator<Item = &BatchItem> {
        self.results.iter().filter(|item| !item.succeeded())
    }
}

/// Convert every note in `sources`, continuing past failures.
///
/// Notes are converted in parallel; a failing note is logged, reported, and
/// recorded in its [`BatchItem`] without affecting the others. The reporter
/// receives a start message, one message per failure, and a final
/// `succeeded/total` summary.
pub fn convert_batch<V: Vault>(
    converter: &Converter<V>,
    sources: Vec<PathBuf>,
    timestamp: NaiveDateTime,
    options: &BatchOptions,
    reporter: &dyn Reporter,
) -> BatchReport {
    let start = Instant::now();
    let total = sources.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    reporter.report(&format!("Converting {total} file(s)..."));

    let process_source = |source: PathBuf| -> BatchItem {
        match converter.convert_file(&source, timestamp) {
            Ok(_) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchItem {
                    source,
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log::error!("conversion of {} failed: {e}", source.display());
                reporter.report_failure(&format!("❌ {}: {e}", source.display()));
                BatchItem {
                    source,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    // Configure thread pool if max_threads is specified
    let pool = options.max_threads.and_then(|threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| log::warn!("falling back to global thread pool: {err}"))
            .ok()
    });

    let results: Vec<BatchItem> = if let Some(pool) = pool {
        pool.install(|| sources.into_par_iter().map(process_source).collect())
    } else {
        sources.into_par_iter().map(process_source).collect()
    };

    let report = BatchReport {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
    };

    reporter.report(&format!(
        "✅ Batch conversion finished: {} file(s) converted",
        report.summary()
    ));
    report
}

/// Convert every note directly inside `dir`.
///
/// Returns an empty report (and says so) when the folder has no notes.
pub fn convert_folder<V: Vault>(
    converter: &Converter<V>,
    dir: &Path,
    timestamp: NaiveDateTime,
    options: &BatchOptions,
    reporter: &dyn Reporter,
) -> Result<BatchReport, VaultError> {
    let notes = converter.vault().list_notes(dir)?;
    Ok(convert_listed(converter, notes, dir, timestamp, options, reporter))
}

/// Convert every note in the same folder as `file`, `file` included.
pub fn convert_siblings<V: Vault>(
    converter: &Converter<V>,
    file: &Path,
    timestamp: NaiveDateTime,
    options: &BatchOptions,
    reporter: &dyn Reporter,
) -> Result<BatchReport, VaultError> {
    let notes = converter.vault().list_sibling_files(file)?;
    let dir = file.parent().unwrap_or(Path::new("."));
    Ok(convert_listed(converter, notes, dir, timestamp, options, reporter))
}

fn convert_listed<V: Vault>(
    converter: &Converter<V>,
    notes: Vec<PathBuf>,
    dir: &Path,
    timestamp: NaiveDateTime,
    options: &BatchOptions,
    reporter: &dyn Reporter,
) -> BatchReport {
    if notes.is_empty() {
        reporter.report(&format!("No markdown notes found in {}", dir.display()));
        return BatchReport {
            results: Vec::new(),
            stats: BatchStats {
                total: 0,
                succeeded: 0,
                failed: 0,
                processing_time_ms: 0.0,
            },
        };
    }
    convert_batch(converter, notes, timestamp, options, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryVault, RecordingReporter, timestamp};
    use pretty_assertions::assert_eq;

    fn converter(files: &[(&str, &str)]) -> Converter<MemoryVault> {
        Converter::new(MemoryVault::with_files(files))
    }

    #[test]
    fn counts_successes_and_failures() {
        let converter = converter(&[("a.md", "[[x]]"), ("c.md", "> [!NOTE]")]);
        let reporter = RecordingReporter::default();
        let sources = vec![
            PathBuf::from("a.md"),
            PathBuf::from("missing.md"),
            PathBuf::from("c.md"),
            PathBuf::from("d.txt"),
        ];

        let report = convert_batch(
            &converter,
            sources,
            timestamp(),
            &BatchOptions::default(),
            &reporter,
        );

        assert_eq!(report.stats.total, 4);
        assert_eq!(report.stats.succeeded, 2);
        assert_eq!(report.stats.failed, 2);
        assert_eq!(report.summary(), "2/4");
        assert!(!report.all_succeeded());

        let failed: Vec<&Path> = report.failures().map(|i| i.source.as_path()).collect();
        assert_eq!(failed, vec![Path::new("missing.md"), Path::new("d.txt")]);

        // Failures did not stop later notes
        assert!(converter.vault().file(Path::new("c_converted.md")).is_some());
        assert_eq!(reporter.failures().len(), 2);
        assert!(
            reporter
                .messages()
                .last()
                .is_some_and(|m| m.contains("2/4"))
        );
    }

    #[test]
    fn results_keep_input_order() {
        let files: Vec<(String, String)> =
            (0..16).map(|i| (format!("n{i:02}.md"), format!("{i}"))).collect();
        let refs: Vec<(&str, &str)> = files
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_str()))
            .collect();
        let converter = converter(&refs);
        let sources: Vec<PathBuf> = files.iter().map(|(p, _)| PathBuf::from(p)).collect();

        let report = convert_batch(
            &converter,
            sources.clone(),
            timestamp(),
            &BatchOptions { max_threads: Some(4) },
            &RecordingReporter::default(),
        );

        let order: Vec<PathBuf> = report.results.iter().map(|i| i.source.clone()).collect();
        assert_eq!(order, sources);
        assert!(report.all_succeeded());
    }

    #[test]
    fn folder_skips_converted_and_non_markdown() {
        let converter = converter(&[
            ("vault/a.md", "a"),
            ("vault/a_converted.md", "old"),
            ("vault/img.png", ""),
            ("vault/sub/b.md", "b"),
            ("other/c.md", "c"),
        ]);

        let report = convert_folder(
            &converter,
            Path::new("vault"),
            timestamp(),
            &BatchOptions::default(),
            &RecordingReporter::default(),
        )
        .unwrap();

        assert_eq!(report.summary(), "1/1");
        assert_eq!(report.results[0].source, PathBuf::from("vault/a.md"));
    }

    #[test]
    fn siblings_include_the_file_itself() {
        let converter = converter(&[("v/a.md", "a"), ("v/b.md", "b")]);

        let report = convert_siblings(
            &converter,
            Path::new("v/a.md"),
            timestamp(),
            &BatchOptions::default(),
            &RecordingReporter::default(),
        )
        .unwrap();

        let sources: Vec<&Path> = report.results.iter().map(|i| i.source.as_path()).collect();
        assert_eq!(sources, vec![Path::new("v/a.md"), Path::new("v/b.md")]);
    }

    #[test]
    fn empty_folder_is_reported() {
        let converter = converter(&[("v/readme.txt", "")]);
        let reporter = RecordingReporter::default();

        let report = convert_folder(
            &converter,
            Path::new("v"),
            timestamp(),
            &BatchOptions::default(),
            &reporter,
        )
        .unwrap();

        assert_eq!(report.stats.total, 0);
        assert_eq!(reporter.messages(), vec!["No markdown notes found in v".to_owned()]);
    }
}
