#![deny(missing_docs)]
//! noteport host: converts notes on disk and writes Hexo-ready artifacts.
//!
//! The pure conversion lives in `noteport-hexo`; this crate owns file access
//! ([`vault`]), user-facing reporting ([`reporter`]), and batch runs
//! ([`batch`]).

/// Batch conversion.
pub mod batch;
/// Single-note conversion.
pub mod convert;
/// Host error types.
pub mod error;
/// Progress reporting.
pub mod reporter;
/// File access abstraction.
pub mod vault;

#[cfg(test)]
mod testing;

pub use batch::{
    BatchItem, BatchOptions, BatchReport, BatchStats, convert_batch, convert_folder,
    convert_siblings,
};
pub use convert::Converter;
pub use error::{ConvertError, VaultError};
pub use reporter::{ConsoleReporter, LogReporter, Reporter};
pub use vault::{FsVault, Vault};
