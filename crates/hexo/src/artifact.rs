//! Naming rules for converted artifacts.
//!
//! A note `Guide.md` converts to `Guide_converted.md` in the same folder.
//! Anything already carrying the marker is skipped by batch conversion so
//! re-running over a folder never converts its own output.

use std::ffi::OsStr;
use std::path::Path;

/// Marker inserted before the extension of converted files.
pub const CONVERTED_MARKER: &str = "_converted";

/// Extension of convertible notes and of converted artifacts.
pub const MARKDOWN_EXTENSION: &str = "md";

/// File name of the artifact for a note with the given base name.
///
/// # Examples
///
/// ```
/// use noteport_hexo::artifact::converted_file_name;
///
/// assert_eq!(converted_file_name("Guide"), "Guide_converted.md");
/// ```
pub fn converted_file_name(base_name: &str) -> String {
    format!("{base_name}{CONVERTED_MARKER}.{MARKDOWN_EXTENSION}")
}

/// Check if a file name is a markdown note that batch conversion should pick up.
///
/// The extension must be exactly `md`, and names containing the converted
/// marker anywhere are excluded.
pub fn is_conversion_candidate(file_name: &str) -> bool {
    Path::new(file_name).extension() == Some(OsStr::new(MARKDOWN_EXTENSION))
        && !file_name.contains(CONVERTED_MARKER)
}
