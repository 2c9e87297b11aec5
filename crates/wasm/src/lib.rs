use chrono::{DateTime, NaiveDateTime};
use noteport_hexo::ConvertOptions;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Options
// ============================================================================

/// Reads `ConvertOptions` from a JS object such as `{ frontMatter: false }`.
/// `undefined` and `null` select the defaults.
fn parse_options(options: JsValue) -> Result<ConvertOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ConvertOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

/// Converts a JS epoch-milliseconds value (`Date.now()`) to a UTC date-time.
fn timestamp_from_millis(millis: f64) -> Option<NaiveDateTime> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
}

// ============================================================================
// Convert API
// ============================================================================

/// Converts an Obsidian note into a Hexo post.
///
/// # Arguments
///
/// * `title` - Post title, normally the note's base name
/// * `content` - Raw note text
/// * `timestamp_ms` - Post date as epoch milliseconds, written in UTC
/// * `options` - Optional `{ frontMatter?: boolean, style?: boolean }`
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { convert, converted_file_name } from './noteport_wasm';
///
/// const post = convert(file.basename, await vault.read(file), Date.now());
/// await vault.create(converted_file_name(file.basename), post);
/// ```
#[wasm_bindgen]
pub fn convert(
    title: &str,
    content: &str,
    timestamp_ms: f64,
    options: JsValue,
) -> Result<String, JsError> {
    let options = parse_options(options)?;
    let timestamp = timestamp_from_millis(timestamp_ms)
        .ok_or_else(|| JsError::new(&format!("Invalid timestamp: {}", timestamp_ms)))?;
    Ok(noteport_hexo::convert(title, content, timestamp, &options))
}

/// Applies the link, embed, and callout rewrites without front matter or style.
#[wasm_bindgen]
pub fn convert_body(content: &str) -> String {
    noteport_hexo::convert_body(content)
}

/// Returns the Hexo anchor for a heading (`"Setup Guide"` -> `"setup-guide"`).
#[wasm_bindgen]
pub fn heading_anchor(text: &str) -> String {
    noteport_core::anchor(text)
}

// ============================================================================
// Artifact naming
// ============================================================================

/// File name for the converted artifact of a note (`Guide` -> `Guide_converted.md`).
#[wasm_bindgen]
pub fn converted_file_name(base_name: &str) -> String {
    noteport_hexo::converted_file_name(base_name)
}

/// Whether a file should be picked up by folder conversion.
#[wasm_bindgen]
pub fn is_conversion_candidate(file_name: &str) -> bool {
    noteport_hexo::is_conversion_candidate(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_to_utc() {
        let ts = timestamp_from_millis(1_717_243_200_000.0).unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-06-01 12:00:00");
    }

    #[test]
    fn fractional_millis_truncate() {
        let ts = timestamp_from_millis(1_717_243_200_999.9).unwrap();
        assert_eq!(ts.format("%H:%M:%S").to_string(), "12:00:00");
    }

    #[test]
    fn non_finite_millis_rejected() {
        assert!(timestamp_from_millis(f64::NAN).is_none());
        assert!(timestamp_from_millis(f64::INFINITY).is_none());
    }
}
