//! Default callout table for Obsidian's built-in callout keywords.
//!
//! Keywords without an entry (`> [!CUSTOM]`) render with [`FALLBACK_STYLE`].

use super::types::{CalloutMapping, CalloutRegistry, CalloutStyle};

/// Style for keywords missing from the table.
pub const FALLBACK_STYLE: CalloutStyle = CalloutStyle {
    css_class: "info",
    icon: "📝",
};

const fn mapping(keyword: &'static str, css_class: &'static str, icon: &'static str) -> CalloutMapping {
    CalloutMapping {
        keyword,
        style: CalloutStyle { css_class, icon },
    }
}

static OBSIDIAN_CALLOUTS: [CalloutMapping; 7] = [
    mapping("NOTE", "info", "📝"),
    mapping("TIP", "tip", "💡"),
    mapping("WARNING", "warning", "⚠️"),
    mapping("DANGER", "danger", "🚨"),
    mapping("INFO", "info", "ℹ️"),
    mapping("EXAMPLE", "example", "📋"),
    mapping("QUOTE", "quote", "💬"),
];

static DEFAULT_REGISTRY: CalloutRegistry = CalloutRegistry::new(&OBSIDIAN_CALLOUTS, FALLBACK_STYLE);

/// Returns the built-in callout registry.
///
/// # Example
///
/// ```
/// use noteport_hexo::registry::default_registry;
///
/// let registry = default_registry();
/// assert_eq!(registry.lookup("WARNING").css_class, "warning");
/// assert_eq!(registry.lookup("CUSTOM").icon, "📝");
/// ```
pub fn default_registry() -> &'static CalloutRegistry {
    &DEFAULT_REGISTRY
}
