//! Registry type definitions for callout keyword mappings.

/// Presentation of one callout kind: the CSS class suffix and the title icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutStyle {
    /// Semantic class; rendered as `note-{css_class}`.
    pub css_class: &'static str,
    /// Icon shown before the title.
    pub icon: &'static str,
}

/// Mapping from a callout keyword to its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutMapping {
    /// Uppercase keyword as written in `[!KEYWORD]`.
    pub keyword: &'static str,
    /// Style applied to callouts with this keyword.
    pub style: CalloutStyle,
}

/// Immutable keyword table with a fallback for unknown keywords.
#[derive(Debug, Clone, Copy)]
pub struct CalloutRegistry {
    mappings: &'static [CalloutMapping],
    fallback: CalloutStyle,
}

impl CalloutRegistry {
    /// Create a registry over a fixed table.
    pub const fn new(mappings: &'static [CalloutMapping], fallback: CalloutStyle) -> Self {
        Self { mappings, fallback }
    }

    /// Get the style for a keyword, if the keyword is registered.
    ///
    /// Matching is exact and case-sensitive.
    pub fn get(&self, keyword: &str) -> Option<CalloutStyle> {
        self.mappings
            .iter()
            .find(|m| m.keyword == keyword)
            .map(|m| m.style)
    }

    /// Get the style for a keyword, falling back for unknown keywords.
    pub fn lookup(&self, keyword: &str) -> CalloutStyle {
        self.get(keyword).unwrap_or(self.fallback)
    }

    /// Check if a keyword is registered.
    pub fn is_known(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }
}
