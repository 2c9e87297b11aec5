//! Wiki-link rewriting.
//!
//! Obsidian references headings and notes with double-bracket syntax. Hexo
//! only understands standard markdown links, so both forms are rewritten:
//!
//! ```text
//! [[#Heading|Display]]  ->  [Display](#heading)
//! [[#Heading]]          ->  [Heading](#heading)
//! [[Doc|Display]]       ->  [Display](Doc.md)
//! [[Doc]]               ->  [Doc](Doc.md)
//! ```
//!
//! Anchor links must be rewritten first: the document-link patterns only
//! exclude `#` from the target, so once anchor references are gone nothing
//! heading-shaped is left for them to claim.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::slug::anchor;

static ANCHOR_WITH_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[#([^|\]]+)\|([^\]]+)\]\]").unwrap());

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[#([^\]]+)\]\]").unwrap());

static DOCUMENT_WITH_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^#|\]]+)\|([^\]]+)\]\]").unwrap());

static DOCUMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^#\]]+)\]\]").unwrap());

/// Rewrites same-document heading references into markdown anchor links.
///
/// The display text is kept verbatim; only the fragment goes through
/// [`anchor`].
///
/// # Examples
///
/// ```
/// use noteport_core::links::rewrite_anchor_links;
///
/// assert_eq!(
///     rewrite_anchor_links("See [[#Setup Guide|setup]]."),
///     "See [setup](#setup-guide)."
/// );
/// ```
pub fn rewrite_anchor_links(input: &str) -> String {
    let with_text = ANCHOR_WITH_TEXT.replace_all(input, |caps: &Captures<'_>| {
        format!("[{}](#{})", &caps[2], anchor(&caps[1]))
    });

    ANCHOR
        .replace_all(&with_text, |caps: &Captures<'_>| {
            format!("[{}](#{})", &caps[1], anchor(&caps[1]))
        })
        .into_owned()
}

/// Rewrites references to other notes into relative `.md` links.
///
/// Targets are not slugified or percent-encoded: `[[Other Note]]` becomes
/// `[Other Note](Other Note.md)`, matching how Hexo resolves post assets by
/// file name.
pub fn rewrite_document_links(input: &str) -> String {
    let with_text = DOCUMENT_WITH_TEXT.replace_all(input, "[${2}](${1}.md)");
    DOCUMENT
        .replace_all(&with_text, "[${1}](${1}.md)")
        .into_owned()
}
