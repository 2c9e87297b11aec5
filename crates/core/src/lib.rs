#![deny(missing_docs)]
//! noteport core: Obsidian syntax rewrites, anchor slugs, and callout scanning.
//!
//! Every function here is a pure `&str -> String` pass. Output-dialect details
//! (HTML for callouts, front matter, styling) live in `noteport-hexo`.

/// Callout block scanning.
pub mod callout;
/// Embed rewriting.
pub mod images;
/// Wiki-link rewriting.
pub mod links;
/// Heading anchor generation.
pub mod slug;

pub use callout::{
    Callout, CalloutHeader, CalloutLine, QUOTE_MARKER, parse_callout_header, rewrite_callouts,
};
pub use images::rewrite_image_embeds;
pub use links::{rewrite_anchor_links, rewrite_document_links};
pub use slug::anchor;

/// Run the link and embed rewrites in their required order.
///
/// Anchor links go first so the document-link rule never sees them; embeds go
/// last so they can repair the image targets the document-link rule touched.
pub fn rewrite_links_and_embeds(input: &str) -> String {
    let anchored = rewrite_anchor_links(input);
    let linked = rewrite_document_links(&anchored);
    rewrite_image_embeds(&linked)
}
