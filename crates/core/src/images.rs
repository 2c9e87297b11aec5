//! Embed rewriting (`![[image.png]]` to `![image.png](image.png)`).

use std::sync::LazyLock;

use regex::Regex;

static EMBED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").unwrap());

/// `.md` appended to an image target by the document-link rule.
static IMAGE_MD_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(png|jpg|jpeg|gif|webp)\.md\)").unwrap());

/// Rewrites embeds into markdown image syntax and repairs image targets that
/// the document-link rule already turned into `.md` links.
///
/// Expects to run after [`rewrite_document_links`](crate::links::rewrite_document_links),
/// which consumes the `[[...]]` part of an embed first and leaves
/// `![diagram.png](diagram.png.md)`. The second pass strips that suffix for
/// known image extensions. Embeds of other files keep their `.md` target.
///
/// # Examples
///
/// ```
/// use noteport_core::images::rewrite_image_embeds;
/// use noteport_core::links::rewrite_document_links;
///
/// let linked = rewrite_document_links("![[diagram.png]]");
/// assert_eq!(rewrite_image_embeds(&linked), "![diagram.png](diagram.png)");
/// ```
pub fn rewrite_image_embeds(input: &str) -> String {
    let embedded = EMBED.replace_all(input, "![${1}](${1})");
    IMAGE_MD_SUFFIX
        .replace_all(&embedded, ".${1})")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{rewrite_anchor_links, rewrite_document_links};
    use pretty_assertions::assert_eq;

    fn link_then_embed(input: &str) -> String {
        rewrite_image_embeds(&rewrite_document_links(&rewrite_anchor_links(input)))
    }

    #[test]
    fn bare_embed() {
        assert_eq!(
            rewrite_image_embeds("![[diagram.png]]"),
            "![diagram.png](diagram.png)"
        );
    }

    #[test]
    fn embed_after_link_rewrite() {
        assert_eq!(
            link_then_embed("![[diagram.png]]"),
            "![diagram.png](diagram.png)"
        );
    }

    #[test]
    fn every_known_extension_repaired() {
        for ext in ["png", "jpg", "jpeg", "gif", "webp"] {
            let input = format!("![[shot.{ext}]]");
            assert_eq!(
                link_then_embed(&input),
                format!("![shot.{ext}](shot.{ext})")
            );
        }
    }

    #[test]
    fn unknown_extension_keeps_md_target() {
        assert_eq!(
            link_then_embed("![[vector.svg]]"),
            "![vector.svg](vector.svg.md)"
        );
        assert_eq!(link_then_embed("![[Other Note]]"), "![Other Note](Other Note.md)");
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(link_then_embed("![[SHOT.PNG]]"), "![SHOT.PNG](SHOT.PNG.md)");
    }

    #[test]
    fn sized_embed_uses_size_as_alt() {
        assert_eq!(link_then_embed("![[photo.jpg|300]]"), "![300](photo.jpg)");
    }

    #[test]
    fn plain_markdown_image_untouched() {
        let input = "![alt](img.png) and [doc](notes.md)";
        assert_eq!(link_then_embed(input), input);
    }
}
