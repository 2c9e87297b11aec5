/// First code point of the CJK Unified Ideographs block.
const CJK_START: char = '\u{4e00}';
/// Last code point kept by [`anchor`] (end of the BMP ideograph block).
const CJK_END: char = '\u{9fff}';

/// Derives the Hexo heading anchor for `text`.
///
/// Matches the slug rule Hexo themes apply to rendered headings:
/// 1. Each run of whitespace becomes a single `-`
/// 2. Anything other than ASCII word characters, `-`, or CJK ideographs is dropped
/// 3. ASCII letters are lowercased
///
/// Unlike github-style slugs there is no empty fallback and no deduplication; an
/// empty heading yields an empty anchor.
///
/// # Examples
///
/// ```
/// use noteport_core::slug::anchor;
///
/// assert_eq!(anchor("Setup Guide"), "setup-guide");
/// assert_eq!(anchor("安装 Guide"), "安装-guide");
/// assert_eq!(anchor("???"), "");
/// ```
pub fn anchor(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars() {
        if is_slug_whitespace(ch) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if is_anchor_char(ch) {
            slug.push(ch.to_ascii_lowercase());
        }
        // Punctuation, emoji, and non-CJK scripts are silently dropped
    }

    slug
}

/// Whitespace as Hexo's slugger sees it: the ECMAScript `\s` class.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
fn is_slug_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn is_anchor_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || (CJK_START..=CJK_END).contains(&ch)
}
