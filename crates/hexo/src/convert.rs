use chrono::NaiveDateTime;
use noteport_core::{rewrite_callouts, rewrite_links_and_embeds};

use crate::frontmatter::FrontMatter;
use crate::options::ConvertOptions;
use crate::registry::{CalloutRegistry, default_registry};
use crate::render::render_callout;
use crate::style::CALLOUT_STYLESHEET;

/// Convert an Obsidian note into a Hexo post.
///
/// Runs the rewrite stages in order (anchor links, document links, embeds,
/// callouts) and wraps the result with [`assemble`]. Total over any input:
/// syntax that does not match a rule is passed through unchanged.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use noteport_hexo::{ConvertOptions, convert};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2)
///     .and_then(|d| d.and_hms_opt(3, 4, 5))
///     .unwrap();
/// let options = ConvertOptions { front_matter: true, style: false };
///
/// let post = convert("Notes", "See [[Other]].", date, &options);
/// assert!(post.starts_with("---\ntitle: Notes\ndate: 2024-01-02 03:04:05\n"));
/// assert!(post.ends_with("\n\nSee [Other](Other.md)."));
/// ```
pub fn convert(
    title: &str,
    raw: &str,
    timestamp: NaiveDateTime,
    options: &ConvertOptions,
) -> String {
    let body = convert_body(raw);
    assemble(title, timestamp, &body, options)
}

/// Apply the rewrite stages without front matter or styling.
pub fn convert_body(raw: &str) -> String {
    convert_body_with(raw, default_registry())
}

/// Apply the rewrite stages, styling callouts from `registry`.
pub fn convert_body_with(raw: &str, registry: &CalloutRegistry) -> String {
    let linked = rewrite_links_and_embeds(raw);
    let (body, callouts) = rewrite_callouts(&linked, |callout| render_callout(callout, registry));
    log::debug!("converted body: {callouts} callout(s), {} bytes", body.len());
    body
}

/// Prepend the front matter and style block to a converted body.
///
/// Each enabled header part is followed by one blank line:
/// `front matter + "\n\n" + style + "\n\n" + body`.
pub fn assemble(
    title: &str,
    timestamp: NaiveDateTime,
    body: &str,
    options: &ConvertOptions,
) -> String {
    let mut out = String::with_capacity(body.len() + CALLOUT_STYLESHEET.len() + 128);

    if options.front_matter {
        out.push_str(&FrontMatter::new(title, timestamp).to_string());
        out.push_str("\n\n");
    }
    if options.style {
        out.push_str(CALLOUT_STYLESHEET);
        out.push_str("\n\n");
    }
    out.push_str(body);
    out
}
