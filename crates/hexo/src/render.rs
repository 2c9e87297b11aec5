//! Callout HTML rendering.

use std::fmt::Write as _;

use noteport_core::{Callout, CalloutLine};

use crate::registry::CalloutRegistry;

/// Inline style for images inside a callout body.
pub const CALLOUT_IMAGE_STYLE: &str =
    "max-width: 100%; height: auto; border-radius: 4px; margin: 0.5em 0;";

/// Render a collected callout as a Hexo note box.
///
/// Produces:
/// ```text
/// <div class="note note-warning">
///   <div class="note-title">
///     <span class="note-icon">⚠️</span>
///     <span class="note-text">Careful</span>
///   </div>
///   <div class="note-content">
///     <p>This is risky.</p>
///   </div>
/// </div>
/// ```
///
/// Title, text, and image attributes are inserted verbatim. Callers converting
/// untrusted notes must sanitize the result themselves.
pub fn render_callout(callout: &Callout, registry: &CalloutRegistry) -> String {
    if !registry.is_known(&callout.kind) {
        log::debug!("unknown callout keyword {}, using fallback style", callout.kind);
    }
    let style = registry.lookup(&callout.kind);
    let mut html = String::new();

    writeln!(html, "<div class=\"note note-{}\">", style.css_class).ok();
    html.push_str("  <div class=\"note-title\">\n");
    writeln!(html, "    <span class=\"note-icon\">{}</span>", style.icon).ok();
    writeln!(html, "    <span class=\"note-text\">{}</span>", callout.title).ok();
    html.push_str("  </div>\n");
    html.push_str("  <div class=\"note-content\">\n");

    for line in callout.content() {
        match line {
            CalloutLine::Image { alt, src } => {
                writeln!(
                    html,
                    "    <img src=\"{src}\" alt=\"{alt}\" style=\"{CALLOUT_IMAGE_STYLE}\" />"
                )
                .ok();
            }
            CalloutLine::Text(text) => {
                writeln!(html, "    <p>{text}</p>").ok();
            }
        }
    }

    html.push_str("  </div>\n");
    html.push_str("</div>");
    html
}
