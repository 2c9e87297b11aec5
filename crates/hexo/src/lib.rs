#![deny(missing_docs)]
//! noteport Hexo engine: callout rendering, registry, front matter, and assembly.

/// Artifact naming rules.
pub mod artifact;
/// Conversion pipeline and document assembly.
pub mod convert;
/// Hexo front matter.
pub mod frontmatter;
/// Conversion options.
pub mod options;
/// Callout keyword registry.
pub mod registry;
/// Callout HTML rendering.
pub mod render;
/// Static callout style sheet.
pub mod style;

pub use artifact::{CONVERTED_MARKER, converted_file_name, is_conversion_candidate};
pub use convert::{assemble, convert, convert_body, convert_body_with};
pub use frontmatter::{DATE_FORMAT, FrontMatter};
pub use options::ConvertOptions;
pub use registry::{CalloutRegistry, CalloutStyle, default_registry};
pub use render::render_callout;
pub use style::CALLOUT_STYLESHEET;
