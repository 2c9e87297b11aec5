use serde::Deserialize;

/// Options controlling what [`convert`](crate::convert) wraps around the body.
///
/// Deserializable from camelCase keys so a JS host can pass
/// `{ "frontMatter": false }`; missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Emit the Hexo front matter block.
    pub front_matter: bool,
    /// Emit the callout `<style>` block.
    pub style: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            front_matter: true,
            style: true,
        }
    }
}
