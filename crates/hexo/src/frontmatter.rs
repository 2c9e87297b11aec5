use std::fmt;

use chrono::NaiveDateTime;

/// `strftime` pattern for the `date:` field (`YYYY-MM-DD HH:MM:SS`).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hexo post metadata prepended to a converted note.
///
/// Only `title` and `date` carry data; `tags` and `categories` are always
/// emitted empty so the post can be classified inside Hexo afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Post title, usually the source note's base name.
    pub title: &'a str,
    /// Post date.
    pub date: NaiveDateTime,
}

impl<'a> FrontMatter<'a> {
    /// Create front matter for a note.
    pub fn new(title: &'a str, date: NaiveDateTime) -> Self {
        Self { title, date }
    }
}

/// Serializes the fixed five-field block between `---` delimiters. The title
/// is written unquoted.
impl fmt::Display for FrontMatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "date: {}", self.date.format(DATE_FORMAT))?;
        writeln!(f, "tags: []")?;
        writeln!(f, "categories: []")?;
        write!(f, "---")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 3))
            .expect("valid date")
    }

    #[test]
    fn renders_fixed_fields() {
        let fm = FrontMatter::new("CQU Campus Network", date());
        assert_eq!(
            fm.to_string(),
            "---\ntitle: CQU Campus Network\ndate: 2024-03-09 07:05:03\ntags: []\ncategories: []\n---"
        );
    }

    #[test]
    fn title_is_not_quoted() {
        let fm = FrontMatter::new("校园网: 解决方案", date());
        assert!(fm.to_string().contains("\ntitle: 校园网: 解决方案\n"));
    }

    #[test]
    fn empty_title() {
        let fm = FrontMatter::new("", date());
        assert!(fm.to_string().starts_with("---\ntitle: \ndate: "));
    }
}
