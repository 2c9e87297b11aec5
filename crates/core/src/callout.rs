//! Callout block scanning.
//!
//! Obsidian callouts are blockquotes whose first line carries a type keyword:
//!
//! ```text
//! > [!WARNING] Careful
//! > This is risky.
//! > ![alt](img.png)
//! ```
//!
//! [`rewrite_callouts`] walks the document line by line, collects each block
//! into a [`Callout`] and replaces the whole block with whatever the caller's
//! renderer returns. Everything else passes through untouched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Prefix shared by every line of a callout block.
pub const QUOTE_MARKER: char = '>';

static INLINE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)$").unwrap());

/// Parsed representation of a callout header line (e.g. `> [!TIP] Title`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalloutHeader<'a> {
    /// Uppercase type keyword between `[!` and `]`.
    pub kind: &'a str,
    /// Trimmed text after the keyword; may be empty.
    pub title: &'a str,
}

/// Parse a callout header line.
///
/// The line must start with `>` (no indentation), followed by optional
/// whitespace, `[!`, one or more ASCII uppercase letters and `]`. Any text
/// after that is the title. Lowercase or mixed-case keywords are not headers.
///
/// # Examples
///
/// ```
/// use noteport_core::callout::parse_callout_header;
///
/// let header = parse_callout_header("> [!TIP] Use the CLI").unwrap();
/// assert_eq!(header.kind, "TIP");
/// assert_eq!(header.title, "Use the CLI");
///
/// assert!(parse_callout_header("> [!tip]").is_none());
/// assert!(parse_callout_header("> plain quote").is_none());
/// ```
pub fn parse_callout_header(line: &str) -> Option<CalloutHeader<'_>> {
    let rest = line.strip_prefix(QUOTE_MARKER)?.trim_start();
    let rest = rest.strip_prefix("[!")?;

    let kind_len = rest.bytes().take_while(u8::is_ascii_uppercase).count();
    if kind_len == 0 {
        return None;
    }
    let (kind, rest) = rest.split_at(kind_len);
    let rest = rest.strip_prefix(']')?;

    Some(CalloutHeader {
        kind,
        title: rest.trim(),
    })
}

/// A callout block collected from the source document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Callout {
    /// Type keyword as written in the header (`NOTE`, `WARNING`, ...).
    pub kind: String,
    /// Header title, or the keyword itself when the header has none.
    pub title: String,
    /// Non-blank content lines with the quote marker removed and trimmed.
    pub lines: Vec<String>,
}

impl Callout {
    /// Start a callout from its header.
    pub fn new(header: CalloutHeader<'_>) -> Self {
        let title = if header.title.is_empty() {
            header.kind
        } else {
            header.title
        };
        Self {
            kind: header.kind.to_owned(),
            title: title.to_owned(),
            lines: Vec::new(),
        }
    }

    /// Append a quoted line (marker already stripped). Blank lines are dropped.
    pub fn push_line(&mut self, unquoted: &str) {
        let text = unquoted.trim();
        if !text.is_empty() {
            self.lines.push(text.to_owned());
        }
    }

    /// Content lines classified for rendering.
    pub fn content(&self) -> impl Iterator<Item = CalloutLine<'_>> {
        self.lines.iter().map(|line| CalloutLine::classify(line))
    }
}

/// One content line of a callout, as the renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutLine<'a> {
    /// A line consisting solely of `![alt](src)`.
    Image {
        /// Alt text, verbatim.
        alt: &'a str,
        /// Image target, verbatim.
        src: &'a str,
    },
    /// Any other line.
    Text(&'a str),
}

impl<'a> CalloutLine<'a> {
    /// Classify a trimmed content line.
    pub fn classify(line: &'a str) -> Self {
        match INLINE_IMAGE.captures(line) {
            Some(caps) => {
                let (_, [alt, src]) = caps.extract();
                CalloutLine::Image { alt, src }
            }
            None => CalloutLine::Text(line),
        }
    }
}

/// Scanner state: either between blocks or collecting one.
enum ScanState {
    Outside,
    Inside(Callout),
}

/// Replace every callout block in `input` with `render(&callout)`.
///
/// A block is its header line plus the contiguous run of lines starting with
/// `>` that follows it. The first line without the marker closes the block and
/// is then scanned again as an ordinary line, so it may open the next callout.
/// A block still open at end of input is closed there. A header-shaped line
/// inside a block is plain content; callouts do not nest.
///
/// Lines are split on `\n` and re-joined with `\n`, so line endings and a
/// trailing newline survive unchanged.
///
/// # Returns
///
/// A tuple of (rewritten_content, callout_count).
pub fn rewrite_callouts<F>(input: &str, mut render: F) -> (String, usize)
where
    F: FnMut(&Callout) -> String,
{
    let lines: Vec<&str> = input.split('\n').collect();
    let mut output: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());
    let mut state = ScanState::Outside;
    let mut count = 0usize;
    let mut cursor = 0usize;

    while cursor < lines.len() {
        let line = lines[cursor];

        match state {
            ScanState::Outside => {
                match parse_callout_header(line) {
                    Some(header) => state = ScanState::Inside(Callout::new(header)),
                    None => output.push(Cow::Borrowed(line)),
                }
                cursor += 1;
            }
            ScanState::Inside(ref mut callout) => match line.strip_prefix(QUOTE_MARKER) {
                Some(unquoted) => {
                    callout.push_line(unquoted);
                    cursor += 1;
                }
                None => {
                    // Close the block; the cursor stays so this line is rescanned.
                    output.push(Cow::Owned(render(callout)));
                    count += 1;
                    state = ScanState::Outside;
                }
            },
        }
    }

    if let ScanState::Inside(callout) = state {
        output.push(Cow::Owned(render(&callout)));
        count += 1;
    }

    log::debug!("rewrote {count} callout block(s)");
    (output.join("\n"), count)
}
