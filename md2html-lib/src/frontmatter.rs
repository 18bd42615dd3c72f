//! Splits an optional `---` delimited `key: value` header from a Markdown body.

use std::collections::BTreeMap;

const DELIMITER: &str = "---";
const DEFAULT_TITLE: &str = "Post";

/// Key/value metadata attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: BTreeMap<String, String>,
}

impl Frontmatter {
    /// The mapping used when a document carries no header block.
    pub fn defaults() -> Self {
        [("title", DEFAULT_TITLE), ("date", ""), ("excerpt", "")]
            .into_iter()
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts a value, overwriting any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Page title, or `Post` when the header has no `title` key.
    pub fn title(&self) -> &str {
        self.get("title").unwrap_or(DEFAULT_TITLE)
    }

    /// Publication date, or an empty string when absent.
    pub fn date(&self) -> &str {
        self.get("date").unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut frontmatter = Frontmatter::default();
        for (key, value) in iter {
            frontmatter.insert(key, value);
        }
        frontmatter
    }
}

/// A document split into its metadata and its Markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
    /// Whether a header block was found at the start of the document.
    pub has_header: bool,
}

/// Splits `content` into frontmatter and body.
///
/// The header must open with a `---` line at the very first byte and closes at
/// the first subsequent `---` line. When no such block exists, `defaults` is
/// returned together with the untouched input. Header lines without a colon are
/// skipped.
pub fn extract(content: &str, defaults: &Frontmatter) -> ParsedDocument {
    let Some((header, body)) = split_header(content) else {
        return ParsedDocument {
            frontmatter: defaults.clone(),
            body: content.to_string(),
            has_header: false,
        };
    };

    ParsedDocument {
        frontmatter: parse_header(header),
        body: body.to_string(),
        has_header: true,
    }
}

fn split_header(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix(DELIMITER)
        .and_then(|rest| rest.strip_prefix('\n'))?;

    // The closing line is `\n---\n`; the earliest occurrence wins.
    let closing = format!("\n{DELIMITER}\n");
    let header_end = rest.find(&closing)?;

    Some((&rest[..header_end], &rest[header_end + closing.len()..]))
}

fn parse_header(header: &str) -> Frontmatter {
    header
        .split(is_line_boundary)
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

/// Characters that end a header line. `\r\n` yields an empty line in between,
/// which has no colon and is skipped.
fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
