//! Line-oriented document access
//!
//! Navigation never mutates text; it only needs read access to lines.
//! Hosts implement [`LineSource`] over their own buffer. [`Document`] is an
//! owned snapshot implementation for tests, benches, and simple hosts.

/// Read access to a document's lines
///
/// Line text excludes the line terminator. A document always has at least
/// one line (the empty document is one empty line).
pub trait LineSource {
    /// Total number of lines
    fn line_count(&self) -> usize;

    /// The text of line `index`, or `None` past the end of the document
    fn line(&self, index: usize) -> Option<&str>;

    /// Char length of line `index`
    fn line_len(&self, index: usize) -> Option<usize> {
        self.line(index).map(|l| l.chars().count())
    }
}

/// An owned line snapshot of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` into lines on `\n`, trimming one trailing `\r` per line.
    /// A trailing newline therefore produces a final empty line, matching
    /// how editors count lines.
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        Document { lines }
    }

    /// Build a document from pre-split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Document {
                lines: vec![String::new()],
            };
        }
        Document { lines }
    }
}

impl LineSource for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}
