use std::fmt::{self, Display, Formatter};

use regex::Regex;

/// A header line together with its indented child lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigBlock<'a> {
    index: usize,
    lines: &'a [String],
}

impl<'a> ConfigBlock<'a> {
    pub(crate) fn new(index: usize, lines: &'a [String]) -> Self {
        debug_assert!(!lines.is_empty());
        Self { index, lines }
    }

    /// Position of the header line in the indexed configuration.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn header(&self) -> &'a str {
        &self.lines[0]
    }

    /// Header followed by every child line.
    pub fn lines(&self) -> &'a [String] {
        self.lines
    }

    /// Child lines at any depth, header excluded.
    pub fn children(&self) -> &'a [String] {
        &self.lines[1..]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Capture group 1 of `pattern` against the header line.
    pub fn header_capture(&self, pattern: &Regex) -> Option<&'a str> {
        capture(pattern, self.header())
    }

    /// Capture group 1 of the first child line matching `pattern`.
    pub fn child_capture(&self, pattern: &Regex) -> Option<&'a str> {
        self.children()
            .iter()
            .find_map(|line| capture(pattern, line))
    }

    /// Whether any child line matches `pattern`.
    pub fn has_child(&self, pattern: &Regex) -> bool {
        self.children().iter().any(|line| pattern.is_match(line))
    }

    /// Whether every entry of `required` appears verbatim as one of the block's lines.
    pub fn contains_lines<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required
            .iter()
            .all(|wanted| self.lines.iter().any(|line| line == wanted.as_ref()))
    }

    /// The block re-joined with `\n`, as it appeared in the source.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Display for ConfigBlock<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
