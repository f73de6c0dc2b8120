use regex::Regex;

use crate::block::ConfigBlock;

/// Indentation-scoped index over the lines of an IOS-style configuration.
///
/// Nesting is signalled only by leading whitespace. A line's block is the line
/// itself plus every following line indented strictly deeper, stopping at the
/// first line whose indentation is less than or equal to its own. Block
/// boundaries are computed once at construction so every lookup is a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLineIndex {
    lines: Vec<String>,
    depth: Vec<usize>,
    block_end: Vec<usize>,
}

impl ConfigLineIndex {
    /// Index configuration text, one entry per line (`\n` or `\r\n` separated).
    pub fn new(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Index an already-split sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let depth: Vec<usize> = lines.iter().map(|line| indentation(line)).collect();
        let block_end = compute_block_ends(&depth);
        Self {
            lines,
            depth,
            block_end,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All indexed lines in source order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Leading whitespace width of the line at `index`.
    pub fn indent(&self, index: usize) -> Option<usize> {
        self.depth.get(index).copied()
    }

    /// Indices of all lines with no indentation.
    pub fn top_level(&self) -> impl Iterator<Item = usize> + '_ {
        self.depth
            .iter()
            .enumerate()
            .filter(|(_, depth)| **depth == 0)
            .map(|(index, _)| index)
    }

    /// Block headed by the line at `header`: the header and its deeper-indented run.
    pub fn block(&self, header: usize) -> Option<ConfigBlock<'_>> {
        let end = *self.block_end.get(header)?;
        Some(ConfigBlock::new(header, &self.lines[header..end]))
    }

    /// First top-level line matching `pattern`, as a block.
    pub fn find_first(&self, pattern: &Regex) -> Option<ConfigBlock<'_>> {
        self.top_level()
            .find(|&index| pattern.is_match(&self.lines[index]))
            .and_then(|index| self.block(index))
    }

    /// Every top-level line matching `pattern`, as blocks in source order.
    pub fn find_all(&self, pattern: &Regex) -> Vec<ConfigBlock<'_>> {
        self.top_level()
            .filter(|&index| pattern.is_match(&self.lines[index]))
            .filter_map(|index| self.block(index))
            .collect()
    }

    /// Top-level blocks whose header matches `parent` and whose indented
    /// region contains at least one line matching `child`.
    pub fn find_with_child(&self, parent: &Regex, child: &Regex) -> Vec<ConfigBlock<'_>> {
        self.find_all(parent)
            .into_iter()
            .filter(|block| block.children().iter().any(|line| child.is_match(line)))
            .collect()
    }

    /// Direct children of the line at `header`, skipping over their own nested runs.
    pub fn child_indices(&self, header: usize) -> Vec<usize> {
        let Some(&end) = self.block_end.get(header) else {
            return Vec::new();
        };

        let mut children = Vec::new();
        let mut cursor = header + 1;
        while cursor < end {
            children.push(cursor);
            cursor = self.block_end[cursor];
        }
        children
    }
}

fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

// A line's block closes at the first later line that is not deeper than it.
fn compute_block_ends(depth: &[usize]) -> Vec<usize> {
    let mut ends = vec![depth.len(); depth.len()];
    let mut open: Vec<usize> = Vec::new();

    for (index, &current) in depth.iter().enumerate() {
        while let Some(&top) = open.last() {
            if depth[top] < current {
                break;
            }
            ends[top] = index;
            open.pop();
        }
        open.push(index);
    }

    ends
}
