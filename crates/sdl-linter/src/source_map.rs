//! Maps lines in the concatenated lint buffer back to the schema fragments
//! that contributed them.

use crate::diagnostics::Location;
use thiserror::Error;

/// Identity used for a fragment read from standard input.
pub const STDIN_PATH: &str = "<stdin>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// A lookup asked for a line outside the concatenated buffer. Lines
    /// sourced from diagnostics the engine produced are always in range,
    /// so hitting this means the map and the buffer disagree.
    #[error("line {line} is outside the concatenated buffer (1..={total})")]
    LineOutOfRange { line: u32, total: u32 },

    #[error("no schema fragment registered for '{path}'")]
    UnknownFragment { path: String },
}

/// One originally-authored unit of schema text, with the line range it
/// occupies in the concatenated buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    path: String,
    start_line: u32,
    line_count: u32,
}

impl Fragment {
    /// Original file path, or [`STDIN_PATH`] for standard input.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First buffer line (1-based) occupied by this fragment.
    #[must_use]
    pub const fn start_line(&self) -> u32 {
        self.start_line
    }

    /// Number of buffer lines occupied by this fragment.
    #[must_use]
    pub const fn line_count(&self) -> u32 {
        self.line_count
    }
}

/// Ordered fragments plus the concatenated buffer they were joined into.
///
/// Fragments are contiguous and non-overlapping in buffer-line space:
/// `start_line(i + 1) = start_line(i) + line_count(i)`.
#[derive(Debug)]
pub struct SourceMap {
    fragments: Vec<Fragment>,
    buffer: String,
    line_index: LineIndex,
}

impl SourceMap {
    /// Concatenate the given `(path, text)` fragments in order.
    ///
    /// The join is line-preserving: each fragment's text is normalized to
    /// end with exactly one newline before the next fragment is appended,
    /// so fragment `i + 1` always starts on the line after fragment `i`'s
    /// last line.
    pub fn build<I, P, T>(sources: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: AsRef<str>,
    {
        let mut fragments = Vec::new();
        let mut buffer = String::new();
        let mut next_line = 1u32;

        for (path, text) in sources {
            let text = text.as_ref();
            // An empty fragment still occupies the single line its newline creates.
            let line_count = text.lines().count().max(1) as u32;

            buffer.push_str(text);
            if !text.ends_with('\n') {
                buffer.push('\n');
            }

            fragments.push(Fragment {
                path: path.into(),
                start_line: next_line,
                line_count,
            });
            next_line += line_count;
        }

        let line_index = LineIndex::new(&buffer);
        Self {
            fragments,
            buffer,
            line_index,
        }
    }

    /// The concatenated buffer handed to the parser.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Total number of lines across all fragments.
    #[must_use]
    pub fn total_lines(&self) -> u32 {
        self.fragments
            .last()
            .map_or(0, |f| f.start_line + f.line_count - 1)
    }

    /// The fragment that owns the given buffer line (1-based).
    pub fn fragment_for(&self, line: u32) -> Result<&Fragment, SourceMapError> {
        let total = self.total_lines();
        if line == 0 || line > total {
            return Err(SourceMapError::LineOutOfRange { line, total });
        }
        let idx = self.fragments.partition_point(|f| f.start_line <= line);
        Ok(&self.fragments[idx - 1])
    }

    /// The buffer line at which the named fragment starts.
    pub fn offset_for(&self, path: &str) -> Result<u32, SourceMapError> {
        self.fragments
            .iter()
            .find(|f| f.path == path)
            .map(Fragment::start_line)
            .ok_or_else(|| SourceMapError::UnknownFragment {
                path: path.to_string(),
            })
    }

    /// Buffer line/column (1-based) for a byte offset into the buffer.
    #[must_use]
    pub fn location_at(&self, offset: usize) -> Location {
        self.line_index.location(&self.buffer, offset)
    }
}

/// Byte-offset-to-line/column conversion for a fixed text.
///
/// Line starts are collected once; lookups are a binary search plus a scan
/// of the final line, which keeps diagnostic emission cheap.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line/column of a byte offset. Columns count characters, not
    /// bytes. Offsets past the end of the text report the end of the text.
    #[must_use]
    pub fn location(&self, text: &str, offset: usize) -> Location {
        let offset = offset.min(text.len());
        let mut line = self.line_starts.partition_point(|&start| start <= offset);
        // An offset at the very end of a newline-terminated text lands on a
        // phantom line past the last real one; report the end of the last
        // real line instead.
        if line > 1 && self.line_starts[line - 1] == text.len() && offset == text.len() {
            line -= 1;
        }
        let line_start = self.line_starts[line - 1];
        let column = text[line_start..offset].chars().count() as u32 + 1;
        Location::new(line as u32, column)
    }
}
