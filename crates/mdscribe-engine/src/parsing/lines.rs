/// A position in an immutable line list.
///
/// Block parsers take a cursor by value and hand back a new one on a match,
/// so no scan index is shared between them.
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor at the first line.
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    /// Current line index.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true once every line has been consumed.
    pub fn eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// The line under the cursor.
    pub fn line(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// The line `offset` lines ahead of the cursor.
    pub fn peek(&self, offset: usize) -> Option<&'a str> {
        self.lines.get(self.pos + offset).copied()
    }

    /// Returns a cursor advanced by `n` lines (clamped to the end).
    #[must_use]
    pub fn advance(self, n: usize) -> Self {
        Self {
            lines: self.lines,
            pos: (self.pos + n).min(self.lines.len()),
        }
    }

    /// Lines between this cursor and `end`.
    pub fn span_to(&self, end: &LineCursor<'a>) -> &'a [&'a str] {
        &self.lines[self.pos..end.pos.max(self.pos)]
    }

    /// Source text between this cursor and `end`, joined with newlines.
    pub fn raw_to(&self, end: &LineCursor<'a>) -> String {
        self.span_to(end).join("\n")
    }
}

/// Splits text on `\n`, dropping a trailing `\r` from each line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

/// Count of leading whitespace characters.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
