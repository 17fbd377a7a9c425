/// A copyable view into the source text at a byte offset.
///
/// Parsers thread a `Cursor` through their calls instead of mutating shared
/// state; saving a copy of a cursor is enough to retry an alternative from
/// the same position. Offsets only move forward through a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of the source
    pub fn new(source: &'src str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// Create a cursor at the given byte offset, clamped to the end of the source
    pub fn at(source: &'src str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        Cursor { source, offset }
    }

    /// The full source text this cursor points into
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The current byte offset
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The unconsumed remainder of the source
    pub fn rest(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// The next character, if any input remains
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Check whether the cursor has reached the end of the source
    pub fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Advance the cursor by `bytes`, clamped to the end of the source
    pub fn advance(self, bytes: usize) -> Self {
        Cursor {
            source: self.source,
            offset: (self.offset + bytes).min(self.source.len()),
        }
    }

    /// The slice of source between this cursor and a later one
    pub fn slice_to(&self, end: Cursor<'src>) -> &'src str {
        &self.source[self.offset..end.offset]
    }
}
