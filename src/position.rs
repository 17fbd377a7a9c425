/// 1-based line and column of an offset in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

/// How many characters of context to show on each side of the offset
const EXCERPT_RADIUS: usize = 10;

/// Calculate the 1-based line and column of a byte offset by scanning the
/// characters before it and counting newlines
pub fn line_col(source: &str, offset: usize) -> LineCol {
    let mut line = 1;
    let mut column = 1;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    LineCol { line, column }
}

/// Render the diagnostic block primitive matchers embed in their failure
/// messages: a positioned header, the expectation description, and a
/// one-line source excerpt with a caret under the offending offset.
///
/// The excerpt shows up to 10 characters before the offset (clipped to the
/// start of the current line) and up to 10 characters after (truncated at
/// the first newline).
pub fn annotate(description: &str, source: &str, offset: usize) -> String {
    let offset = offset.min(source.len());
    let LineCol { line, column } = line_col(source, offset);

    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let consumed = &source[line_start..offset];
    let skip = consumed.chars().count().saturating_sub(EXCERPT_RADIUS);
    let before: String = consumed.chars().skip(skip).collect();

    let after: String = source[offset..]
        .chars()
        .take_while(|&c| c != '\n')
        .take(EXCERPT_RADIUS)
        .collect();

    let caret_pad = " ".repeat(before.chars().count());
    format!("Error at (line: {line}, column: {column})\n{description}\n\n{before}{after}\n{caret_pad}^")
}
