//! Context-aware scanning of SQL templates.
//!
//! The scanner knows just enough SQL to tell real placeholders and keywords
//! apart from text that merely looks like them: single-quoted string
//! literals, `--` line comments and `/* */` block comments are skipped as a
//! whole. Double-quoted spans are ordinary text. Backtick-quoted identifiers
//! are not skipped either, but comment openers and single quotes inside them
//! are inert. A backtick inside a double-quoted span is plain text.

use super::Span;

/// What a run of question marks stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `?`: consumes one value, rendered as a literal.
    Scalar,
    /// `??`: consumes one value, rendered as an identifier.
    Identifier,
    /// `???` or longer: left untouched, consumes nothing.
    Ignored,
}

impl PlaceholderKind {
    const fn from_run_len(len: usize) -> Self {
        match len {
            1 => Self::Scalar,
            2 => Self::Identifier,
            _ => Self::Ignored,
        }
    }
}

/// A run of question marks found outside skip regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Location of the whole run.
    pub span: Span,
    /// Classification by run length.
    pub kind: PlaceholderKind,
}

/// Returns the end offset of the skip region opening at `at`, if any.
///
/// Single-quoted strings honour backslash escapes and end at the first
/// unescaped quote. Line comments end just past the next newline. Unterminated
/// regions run to the end of the input.
#[must_use]
pub fn skip_region(input: &str, at: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let len = bytes.len();

    match (bytes.get(at)?, bytes.get(at + 1)) {
        (b'\'', _) => {
            let mut cursor = at + 1;
            while cursor < len {
                match bytes[cursor] {
                    b'\\' => cursor += 2,
                    b'\'' => return Some(cursor + 1),
                    _ => cursor += 1,
                }
            }
            Some(len)
        }
        (b'-', Some(b'-')) => Some(
            bytes[at + 2..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(len, |offset| at + 2 + offset + 1),
        ),
        (b'/', Some(b'*')) => Some(
            bytes[at + 2..]
                .windows(2)
                .position(|pair| pair == b"*/")
                .map_or(len, |offset| at + 2 + offset + 2),
        ),
        _ => None,
    }
}

/// A resumable cursor over a SQL template.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The template being scanned.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Whether the cursor sits inside a backtick-quoted identifier.
    in_identifier: bool,
    /// Whether the cursor sits inside a double-quoted span.
    in_double_quote: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            in_identifier: false,
            in_double_quote: false,
        }
    }

    /// Returns the template being scanned.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor forward to `pos` without inspecting the bytes between.
    ///
    /// Callers must only jump over text that holds no backtick or double quote.
    pub(crate) fn skip_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos);
        self.pos = pos;
    }

    /// Advances past the next significant byte and returns its offset.
    ///
    /// Skip regions are jumped over as a whole and never reported.
    pub(crate) fn next_significant(&mut self) -> Option<usize> {
        let bytes = self.input.as_bytes();

        while self.pos < bytes.len() {
            let at = self.pos;

            match bytes[at] {
                b'`' if !self.in_double_quote => self.in_identifier = !self.in_identifier,
                b'"' if !self.in_identifier => self.in_double_quote = !self.in_double_quote,
                _ if !self.in_identifier => {
                    if let Some(end) = skip_region(self.input, at) {
                        self.pos = end;
                        continue;
                    }
                }
                _ => {}
            }

            self.pos = at + 1;
            return Some(at);
        }

        None
    }

    /// Finds the next run of question marks outside skip regions.
    pub fn next_placeholder(&mut self) -> Option<Placeholder> {
        let bytes = self.input.as_bytes();

        while let Some(at) = self.next_significant() {
            if bytes[at] != b'?' {
                continue;
            }

            while bytes.get(self.pos) == Some(&b'?') {
                self.pos += 1;
            }

            let span = Span::new(at, self.pos);
            return Some(Placeholder {
                span,
                kind: PlaceholderKind::from_run_len(span.len()),
            });
        }

        None
    }
}

impl Iterator for Scanner<'_> {
    type Item = Placeholder;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_placeholder()
    }
}
