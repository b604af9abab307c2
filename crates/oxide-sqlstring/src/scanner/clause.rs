//! Locating the clauses in which a mapping expands into assignments.
//!
//! Two keyword shapes open such a clause: `SET` and `KEY UPDATE` (the tail
//! of `ON DUPLICATE KEY UPDATE`). Matching is case-insensitive, whole-word
//! and ignores everything inside skip regions, so `OFFSET`, `CHARSET` or a
//! `SET` inside a comment never count.

use super::Scanner;

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Returns true if the bytes between `start` and `end` are all whitespace.
pub(crate) fn is_blank(bytes: &[u8], start: usize, end: usize) -> bool {
    bytes[start..end].iter().all(|&b| is_space(b))
}

/// Returns true if `word` (lowercase ASCII) occurs at `at` as a whole word.
fn matches_word(bytes: &[u8], at: usize, word: &str) -> bool {
    let end = at + word.len();

    bytes
        .get(at..end)
        .is_some_and(|text| text.eq_ignore_ascii_case(word.as_bytes()))
        && (at == 0 || !is_word_byte(bytes[at - 1]))
        && !bytes.get(end).is_some_and(|&b| is_word_byte(b))
}

/// Finds clause keywords one after another.
#[derive(Debug, Clone)]
pub struct ClauseLocator<'a> {
    scanner: Scanner<'a>,
}

impl<'a> ClauseLocator<'a> {
    /// Creates a locator searching from the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Creates a locator that resumes from an existing cursor.
    #[must_use]
    pub const fn starting_at(scanner: Scanner<'a>) -> Self {
        Self { scanner }
    }

    /// Returns the offset just past the next `SET` or `KEY UPDATE`.
    pub fn next_clause(&mut self) -> Option<usize> {
        let bytes = self.scanner.input().as_bytes();

        while let Some(at) = self.scanner.next_significant() {
            if matches_word(bytes, at, "set") {
                let end = at + "set".len();
                self.scanner.skip_to(end);
                return Some(end);
            }

            if matches_word(bytes, at, "key") {
                let mut cursor = at + "key".len();
                while bytes.get(cursor).is_some_and(|&b| is_space(b)) {
                    cursor += 1;
                }

                if matches_word(bytes, cursor, "update") {
                    let end = cursor + "update".len();
                    self.scanner.skip_to(end);
                    return Some(end);
                }
            }
        }

        None
    }
}

/// Returns the offset just past the first clause keyword of `input`.
#[must_use]
pub fn find_clause(input: &str) -> Option<usize> {
    ClauseLocator::new(input).next_clause()
}
