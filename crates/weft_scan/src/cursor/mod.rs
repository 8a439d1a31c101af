//! Forward-only cursor over the text being scanned.
//!
//! The cursor marks the first byte that has not been consumed yet. It only
//! ever moves forward, which bounds a scan to a single pass over the input.
//!
//! # Offsets
//!
//! All offsets are byte offsets into the original `&str`. Delimiters are
//! valid UTF-8 matched as whole byte sequences, so every match lands on a
//! character boundary and every slice taken between matches is valid.

use memchr::memmem::Finder;

use crate::ESCAPE;

/// Forward-only position over a source string.
///
/// The cursor is [`Copy`]; the scanner keeps exactly one and never rewinds it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    #[cfg(test)]
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The whole source.
    #[cfg(test)]
    #[inline]
    pub fn src(&self) -> &'a str {
        self.src
    }

    /// Returns `true` once every byte has been consumed.
    #[cfg(test)]
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Move the cursor forward to `pos`.
    ///
    /// # Contract
    ///
    /// `pos` must not be behind the current position and must not exceed
    /// the source length.
    #[inline]
    pub fn advance_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor rewind from {} to {pos}", self.pos);
        debug_assert!(pos <= self.src.len(), "cursor past end: {pos}");
        self.pos = pos;
    }

    /// Consume everything that is left.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.src.len();
    }

    /// Find the next occurrence of `needle` at or after the cursor.
    ///
    /// Returns an absolute byte offset. The cursor does not move.
    #[inline]
    pub fn find(&self, needle: &Finder<'_>) -> Option<usize> {
        needle
            .find(&self.src.as_bytes()[self.pos..])
            .map(|off| self.pos + off)
    }

    /// Returns `true` if the byte before `at` is an unconsumed backslash.
    ///
    /// A backslash behind the cursor has already been copied or dropped, so
    /// it cannot escape anything a second time.
    #[inline]
    pub fn is_escaped_at(&self, at: usize) -> bool {
        at > self.pos && self.src.as_bytes()[at - 1] == ESCAPE
    }

    /// Source text from the cursor up to `end` (exclusive).
    #[inline]
    pub fn slice_to(&self, end: usize) -> &'a str {
        &self.src[self.pos..end]
    }

    /// Source text between two absolute offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Source text from the cursor to the end.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }
}
