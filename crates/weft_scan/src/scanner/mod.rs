//! Single-pass delimited-token scanner.
//!
//! # Algorithm
//!
//! The cursor starts at 0 and only moves forward. For each open token found
//! at or after the cursor:
//!
//! - **Escaped** (`\` directly before it): the text up to the backslash and
//!   the literal open token are copied, and the search resumes after it.
//! - **Structural**: the text before it is copied, then close tokens are
//!   searched for. Escaped close tokens become literal text inside the
//!   expression; the first unescaped one ends the span and the handler's
//!   answer replaces it. If none exists, the open token and the rest of the
//!   input are copied verbatim and the scan ends.
//!
//! The tail after the last open token is copied at the end. Each input byte
//! is looked at by the substring search a bounded number of times.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::{ConfigError, Cursor, Delimiters, TokenHandler};

/// Replaces every delimited span in a text with a handler's answer.
///
/// The delimiters and handler are fixed at construction. `parse` takes
/// `&self` and keeps its buffers local, so a scanner can be shared across
/// threads whenever the handler can.
///
/// ```
/// use std::convert::Infallible;
/// use weft_scan::{from_fn, TokenScanner};
///
/// let scanner = TokenScanner::new(
///     "${",
///     "}",
///     from_fn(|expr: &str| Ok::<_, Infallible>(format!("<{expr}>"))),
/// )
/// .unwrap();
///
/// assert_eq!(scanner.parse("a ${b} c").unwrap(), "a <b> c");
/// assert_eq!(scanner.parse(r"a \${b} c").unwrap(), "a ${b} c");
/// assert_eq!(scanner.parse("a ${b c").unwrap(), "a ${b c");
/// assert_eq!(scanner.parse(None).unwrap(), "");
/// ```
#[derive(Clone, Debug)]
pub struct TokenScanner<H> {
    delimiters: Delimiters,
    handler: H,
}

impl<H> TokenScanner<H> {
    /// Create a scanner for the `open`/`close` pair.
    ///
    /// Fails if either delimiter is empty.
    pub fn new(open: &str, close: &str, handler: H) -> Result<Self, ConfigError> {
        Ok(Self::with_delimiters(Delimiters::new(open, close)?, handler))
    }

    /// Create a scanner from an already validated delimiter pair.
    pub fn with_delimiters(delimiters: Delimiters, handler: H) -> Self {
        Self {
            delimiters,
            handler,
        }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consume the scanner, returning its handler (and whatever state the
    /// handler collected).
    pub fn into_handler(self) -> H {
        self.handler
    }
}

impl<H: TokenHandler> TokenScanner<H> {
    /// Substitute every terminated, unescaped span in `text`.
    ///
    /// Accepts `&str` or `Option<&str>`; an absent text behaves like an empty
    /// one. Returns the input borrowed when it has no open token at all.
    ///
    /// Malformed input never fails. The only error is one raised by the
    /// handler, returned as-is.
    pub fn parse<'t>(&self, text: impl Into<Option<&'t str>>) -> Result<Cow<'t, str>, H::Error> {
        match text.into() {
            Some(text) => self.scan(text),
            None => Ok(Cow::Borrowed("")),
        }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
    fn scan<'t>(&self, text: &'t str) -> Result<Cow<'t, str>, H::Error> {
        let delims = &self.delimiters;
        let mut cursor = Cursor::new(text);

        let Some(mut start) = cursor.find(delims.open_finder()) else {
            return Ok(Cow::Borrowed(text));
        };

        let open_len = delims.open().len();
        let close_len = delims.close().len();
        let mut out = String::with_capacity(text.len());
        let mut expression = String::new();

        loop {
            if cursor.is_escaped_at(start) {
                out.push_str(cursor.slice_to(start - 1));
                out.push_str(delims.open());
                cursor.advance_to(start + open_len);
            } else {
                out.push_str(cursor.slice_to(start));
                cursor.advance_to(start + open_len);
                expression.clear();

                if let Some(end) = close_span(&mut cursor, delims, &mut expression) {
                    trace!(start, end, "substituting span");
                    out.push_str(&self.handler.handle_token(&expression)?);
                    cursor.advance_to(end + close_len);
                } else {
                    debug!(start, "unterminated span copied verbatim");
                    out.push_str(cursor.slice(start, text.len()));
                    cursor.advance_to_end();
                }
            }

            match cursor.find(delims.open_finder()) {
                Some(next) => start = next,
                None => break,
            }
        }

        out.push_str(cursor.rest());
        Ok(Cow::Owned(out))
    }
}

/// Collect the expression of an open span into `expression`.
///
/// Returns the offset of the terminating close token, or `None` when the
/// span never closes. Escaped close tokens are unescaped into the expression
/// and consumed.
fn close_span(
    cursor: &mut Cursor<'_>,
    delims: &Delimiters,
    expression: &mut String,
) -> Option<usize> {
    while let Some(end) = cursor.find(delims.close_finder()) {
        if cursor.is_escaped_at(end) {
            expression.push_str(cursor.slice_to(end - 1));
            expression.push_str(delims.close());
            cursor.advance_to(end + delims.close().len());
        } else {
            expression.push_str(cursor.slice_to(end));
            return Some(end);
        }
    }
    None
}
