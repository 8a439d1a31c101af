//! Detection of texts that need substitution at all.
//!
//! A text is dynamic when it holds at least one terminated, unescaped span
//! for a delimiter pair. Static texts can be cached as-is; dynamic ones must
//! be re-rendered every time their variables may change.

use std::cell::Cell;
use std::convert::Infallible;

use weft_scan::{Delimiters, TokenHandler, TokenScanner};

/// Records whether it was ever invoked.
#[derive(Debug, Default)]
struct SpanDetector {
    found: Cell<bool>,
}

impl TokenHandler for SpanDetector {
    type Error = Infallible;

    fn handle_token(&self, _expression: &str) -> Result<String, Infallible> {
        self.found.set(true);
        Ok(String::new())
    }
}

/// Returns `true` if `text` has a span the scanner would substitute.
///
/// Escaped and unterminated open tokens do not count.
pub fn is_dynamic(text: &str, delimiters: &Delimiters) -> bool {
    if !delimiters.opens_in(text) {
        return false;
    }
    let detector = SpanDetector::default();
    let scanner = TokenScanner::with_delimiters(delimiters.clone(), &detector);
    match scanner.parse(text) {
        Ok(_) => detector.found.get(),
        Err(never) => match never {},
    }
}
