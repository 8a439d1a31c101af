//! Configuration errors raised while building a scanner.

use thiserror::Error;

/// A delimiter pair that cannot drive a scan.
///
/// Raised by [`Delimiters::new`](crate::Delimiters::new), so a bad pair is
/// reported when the scanner is configured rather than on every `parse`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ConfigError {
    #[error("open delimiter must not be empty")]
    EmptyOpenDelimiter,
    #[error("close delimiter must not be empty")]
    EmptyCloseDelimiter,
}
