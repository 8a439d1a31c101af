//! Delimited-token scanner for weft.
//!
//! Finds every span bounded by an open/close delimiter pair (`${` / `}`,
//! `#{` / `}`, or any other pair of non-empty strings), hands the inner
//! expression to a caller-supplied [`TokenHandler`], and splices the
//! handler's answer back into the output.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Cursor (forward-only byte offset + memmem search)
//!              │
//!              ▼
//!        TokenScanner::parse ──► TokenHandler::handle_token(expr)
//!              │
//!              ▼
//!        Cow<str> (borrowed when nothing was delimited)
//! ```
//!
//! # Escapes
//!
//! A backslash directly before an open or close token makes that token
//! literal text: the backslash is dropped and the token is copied through.
//! Unterminated spans are never an error; the open token and everything
//! after it are copied through verbatim.
//!
//! # Design
//!
//! - **No knowledge of the handler's domain**: expressions are passed raw,
//!   and replacements are never re-scanned.
//! - **Fail-fast configuration**: empty delimiters are rejected when the
//!   [`Delimiters`] are built, not when a scan runs.
//! - **Thread-safe when the handler is**: `parse` takes `&self` and keeps
//!   all buffers local to the call.
//! - **Offsets stay internal**: the cursor is crate-private, so callers
//!   cannot slice at arbitrary offsets.
//!
//! ```compile_fail
//! use weft_scan::Cursor;
//! ```

mod cursor;
mod delimiters;
mod error;
mod handler;
mod scanner;

pub(crate) use cursor::Cursor;
pub use delimiters::Delimiters;
pub use error::ConfigError;
pub use handler::{from_fn, FnHandler, TokenHandler};
pub use scanner::TokenScanner;

/// The escape marker. Fixed, not configurable.
pub const ESCAPE: u8 = b'\\';
