//! The substitution capability invoked once per delimited span.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// Maps the raw expression inside a span to its replacement text.
///
/// The scanner calls [`handle_token`](Self::handle_token) exactly once per
/// terminated, unescaped span, in left-to-right order. It passes the inner
/// text as found (escaped close tokens already unescaped) and splices the
/// returned text into the output without scanning it again.
///
/// An `Err` aborts the scan and is returned from
/// [`TokenScanner::parse`](crate::TokenScanner::parse) unchanged.
///
/// Handlers that keep state across calls (counters, collected parameters)
/// use interior mutability; the scanner never synchronises calls.
pub trait TokenHandler {
    /// Failure raised by the handler, propagated through `parse`.
    type Error;

    /// Produce the replacement for one span's expression.
    fn handle_token(&self, expression: &str) -> Result<String, Self::Error>;
}

macro_rules! forward_handler {
    ($($ptr:ty),*) => {
        $(
            impl<H: TokenHandler + ?Sized> TokenHandler for $ptr {
                type Error = H::Error;

                #[inline]
                fn handle_token(&self, expression: &str) -> Result<String, Self::Error> {
                    (**self).handle_token(expression)
                }
            }
        )*
    };
}

forward_handler!(&H, Box<H>, Rc<H>, Arc<H>);

/// A [`TokenHandler`] backed by a closure. Created by [`from_fn`].
pub struct FnHandler<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Turn a closure into a [`TokenHandler`].
///
/// ```
/// use std::convert::Infallible;
/// use weft_scan::{from_fn, TokenScanner};
///
/// let upper = from_fn(|expr: &str| Ok::<_, Infallible>(expr.to_uppercase()));
/// let scanner = TokenScanner::new("${", "}", upper).unwrap();
/// assert_eq!(scanner.parse("hi ${there}").unwrap(), "hi THERE");
/// ```
pub fn from_fn<F, E>(f: F) -> FnHandler<F, E>
where
    F: Fn(&str) -> Result<String, E>,
{
    FnHandler {
        f,
        _error: PhantomData,
    }
}

impl<F, E> TokenHandler for FnHandler<F, E>
where
    F: Fn(&str) -> Result<String, E>,
{
    type Error = E;

    #[inline]
    fn handle_token(&self, expression: &str) -> Result<String, E> {
        (self.f)(expression)
    }
}

impl<F, E> fmt::Debug for FnHandler<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
