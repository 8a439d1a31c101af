//! Validated open/close delimiter pair.
//!
//! Both tokens are matched as literal byte substrings. Their substring
//! finders are built once here and shared by every scan.

use memchr::memmem::Finder;

use crate::ConfigError;

/// An immutable, validated pair of open/close tokens.
///
/// Neither token has to be a single character: `${`/`}`, `<%=`/`%>` and
/// `«`/`»` are all valid pairs.
#[derive(Clone, Debug)]
pub struct Delimiters {
    open: Box<str>,
    close: Box<str>,
    open_finder: Finder<'static>,
    close_finder: Finder<'static>,
}

impl Delimiters {
    /// Build a delimiter pair, rejecting empty tokens.
    pub fn new(open: &str, close: &str) -> Result<Self, ConfigError> {
        if open.is_empty() {
            return Err(ConfigError::EmptyOpenDelimiter);
        }
        if close.is_empty() {
            return Err(ConfigError::EmptyCloseDelimiter);
        }
        Ok(Self::from_validated(open, close))
    }

    /// `${` / `}`: configuration variables.
    pub fn dollar_brace() -> Self {
        Self::from_validated("${", "}")
    }

    /// `#{` / `}`: bound parameter placeholders.
    pub fn hash_brace() -> Self {
        Self::from_validated("#{", "}")
    }

    fn from_validated(open: &str, close: &str) -> Self {
        debug_assert!(!open.is_empty() && !close.is_empty());
        Self {
            open: open.into(),
            close: close.into(),
            open_finder: Finder::new(open.as_bytes()).into_owned(),
            close_finder: Finder::new(close.as_bytes()).into_owned(),
        }
    }

    /// The open token.
    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The close token.
    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Substring finder for the open token.
    #[inline]
    pub fn open_finder(&self) -> &Finder<'static> {
        &self.open_finder
    }

    /// Substring finder for the close token.
    #[inline]
    pub fn close_finder(&self) -> &Finder<'static> {
        &self.close_finder
    }

    /// Returns `true` if `text` contains the open token anywhere.
    pub fn opens_in(&self, text: &str) -> bool {
        self.open_finder.find(text.as_bytes()).is_some()
    }
}

impl PartialEq for Delimiters {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open && self.close == other.close
    }
}

impl Eq for Delimiters {}
