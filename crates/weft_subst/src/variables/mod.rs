//! `${key}` variable substitution.
//!
//! Variables resolve against a [`Properties`] set. With default values
//! enabled, `${key:fallback}` yields `fallback` when `key` is undefined.
//! An unresolved variable is written back as `${key}` so it stays visible
//! in the output; [`StrictVariableHandler`] turns it into an error instead.

use std::borrow::Cow;
use std::convert::Infallible;

use thiserror::Error;
use tracing::debug;
use weft_scan::{Delimiters, TokenHandler, TokenScanner};

use crate::Properties;

/// Property key that switches `${key:default}` handling on.
pub const ENABLE_DEFAULT_VALUE_KEY: &str = "weft.variables.enable-default-value";

/// Property key that overrides the key/default separator.
pub const DEFAULT_VALUE_SEPARATOR_KEY: &str = "weft.variables.default-value-separator";

const DEFAULT_SEPARATOR: &str = ":";

/// How variable expressions are interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableOptions {
    /// Split `key<sep>default` expressions. Off by default so that keys
    /// containing the separator keep working.
    pub enable_default_value: bool,
    /// Separator between key and default value.
    pub default_value_separator: String,
}

impl Default for VariableOptions {
    fn default() -> Self {
        Self {
            enable_default_value: false,
            default_value_separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl VariableOptions {
    /// Read options from the reserved keys of a property set.
    ///
    /// `true` (any case) enables default values; anything else leaves them
    /// off. An empty separator falls back to `:`.
    pub fn from_properties(props: &Properties) -> Self {
        let enable_default_value = props
            .get(ENABLE_DEFAULT_VALUE_KEY)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));
        let default_value_separator = props
            .get(DEFAULT_VALUE_SEPARATOR_KEY)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEPARATOR)
            .to_owned();
        Self {
            enable_default_value,
            default_value_separator,
        }
    }

    /// Enable default values with the given separator.
    #[must_use]
    pub fn with_default_values(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.enable_default_value = true;
        if !separator.is_empty() {
            self.default_value_separator = separator;
        }
        self
    }

    /// Split an expression into key and optional default.
    fn split<'e>(&self, expression: &'e str) -> (&'e str, Option<&'e str>) {
        if self.enable_default_value {
            if let Some((key, default)) = expression.split_once(&*self.default_value_separator) {
                return (key, Some(default));
            }
        }
        (expression, None)
    }
}

/// Resolves `${...}` expressions from a property set.
#[derive(Clone, Copy, Debug)]
pub struct VariableHandler<'p> {
    properties: &'p Properties,
    options: &'p VariableOptions,
}

impl<'p> VariableHandler<'p> {
    pub fn new(properties: &'p Properties, options: &'p VariableOptions) -> Self {
        Self {
            properties,
            options,
        }
    }

    /// Value or default for `expression`, or `None` if neither exists.
    pub fn resolve<'e>(&self, expression: &'e str) -> Option<&'e str>
    where
        'p: 'e,
    {
        let (key, default) = self.options.split(expression);
        self.properties.get(key).or(default)
    }
}

impl TokenHandler for VariableHandler<'_> {
    type Error = Infallible;

    fn handle_token(&self, expression: &str) -> Result<String, Infallible> {
        if let Some(value) = self.resolve(expression) {
            return Ok(value.to_owned());
        }
        debug!(expression, "unresolved variable left in place");
        Ok(format!("${{{expression}}}"))
    }
}

/// An undefined variable seen by [`StrictVariableHandler`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("undefined variable `{name}`")]
pub struct MissingVariable {
    pub name: String,
}

/// Like [`VariableHandler`], but an unresolved variable fails the scan.
#[derive(Clone, Copy, Debug)]
pub struct StrictVariableHandler<'p> {
    inner: VariableHandler<'p>,
}

impl<'p> StrictVariableHandler<'p> {
    pub fn new(properties: &'p Properties, options: &'p VariableOptions) -> Self {
        Self {
            inner: VariableHandler::new(properties, options),
        }
    }
}

impl TokenHandler for StrictVariableHandler<'_> {
    type Error = MissingVariable;

    fn handle_token(&self, expression: &str) -> Result<String, MissingVariable> {
        self.inner
            .resolve(expression)
            .map(str::to_owned)
            .ok_or_else(|| MissingVariable {
                name: self.inner.options.split(expression).0.to_owned(),
            })
    }
}

/// Substitute every `${...}` variable in `text`.
///
/// Never fails: unresolved variables are left as written.
pub fn substitute_variables<'t>(
    text: &'t str,
    properties: &Properties,
    options: &VariableOptions,
) -> Cow<'t, str> {
    let scanner = TokenScanner::with_delimiters(
        Delimiters::dollar_brace(),
        VariableHandler::new(properties, options),
    );
    match scanner.parse(text) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}
