//! Substitution handlers for the weft scanner.
//!
//! Each handler plugs into [`weft_scan::TokenScanner`] and gives a delimiter
//! pair its meaning:
//!
//! - [`variables`]: `${key}` / `${key:default}` resolved from [`Properties`]
//! - [`placeholders`]: `#{name, attr=value}` rewritten to a positional
//!   marker, collecting [`ParameterMapping`]s in order
//! - [`dynamic`]: detects whether a text has any span at all
//!
//! None of these know where their text comes from or where it goes.

pub mod dynamic;
pub mod placeholders;
pub mod properties;
pub mod variables;

pub use dynamic::is_dynamic;
pub use placeholders::{
    bind_placeholders, BoundText, Marker, ParameterMapping, ParameterSource, PlaceholderError,
    PlaceholderHandler,
};
pub use properties::{Properties, PropertiesError};
pub use variables::{
    substitute_variables, MissingVariable, StrictVariableHandler, VariableHandler,
    VariableOptions,
};
