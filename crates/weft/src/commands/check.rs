//! The `check` command: does the text need substitution at all.

use weft_scan::Delimiters;
use weft_subst::is_dynamic;

use super::CliError;

/// `dynamic` when `text` has a terminated, unescaped span, else `static`.
pub fn check(text: &str, open: &str, close: &str) -> Result<String, CliError> {
    let delimiters = Delimiters::new(open, close)?;
    let verdict = if is_dynamic(text, &delimiters) {
        "dynamic"
    } else {
        "static"
    };
    Ok(format!("{verdict}\n"))
}
