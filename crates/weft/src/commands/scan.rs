//! The `scan` command: list span expressions in order.

use std::cell::RefCell;
use std::convert::Infallible;

use weft_scan::{from_fn, TokenScanner};

use super::CliError;

/// One expression per line, exactly as the scanner hands them out.
pub fn scan(text: &str, open: &str, close: &str) -> Result<String, CliError> {
    let seen = RefCell::new(String::new());
    let scanner = TokenScanner::new(
        open,
        close,
        from_fn(|expr: &str| {
            let mut seen = seen.borrow_mut();
            seen.push_str(expr);
            seen.push('\n');
            Ok::<_, Infallible>(String::new())
        }),
    )?;
    match scanner.parse(text) {
        Ok(_) => {}
        Err(never) => match never {},
    }
    drop(scanner);
    Ok(seen.into_inner())
}
