//! The `bind` command: rewrite `#{...}` placeholders and list their mappings.

use std::fmt::Write;

use weft_subst::{Marker, ParameterSource, PlaceholderHandler};

use super::CliError;

/// Bound text, then `-- parameters:` and one `N: source [k=v, ...]` line
/// per placeholder.
pub fn bind(text: &str, marker: Marker) -> Result<String, CliError> {
    let bound = PlaceholderHandler::new().with_marker(marker).bind(text)?;
    let mut out = bound.text;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("-- parameters:\n");
    for (i, mapping) in bound.mappings.iter().enumerate() {
        let _ = write!(out, "{}: ", i + 1);
        match &mapping.source {
            ParameterSource::Property(name) => out.push_str(name),
            ParameterSource::Expression(expr) => {
                let _ = write!(out, "({expr})");
            }
        }
        if !mapping.attributes.is_empty() {
            let attributes: Vec<String> = mapping
                .attributes
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            let _ = write!(out, " [{}]", attributes.join(", "));
        }
        out.push('\n');
    }
    Ok(out)
}
