//! The `render` command: substitute `${...}` variables.

use weft_scan::{Delimiters, TokenScanner};
use weft_subst::{substitute_variables, Properties, StrictVariableHandler, VariableOptions};

use super::{CliError, RenderOptions};

/// Substitute variables from `--props`, honouring the default-value and
/// strict flags. Flags override the reserved keys in the properties file.
pub fn render(text: &str, options: &RenderOptions) -> Result<String, CliError> {
    let props = match &options.props {
        Some(path) => Properties::load(path)?,
        None => Properties::new(),
    };

    let mut variables = VariableOptions::from_properties(&props);
    if options.defaults {
        variables.enable_default_value = true;
    }
    if let Some(sep) = &options.separator {
        variables = variables.with_default_values(sep.as_str());
    }

    if options.strict {
        let scanner = TokenScanner::with_delimiters(
            Delimiters::dollar_brace(),
            StrictVariableHandler::new(&props, &variables),
        );
        Ok(scanner.parse(text)?.into_owned())
    } else {
        Ok(substitute_variables(text, &props, &variables).into_owned())
    }
}
