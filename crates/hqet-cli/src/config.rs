//! Run configuration: one YAML (or JSON) document merged over the defaults.
//!
//! ```yaml
//! parameters:
//!   "B(*)->D(*)::xi'(1)@HQET": -1.2
//! options:
//!   z-order-lp: 2
//!   q: s
//! constants:
//!   alpha_s: 0.0
//! ```

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use hqet_core::options::CATALOGUE;
use hqet_core::{ErrorInfo, HqetConstants, HqetError, Options, Parameters};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionValue {
    Text(String),
    Integer(i64),
}

impl OptionValue {
    fn into_string(self) -> String {
        match self {
            OptionValue::Text(text) => text,
            OptionValue::Integer(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    parameters: BTreeMap<String, f64>,
    #[serde(default)]
    options: BTreeMap<String, OptionValue>,
    #[serde(default)]
    constants: HqetConstants,
}

/// Parameters, options and constants of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Defaults with the configured overrides applied.
    pub parameters: Parameters,
    /// Configured options, validated against the catalogue.
    pub options: Options,
    /// HQET inputs; the fixed values unless overridden.
    pub constants: HqetConstants,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parameters: Parameters::defaults(),
            options: Options::new(),
            constants: HqetConstants::default(),
        }
    }
}

/// Decodes a configuration document.
pub fn parse_config(text: &str) -> Result<RunConfig, HqetError> {
    if text.trim().is_empty() {
        return Ok(RunConfig::default());
    }
    let file: ConfigFile = serde_yaml::from_str(text).map_err(|err| {
        HqetError::Serde(
            ErrorInfo::new("yaml-decode", err.to_string())
                .with_hint("expected `parameters`, `options` and `constants` sections"),
        )
    })?;

    let parameters = Parameters::defaults().with_overrides(file.parameters)?;
    let mut options = Options::new();
    for (key, value) in file.options {
        options.insert(key, value.into_string());
    }
    options.validate(&CATALOGUE)?;

    Ok(RunConfig {
        parameters,
        options,
        constants: file.constants,
    })
}

/// Loads the configuration at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<RunConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    info!(
        path = %path.display(),
        options = config.options.iter().count(),
        "loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_option_values_are_accepted() {
        let config = parse_config("options:\n  z-order-lp: 2\n  model-lp: exponential\n").unwrap();
        assert_eq!(config.options.get("z-order-lp"), Some("2"));
        assert_eq!(config.options.get("model-lp"), Some("exponential"));
    }

    #[test]
    fn empty_documents_yield_defaults() {
        assert_eq!(parse_config("  \n").unwrap(), RunConfig::default());
    }
}
