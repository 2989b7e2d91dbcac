//! Enumerated string options and their catalogue.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HqetError};

/// Declaration of a single enumerated option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Option key.
    pub key: &'static str,
    /// Exhaustive set of accepted values.
    pub allowed: &'static [&'static str],
    /// Value used when the option is not configured.
    pub default: &'static str,
}

/// Ansatz of the leading-power Isgur-Wise function.
pub const MODEL_LP: OptionSpec = OptionSpec {
    key: "model-lp",
    allowed: &["power-series", "exponential"],
    default: "power-series",
};

/// Highest z power retained in the leading-power function.
pub const Z_ORDER_LP: OptionSpec = OptionSpec {
    key: "z-order-lp",
    allowed: &["2", "3", "4", "5"],
    default: "3",
};

/// Highest z power retained in the subleading-power functions.
pub const Z_ORDER_SLP: OptionSpec = OptionSpec {
    key: "z-order-slp",
    allowed: &["1", "2"],
    default: "2",
};

/// Highest z power retained in the subsubleading-power functions.
pub const Z_ORDER_SSLP: OptionSpec = OptionSpec {
    key: "z-order-sslp",
    allowed: &["0", "1", "2"],
    default: "1",
};

/// Use the non-strange subsubleading parameters for strange transitions.
pub const SU3F_LIMIT_SSLP: OptionSpec = OptionSpec {
    key: "SU3F-limit-sslp",
    allowed: &["0", "1"],
    default: "0",
};

/// Highest BGL order summed into the unitarity bounds.
pub const Z_ORDER_BOUND: OptionSpec = OptionSpec {
    key: "z-order-bound",
    allowed: &["1", "2"],
    default: "2",
};

/// Light spectator flavour selecting the IW-parameter sector.
pub const SPECTATOR_FLAVOUR: OptionSpec = OptionSpec {
    key: "q",
    allowed: &["u", "d", "s"],
    default: "u",
};

/// Every option understood by the engine.
pub const CATALOGUE: [OptionSpec; 7] = [
    MODEL_LP,
    Z_ORDER_LP,
    Z_ORDER_SLP,
    Z_ORDER_SSLP,
    SU3F_LIMIT_SSLP,
    Z_ORDER_BOUND,
    SPECTATOR_FLAVOUR,
];

/// Ordered map of configured option values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: BTreeMap<String, String>,
}

impl Options {
    /// Creates an empty option set where every option takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Sets `key` to `value`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the raw configured value, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns `true` when `key` was configured explicitly.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Resolves the value of `spec`, falling back to its default.
    pub fn resolve(&self, spec: &OptionSpec) -> Result<&str, HqetError> {
        let value = match self.values.get(spec.key) {
            Some(value) => value.as_str(),
            None => return Ok(spec.default),
        };
        if spec.allowed.iter().any(|allowed| *allowed == value) {
            Ok(value)
        } else {
            Err(HqetError::Config(
                ErrorInfo::new("option-unsupported", "option value is not supported")
                    .with_context("option", spec.key)
                    .with_context("value", value)
                    .with_hint(format!("expected one of {}", spec.allowed.join(","))),
            ))
        }
    }

    /// Resolves a numeric switch such as a z-order.
    pub fn resolve_order(&self, spec: &OptionSpec) -> Result<u32, HqetError> {
        let value = self.resolve(spec)?;
        value.parse::<u32>().map_err(|err| {
            HqetError::Config(
                ErrorInfo::new("option-unsupported", err.to_string())
                    .with_context("option", spec.key)
                    .with_context("value", value),
            )
        })
    }

    /// Checks every configured key and value against `specs`.
    pub fn validate(&self, specs: &[OptionSpec]) -> Result<(), HqetError> {
        for key in self.values.keys() {
            let spec = specs.iter().find(|spec| spec.key == key.as_str()).ok_or_else(|| {
                HqetError::Config(
                    ErrorInfo::new("option-unknown", "option is not recognised")
                        .with_context("option", key.as_str()),
                )
            })?;
            self.resolve(spec)?;
        }
        Ok(())
    }

    /// Iterates over the configured options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let options = Options::new();
        assert_eq!(options.resolve(&MODEL_LP).unwrap(), "power-series");
        assert_eq!(options.resolve_order(&Z_ORDER_LP).unwrap(), 3);
        assert_eq!(options.resolve_order(&Z_ORDER_BOUND).unwrap(), 2);
    }

    #[test]
    fn unsupported_values_fail_fast() {
        let options = Options::new().with("z-order-bound", "3");
        let err = options.resolve(&Z_ORDER_BOUND).unwrap_err();
        assert_eq!(err.info().code, "option-unsupported");
        assert_eq!(err.info().context["value"], "3");
    }

    #[test]
    fn validate_rejects_unknown_keys() {
        let options = Options::new().with("z-order-lp", "4").with("z-oder-slp", "1");
        let err = options.validate(&CATALOGUE).unwrap_err();
        assert_eq!(err.info().code, "option-unknown");
        assert!(Options::new().with("q", "s").validate(&CATALOGUE).is_ok());
    }
}
