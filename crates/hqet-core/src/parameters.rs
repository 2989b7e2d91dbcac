//! Named scalar parameter store.
//!
//! Every key the engine reads is registered by [`Parameters::defaults`]. Reads
//! and writes of unregistered keys fail instead of silently yielding zero, so a
//! misspelt override in a configuration file surfaces immediately.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ErrorInfo, HqetError};
use crate::sector::{hqet_key, Sector, NON_STRANGE_PREFIX, STRANGE_PREFIX};

/// Default IW-bank inputs for one sector.
struct SectorDefaults {
    m_bar: f64,
    xi: [f64; 5],
    chi2: [f64; 3],
    chi3: [f64; 2],
    eta: [f64; 3],
    l: [f64; 6],
    l_prime: [f64; 6],
}

const NON_STRANGE_DEFAULTS: SectorDefaults = SectorDefaults {
    m_bar: 5.313,
    xi: [-1.14, 1.88, -3.29, 0.0, 0.0],
    chi2: [-0.06, 0.0, 0.06],
    chi3: [0.04, -0.05],
    eta: [0.60, -0.02, -0.04],
    l: [0.12, -1.89, 0.86, -2.02, 3.79, 3.53],
    l_prime: [-5.78, -3.14, 0.06, -0.05, -1.40, 0.04],
};

const STRANGE_DEFAULTS: SectorDefaults = SectorDefaults {
    m_bar: 5.403,
    xi: [-1.25, 2.2, -2.0, 0.0, 0.0],
    chi2: [-0.07, 0.007, -0.1],
    chi3: [0.03, 0.05],
    eta: [0.72, 0.03, 0.1],
    l: [0.2, -2.2, 0.5, -1.0, 1.4, 2.5],
    l_prime: [-3.0, 1.0, -0.2, 0.3, 2.0, 0.3],
};

/// Symbols of the leading-power derivatives `xi^(n)(1)`, n = 1..=5.
pub const XI_SYMBOLS: [&str; 5] = ["xi'(1)", "xi''(1)", "xi'''(1)", "xi''''(1)", "xi'''''(1)"];

/// Meson masses read by the transition kinematics, in GeV.
pub const MESON_MASSES: [(&str, f64); 8] = [
    ("mass::B_d", 5.27966),
    ("mass::B_s", 5.36692),
    ("mass::B_d^*", 5.32471),
    ("mass::B_s^*", 5.4154),
    ("mass::D_u", 1.86484),
    ("mass::D_s", 1.96835),
    ("mass::D_u^*", 2.00685),
    ("mass::D_s^*", 2.1122),
];

/// Key of the strong coupling at the OPE scale.
pub const OPE_ALPHA_S: &str = "QCD::alpha_s(mu)@OPE";
/// Key of the b-quark pole mass used by the OPE bounds.
pub const OPE_M_B: &str = "mass::b(pole)@OPE";
/// Key of the c-quark pole mass used by the OPE bounds.
pub const OPE_M_C: &str = "mass::c(pole)@OPE";

/// Form-factor labels of the `B -> D^*` BGL parametrisation.
pub const BGL1997_DSTAR_LABELS: [&str; 4] = ["g", "f", "F1", "F2"];
/// Form-factor labels of the `B -> D` BGL parametrisation.
pub const BGL1997_D_LABELS: [&str; 3] = ["f+", "f0", "fT"];

/// Builds the key of the `index`-th BGL1997 coefficient of `label` for `process`.
pub fn bgl1997_key(process: &str, label: &str, index: usize) -> String {
    format!("{process}::a^{label}_{index}@BGL1997")
}

/// Ordered map of named scalar inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    values: BTreeMap<String, f64>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Parameters {
    /// Returns the store populated with every key the engine reads.
    pub fn defaults() -> Self {
        let mut values = BTreeMap::new();

        for (sector, defaults) in [
            (Sector::NonStrange, &NON_STRANGE_DEFAULTS),
            (Sector::Strange, &STRANGE_DEFAULTS),
        ] {
            let prefix = sector.prefix();
            let mut put = |symbol: &str, value: f64| {
                values.insert(hqet_key(prefix, symbol), value);
            };
            put("mBar", defaults.m_bar);
            put("a", 1.0);
            for (symbol, value) in XI_SYMBOLS.into_iter().zip(defaults.xi) {
                put(symbol, value);
            }
            put("chi_2(1)", defaults.chi2[0]);
            put("chi_2'(1)", defaults.chi2[1]);
            put("chi_2''(1)", defaults.chi2[2]);
            put("chi_3'(1)", defaults.chi3[0]);
            put("chi_3''(1)", defaults.chi3[1]);
            put("eta(1)", defaults.eta[0]);
            put("eta'(1)", defaults.eta[1]);
            put("eta''(1)", defaults.eta[2]);
            for k in 0..6 {
                put(&format!("l_{}(1)", k + 1), defaults.l[k]);
                put(&format!("l_{}'(1)", k + 1), defaults.l_prime[k]);
                put(&format!("l_{}''(1)", k + 1), 0.0);
            }
        }

        values.insert(hqet_key(NON_STRANGE_PREFIX, "n_f"), 2.0);
        values.insert(hqet_key(STRANGE_PREFIX, "n_s"), 1.0);
        values.insert(format!("{NON_STRANGE_PREFIX}::n_f@BGL1997"), 2.0);

        for label in BGL1997_DSTAR_LABELS {
            for index in 0..4 {
                values.insert(bgl1997_key("B->D^*", label, index), 0.0);
            }
        }
        for label in BGL1997_D_LABELS {
            for index in 0..4 {
                values.insert(bgl1997_key("B->D", label, index), 0.0);
            }
        }

        for (key, mass) in MESON_MASSES {
            values.insert(key.to_string(), mass);
        }

        values.insert(OPE_ALPHA_S.to_string(), 0.2249);
        values.insert(OPE_M_B.to_string(), 4.7266);
        values.insert(OPE_M_C.to_string(), 1.59564);

        Self { values }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<f64, HqetError> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| unknown_key(key))
    }

    /// Overwrites a registered parameter.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), HqetError> {
        if !value.is_finite() {
            return Err(HqetError::Parameter(
                ErrorInfo::new("parameter-non-finite", "parameter values must be finite")
                    .with_context("key", key)
                    .with_context("value", value.to_string()),
            ));
        }
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(unknown_key(key)),
        }
    }

    /// Applies a batch of overrides, failing on the first invalid entry.
    pub fn with_overrides<I, K>(mut self, overrides: I) -> Result<Self, HqetError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (key, value) in overrides {
            self.set(key.as_ref(), value)?;
            debug!(key = key.as_ref(), value, "parameter override");
        }
        Ok(self)
    }

    /// Returns `true` when `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over all registered keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Lists the registered keys that start with `prefix`.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .keys()
            .filter(move |key| key.starts_with(prefix))
            .map(String::as_str)
    }

    /// Number of registered parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no parameter is registered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn unknown_key(key: &str) -> HqetError {
    HqetError::Parameter(
        ErrorInfo::new("parameter-unknown", "parameter is not registered")
            .with_context("key", key)
            .with_hint("run `hqet params` to list the registered keys"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_both_sectors() {
        let params = Parameters::defaults();
        assert_eq!(params.get("B(*)->D(*)::xi'(1)@HQET").unwrap(), -1.14);
        assert_eq!(params.get("B_s(*)->D_s(*)::eta(1)@HQET").unwrap(), 0.72);
        assert_eq!(params.get("B(*)->D(*)::l_6'(1)@HQET").unwrap(), 0.04);
        assert_eq!(params.get("B->D^*::a^F2_3@BGL1997").unwrap(), 0.0);
        assert_eq!(params.keys_with_prefix(STRANGE_PREFIX).count(), 34);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut params = Parameters::defaults();
        let err = params.get("B(*)->D(*)::xi(1)@HQET").unwrap_err();
        assert_eq!(err.info().code, "parameter-unknown");
        let err = params.set("mass::B_u", 5.0).unwrap_err();
        assert_eq!(err.info().code, "parameter-unknown");
        let err = params.set("mass::B_d", f64::NAN).unwrap_err();
        assert_eq!(err.info().code, "parameter-non-finite");
    }

    #[test]
    fn overrides_apply_in_order() {
        let params = Parameters::defaults()
            .with_overrides([("mass::B_d", 5.0), ("mass::B_d", 5.1)])
            .unwrap();
        assert_eq!(params.get("mass::B_d").unwrap(), 5.1);
    }
}
