//! Spectator-quark sectors and their parameter-key prefixes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HqetError};

/// Key prefix for the non-strange `B(*) -> D(*)` sector.
pub const NON_STRANGE_PREFIX: &str = "B(*)->D(*)";
/// Key prefix for the strange `B_s(*) -> D_s(*)` sector.
pub const STRANGE_PREFIX: &str = "B_s(*)->D_s(*)";

/// Spectator-quark sector of a heavy-to-heavy transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    /// Spectator `u` or `d`.
    NonStrange,
    /// Spectator `s`.
    Strange,
}

impl Sector {
    /// Both sectors in table order.
    pub const ALL: [Sector; 2] = [Sector::NonStrange, Sector::Strange];

    /// Parameter-key prefix owned by the sector.
    pub fn prefix(self) -> &'static str {
        match self {
            Sector::NonStrange => NON_STRANGE_PREFIX,
            Sector::Strange => STRANGE_PREFIX,
        }
    }

    /// Spin-averaged meson mass used to define the BGL-table `LambdaBar`.
    pub fn reference_mass(self) -> f64 {
        match self {
            Sector::NonStrange => 5.313,
            Sector::Strange => 5.403,
        }
    }

    /// Resolves the sector from a light-quark flavour label (`u`, `d` or `s`).
    pub fn from_flavour(q: &str) -> Result<Self, HqetError> {
        match q.chars().next() {
            Some('u') | Some('d') => Ok(Sector::NonStrange),
            Some('s') => Ok(Sector::Strange),
            _ => Err(HqetError::Config(
                ErrorInfo::new("option-unsupported", "unsupported spectator flavour")
                    .with_context("option", "q")
                    .with_context("value", q)
                    .with_hint("expected one of u,d,s"),
            )),
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Builds the `<prefix>::<symbol>@HQET` key used for IW-bank parameters.
pub fn hqet_key(prefix: &str, symbol: &str) -> String {
    format!("{prefix}::{symbol}@HQET")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavour_resolution_matches_spectators() {
        assert_eq!(Sector::from_flavour("u").unwrap(), Sector::NonStrange);
        assert_eq!(Sector::from_flavour("d").unwrap(), Sector::NonStrange);
        assert_eq!(Sector::from_flavour("s").unwrap(), Sector::Strange);
        let err = Sector::from_flavour("c").unwrap_err();
        assert_eq!(err.info().code, "option-unsupported");
        assert!(Sector::from_flavour("").is_err());
    }

    #[test]
    fn keys_follow_prefix_convention() {
        assert_eq!(
            hqet_key(Sector::Strange.prefix(), "xi'(1)"),
            "B_s(*)->D_s(*)::xi'(1)@HQET"
        );
    }
}
