//! The eight heavy-to-heavy transitions and their mass assignments.

use std::fmt;
use std::str::FromStr;

use hqet_core::{ErrorInfo, HqetError, Kinematics, Parameters, Sector};
use serde::{Deserialize, Serialize};

/// Spin of the initial and final heavy mesons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinStructure {
    /// Pseudoscalar to pseudoscalar.
    PToP,
    /// Pseudoscalar to vector.
    PToV,
    /// Vector to pseudoscalar.
    VToP,
    /// Vector to vector.
    VToV,
}

/// Where a transition takes its hadron masses from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassSource {
    /// Read from the parameter store.
    Parameters(&'static str, &'static str),
    /// Fixed numbers, in GeV.
    Fixed(f64, f64),
}

/// A `b -> c` transition between ground-state heavy mesons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// `B -> D`.
    BToD,
    /// `B_s -> D_s`.
    BsToDs,
    /// `B -> D^*`.
    BToDstar,
    /// `B_s -> D_s^*`.
    BsToDsstar,
    /// `B^* -> D`.
    BstarToD,
    /// `B_s^* -> D_s`.
    BsstarToDs,
    /// `B^* -> D^*`.
    BstarToDstar,
    /// `B_s^* -> D_s^*`.
    BsstarToDsstar,
}

impl Transition {
    /// All transitions, non-strange before strange within each spin structure.
    pub const ALL: [Transition; 8] = [
        Transition::BToD,
        Transition::BsToDs,
        Transition::BToDstar,
        Transition::BsToDsstar,
        Transition::BstarToD,
        Transition::BsstarToDs,
        Transition::BstarToDstar,
        Transition::BsstarToDsstar,
    ];

    /// Process name, e.g. `B->D^*`.
    pub fn name(self) -> &'static str {
        match self {
            Transition::BToD => "B->D",
            Transition::BsToDs => "B_s->D_s",
            Transition::BToDstar => "B->D^*",
            Transition::BsToDsstar => "B_s->D_s^*",
            Transition::BstarToD => "B^*->D",
            Transition::BsstarToDs => "B_s^*->D_s",
            Transition::BstarToDstar => "B^*->D^*",
            Transition::BsstarToDsstar => "B_s^*->D_s^*",
        }
    }

    /// Spin structure of the transition.
    pub fn spin_structure(self) -> SpinStructure {
        match self {
            Transition::BToD | Transition::BsToDs => SpinStructure::PToP,
            Transition::BToDstar | Transition::BsToDsstar => SpinStructure::PToV,
            Transition::BstarToD | Transition::BsstarToDs => SpinStructure::VToP,
            Transition::BstarToDstar | Transition::BsstarToDsstar => SpinStructure::VToV,
        }
    }

    /// Spectator sector; decides which IW-bank prefix is read.
    pub fn sector(self) -> Sector {
        match self {
            Transition::BToD
            | Transition::BToDstar
            | Transition::BstarToD
            | Transition::BstarToDstar => Sector::NonStrange,
            _ => Sector::Strange,
        }
    }

    /// Mass assignment of the transition.
    pub fn mass_source(self) -> MassSource {
        match self {
            Transition::BToD => MassSource::Parameters("mass::B_d", "mass::D_u"),
            Transition::BsToDs => MassSource::Parameters("mass::B_s", "mass::D_s"),
            Transition::BToDstar => MassSource::Parameters("mass::B_d", "mass::D_u^*"),
            Transition::BsToDsstar => MassSource::Parameters("mass::B_s", "mass::D_s^*"),
            Transition::BstarToD => MassSource::Parameters("mass::B_d^*", "mass::D_u"),
            Transition::BsstarToDs => MassSource::Parameters("mass::B_s^*", "mass::D_s"),
            Transition::BstarToDstar => MassSource::Fixed(5.324, 2.010),
            Transition::BsstarToDsstar => MassSource::Parameters("mass::B_s^*", "mass::D_s^*"),
        }
    }

    /// Resolves the kinematic map of the transition.
    pub fn kinematics(self, params: &Parameters) -> Result<Kinematics, HqetError> {
        match self.mass_source() {
            MassSource::Parameters(initial, final_state) => {
                Kinematics::new(params.get(initial)?, params.get(final_state)?)
            }
            MassSource::Fixed(m1, m2) => Kinematics::new(m1, m2),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transition {
    type Err = HqetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Transition::ALL
            .into_iter()
            .find(|transition| transition.name() == trimmed)
            .ok_or_else(|| {
                let known: Vec<&str> = Transition::ALL.iter().map(|t| t.name()).collect();
                HqetError::Config(
                    ErrorInfo::new("transition-unknown", "unknown transition")
                        .with_context("transition", trimmed)
                        .with_hint(format!("expected one of {}", known.join(","))),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for transition in Transition::ALL {
            assert_eq!(transition.name().parse::<Transition>().unwrap(), transition);
        }
        let err = "B->K".parse::<Transition>().unwrap_err();
        assert_eq!(err.info().code, "transition-unknown");
    }

    #[test]
    fn strange_transitions_read_the_strange_bank() {
        let strange = Transition::ALL
            .iter()
            .filter(|t| t.sector() == Sector::Strange)
            .count();
        assert_eq!(strange, 4);
        assert_eq!(Transition::BsToDsstar.spin_structure(), SpinStructure::PToV);
    }

    #[test]
    fn vector_vector_non_strange_masses_are_fixed() {
        let kinematics = Transition::BstarToDstar
            .kinematics(&Parameters::defaults())
            .unwrap();
        assert_eq!(kinematics.m1(), 5.324);
        assert_eq!(kinematics.m2(), 2.010);
    }
}
