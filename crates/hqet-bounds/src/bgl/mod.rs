//! BGL z-expansion coefficients of the HQET form factors.
//!
//! The coefficients `a_0`, `a_1` and `a_2` of every form factor are closed
//! polynomials in a small set of inputs: `alpha_s / pi`, the power-correction
//! parameters `eps_b` and `eps_c`, and the zero-recoil Isgur-Wise derivatives.
//! Those inputs are snapshotted once per sector into a [`SectorInputs`]
//! record, after which every lookup is a pure polynomial evaluation.

mod non_strange;
mod strange;

use std::fmt;

use hqet_core::options::SU3F_LIMIT_SSLP;
use hqet_core::sector::NON_STRANGE_PREFIX;
use hqet_core::{hqet_key, ErrorInfo, HqetConstants, HqetError, Options, Parameters, Sector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Form factors carried by the BGL table, per spectator sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BglFormFactor {
    /// `B -> D` vector.
    V1,
    /// `B -> D` scalar.
    S1,
    /// `B -> D` tensor.
    FT,
    /// `B -> D^*` axial.
    A1,
    /// `B -> D^*` axial.
    A5,
    /// `B -> D^*` vector.
    V4,
    /// `B -> D^*` pseudoscalar.
    P1,
    /// `B -> D^*` tensor.
    T1,
    /// `B -> D^*` tensor.
    T2,
    /// `B -> D^*` tensor.
    T23,
    /// `B^* -> D` pseudoscalar.
    P2,
    /// `B^* -> D` vector.
    V5,
    /// `B^* -> D` axial.
    A2,
    /// `B^* -> D` axial.
    A6,
    /// `B^* -> D` tensor.
    T1Bar,
    /// `B^* -> D` tensor.
    T2Bar,
    /// `B^* -> D` tensor.
    T23Bar,
    /// `B^* -> D^*` scalar.
    S2,
    /// `B^* -> D^*` scalar.
    S3,
    /// `B^* -> D^*` pseudoscalar.
    P3,
    /// `B^* -> D^*` vector.
    V2,
    /// `B^* -> D^*` vector.
    V3,
    /// `B^* -> D^*` vector.
    V6,
    /// `B^* -> D^*` vector.
    V7,
    /// `B^* -> D^*` axial.
    A3,
    /// `B^* -> D^*` axial.
    A4,
    /// `B^* -> D^*` axial.
    A7,
    /// `B^* -> D^*` tensor.
    T4,
    /// `B^* -> D^*` tensor.
    T5,
    /// `B^* -> D^*` tensor.
    T6,
    /// `B^* -> D^*` tensor.
    T7,
    /// `B^* -> D^*` tensor.
    T8,
    /// `B^* -> D^*` tensor.
    T9,
    /// `B^* -> D^*` tensor.
    T10,
}

impl BglFormFactor {
    /// Every form factor in table order.
    pub const ALL: [BglFormFactor; 34] = [
        BglFormFactor::V1,
        BglFormFactor::S1,
        BglFormFactor::FT,
        BglFormFactor::A1,
        BglFormFactor::A5,
        BglFormFactor::V4,
        BglFormFactor::P1,
        BglFormFactor::T1,
        BglFormFactor::T2,
        BglFormFactor::T23,
        BglFormFactor::P2,
        BglFormFactor::V5,
        BglFormFactor::A2,
        BglFormFactor::A6,
        BglFormFactor::T1Bar,
        BglFormFactor::T2Bar,
        BglFormFactor::T23Bar,
        BglFormFactor::S2,
        BglFormFactor::S3,
        BglFormFactor::P3,
        BglFormFactor::V2,
        BglFormFactor::V3,
        BglFormFactor::V6,
        BglFormFactor::V7,
        BglFormFactor::A3,
        BglFormFactor::A4,
        BglFormFactor::A7,
        BglFormFactor::T4,
        BglFormFactor::T5,
        BglFormFactor::T6,
        BglFormFactor::T7,
        BglFormFactor::T8,
        BglFormFactor::T9,
        BglFormFactor::T10,
    ];

    /// Conventional spelling, e.g. `fT` or `T23bar`.
    pub fn name(self) -> &'static str {
        match self {
            BglFormFactor::V1 => "V1",
            BglFormFactor::S1 => "S1",
            BglFormFactor::FT => "fT",
            BglFormFactor::A1 => "A1",
            BglFormFactor::A5 => "A5",
            BglFormFactor::V4 => "V4",
            BglFormFactor::P1 => "P1",
            BglFormFactor::T1 => "T1",
            BglFormFactor::T2 => "T2",
            BglFormFactor::T23 => "T23",
            BglFormFactor::P2 => "P2",
            BglFormFactor::V5 => "V5",
            BglFormFactor::A2 => "A2",
            BglFormFactor::A6 => "A6",
            BglFormFactor::T1Bar => "T1bar",
            BglFormFactor::T2Bar => "T2bar",
            BglFormFactor::T23Bar => "T23bar",
            BglFormFactor::S2 => "S2",
            BglFormFactor::S3 => "S3",
            BglFormFactor::P3 => "P3",
            BglFormFactor::V2 => "V2",
            BglFormFactor::V3 => "V3",
            BglFormFactor::V6 => "V6",
            BglFormFactor::V7 => "V7",
            BglFormFactor::A3 => "A3",
            BglFormFactor::A4 => "A4",
            BglFormFactor::A7 => "A7",
            BglFormFactor::T4 => "T4",
            BglFormFactor::T5 => "T5",
            BglFormFactor::T6 => "T6",
            BglFormFactor::T7 => "T7",
            BglFormFactor::T8 => "T8",
            BglFormFactor::T9 => "T9",
            BglFormFactor::T10 => "T10",
        }
    }

    /// Looks up a form factor by its conventional spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ff| ff.name() == name)
    }

    /// Parses a qualified name: a trailing `s` (as in `T23bars`) selects the
    /// strange sector.
    pub fn parse(name: &str) -> Result<(Sector, Self), HqetError> {
        if let Some(ff) = Self::from_name(name) {
            return Ok((Sector::NonStrange, ff));
        }
        name.strip_suffix('s')
            .and_then(Self::from_name)
            .map(|ff| (Sector::Strange, ff))
            .ok_or_else(|| {
                HqetError::Config(
                    ErrorInfo::new("form-factor-unknown", "form factor is not in the BGL table")
                        .with_context("name", name)
                        .with_hint("append `s` to a name such as `T1bar` for the strange sector"),
                )
            })
    }

    /// Name qualified by sector, the inverse of [`BglFormFactor::parse`].
    pub fn qualified_name(self, sector: Sector) -> String {
        match sector {
            Sector::NonStrange => self.name().to_string(),
            Sector::Strange => format!("{}s", self.name()),
        }
    }
}

impl fmt::Display for BglFormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs of the BGL polynomials for one spectator sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorInputs {
    /// `alpha_s / pi`.
    pub alpha_s: f64,
    /// `LambdaBar / (2 m_b)`.
    pub eps_b: f64,
    /// `LambdaBar / (2 m_c)`.
    pub eps_c: f64,
    /// `xi'(1)`.
    pub xi_p: f64,
    /// `xi''(1)`.
    pub xi_pp: f64,
    /// `chi_2(1)`.
    pub chi2: f64,
    /// `chi_2'(1)`.
    pub chi2_p: f64,
    /// `chi_3'(1)`.
    pub chi3_p: f64,
    /// `chi_3''(1)`.
    pub chi3_pp: f64,
    /// `eta(1)`.
    pub eta: f64,
    /// `eta'(1)`.
    pub eta_p: f64,
    /// `eta''(1)`.
    pub eta_pp: f64,
    /// `l_k(1)`, k = 1..=6.
    pub l: [f64; 6],
    /// `l_k'(1)`, k = 1..=6.
    pub l_p: [f64; 6],
}

impl SectorInputs {
    /// Reads the inputs of `sector` from the parameter store.
    ///
    /// `LambdaBar` is built from the sector's fixed reference mass rather than
    /// its `mBar` parameter. With `SU3F-limit-sslp = 1` the strange sector
    /// reads the non-strange `l_k` parameters.
    pub fn from_parameters(
        params: &Parameters,
        options: &Options,
        sector: Sector,
        constants: &HqetConstants,
    ) -> Result<Self, HqetError> {
        let prefix = sector.prefix();
        let sslp_prefix = match sector {
            Sector::Strange if options.resolve(&SU3F_LIMIT_SSLP)? == "1" => NON_STRANGE_PREFIX,
            _ => prefix,
        };
        let read = |symbol: &str| params.get(&hqet_key(prefix, symbol));

        let mut l = [0.0; 6];
        let mut l_p = [0.0; 6];
        for k in 0..6 {
            l[k] = params.get(&hqet_key(sslp_prefix, &format!("l_{}(1)", k + 1)))?;
            l_p[k] = params.get(&hqet_key(sslp_prefix, &format!("l_{}'(1)", k + 1)))?;
        }

        let corrections = constants.power_corrections(sector.reference_mass());
        Ok(Self {
            alpha_s: constants.alpha_s_over_pi(),
            eps_b: corrections.eps_b,
            eps_c: corrections.eps_c,
            xi_p: read("xi'(1)")?,
            xi_pp: read("xi''(1)")?,
            chi2: read("chi_2(1)")?,
            chi2_p: read("chi_2'(1)")?,
            chi3_p: read("chi_3'(1)")?,
            chi3_pp: read("chi_3''(1)")?,
            eta: read("eta(1)")?,
            eta_p: read("eta'(1)")?,
            eta_pp: read("eta''(1)")?,
            l,
            l_p,
        })
    }
}

/// One row of the coefficient table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BglEntry {
    /// Sector-qualified form-factor name.
    pub name: String,
    /// Spectator sector.
    pub sector: Sector,
    /// `[a_0, a_1, a_2]`.
    pub coefficients: [f64; 3],
}

/// BGL coefficients of both spectator sectors.
#[derive(Debug, Clone, PartialEq)]
pub struct BglCoefficients {
    non_strange: SectorInputs,
    strange: SectorInputs,
}

impl BglCoefficients {
    /// Binds the table to `params` and `options` with the fixed HQET inputs.
    pub fn new(params: &Parameters, options: &Options) -> Result<Self, HqetError> {
        Self::with_constants(params, options, &HqetConstants::default())
    }

    /// Binds the table with explicit HQET inputs.
    pub fn with_constants(
        params: &Parameters,
        options: &Options,
        constants: &HqetConstants,
    ) -> Result<Self, HqetError> {
        let non_strange =
            SectorInputs::from_parameters(params, options, Sector::NonStrange, constants)?;
        let strange = SectorInputs::from_parameters(params, options, Sector::Strange, constants)?;
        debug!(
            alpha_s_over_pi = non_strange.alpha_s,
            eps_b = non_strange.eps_b,
            eps_c = non_strange.eps_c,
            eps_b_s = strange.eps_b,
            eps_c_s = strange.eps_c,
            "bound BGL coefficient table"
        );
        Ok(Self::from_inputs(non_strange, strange))
    }

    /// Builds the table from pre-assembled inputs.
    pub fn from_inputs(non_strange: SectorInputs, strange: SectorInputs) -> Self {
        Self {
            non_strange,
            strange,
        }
    }

    /// Inputs bound for `sector`.
    pub fn inputs(&self, sector: Sector) -> &SectorInputs {
        match sector {
            Sector::NonStrange => &self.non_strange,
            Sector::Strange => &self.strange,
        }
    }

    /// `[a_0, a_1, a_2]` of `ff` in `sector`.
    pub fn coefficients(&self, sector: Sector, ff: BglFormFactor) -> [f64; 3] {
        match sector {
            Sector::NonStrange => non_strange::coefficients(ff, &self.non_strange),
            Sector::Strange => strange::coefficients(ff, &self.strange),
        }
    }

    /// The `z^0` coefficient.
    pub fn a0(&self, sector: Sector, ff: BglFormFactor) -> f64 {
        self.coefficients(sector, ff)[0]
    }

    /// The `z^1` coefficient.
    pub fn a1(&self, sector: Sector, ff: BglFormFactor) -> f64 {
        self.coefficients(sector, ff)[1]
    }

    /// The `z^2` coefficient.
    pub fn a2(&self, sector: Sector, ff: BglFormFactor) -> f64 {
        self.coefficients(sector, ff)[2]
    }

    /// Every coefficient of the requested sectors, in table order.
    pub fn table(&self, sectors: &[Sector]) -> Vec<BglEntry> {
        sectors
            .iter()
            .flat_map(|&sector| {
                BglFormFactor::ALL.into_iter().map(move |ff| BglEntry {
                    name: ff.qualified_name(sector),
                    sector,
                    coefficients: self.coefficients(sector, ff),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for ff in BglFormFactor::ALL {
            for sector in Sector::ALL {
                let parsed = BglFormFactor::parse(&ff.qualified_name(sector)).unwrap();
                assert_eq!(parsed, (sector, ff));
            }
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["T3", "fTss", "", "s", "t1bar"] {
            let err = BglFormFactor::parse(name).unwrap_err();
            assert_eq!(err.info().code, "form-factor-unknown", "{name}");
        }
    }

    #[test]
    fn su3_limit_swaps_only_the_l_parameters() {
        let params = Parameters::defaults();
        let constants = HqetConstants::default();
        let own = SectorInputs::from_parameters(&params, &Options::new(), Sector::Strange, &constants)
            .unwrap();
        let limit = SectorInputs::from_parameters(
            &params,
            &Options::new().with("SU3F-limit-sslp", "1"),
            Sector::Strange,
            &constants,
        )
        .unwrap();
        assert_eq!(own.xi_p, -1.25);
        assert_eq!(limit.xi_p, -1.25);
        assert_eq!(own.l[0], 0.2);
        assert_eq!(limit.l[0], 0.12);
        assert_eq!(limit.l_p[5], 0.04);
    }
}
