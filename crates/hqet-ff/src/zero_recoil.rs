//! Zero-recoil Isgur-Wise inputs of the sector selected by the spectator flavour.

use hqet_core::options::SPECTATOR_FLAVOUR;
use hqet_core::{hqet_key, HqetError, Options, Parameters, Sector};
use serde::{Deserialize, Serialize};

/// Snapshot of the zero-recoil parameters of one sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsgurWiseParameters {
    sector: Sector,
    xi_p: f64,
    xi_pp: f64,
    xi_ppp: f64,
    chi2: f64,
    chi2_p: f64,
    chi3_p: f64,
    eta: f64,
    eta_p: f64,
}

impl IsgurWiseParameters {
    /// Resolves the sector from option `q` and reads its parameters.
    pub fn new(params: &Parameters, options: &Options) -> Result<Self, HqetError> {
        let sector = Sector::from_flavour(options.resolve(&SPECTATOR_FLAVOUR)?)?;
        let prefix = sector.prefix();
        let read = |symbol: &str| params.get(&hqet_key(prefix, symbol));
        Ok(Self {
            sector,
            xi_p: read("xi'(1)")?,
            xi_pp: read("xi''(1)")?,
            xi_ppp: read("xi'''(1)")?,
            chi2: read("chi_2(1)")?,
            chi2_p: read("chi_2'(1)")?,
            chi3_p: read("chi_3'(1)")?,
            eta: read("eta(1)")?,
            eta_p: read("eta'(1)")?,
        })
    }

    /// Sector the parameters were read from.
    pub fn sector(&self) -> Sector {
        self.sector
    }

    /// `xi'(1)`.
    pub fn xi_prime(&self) -> f64 {
        self.xi_p
    }

    /// `xi''(1)`.
    pub fn xi_double_prime(&self) -> f64 {
        self.xi_pp
    }

    /// `xi'''(1)`.
    pub fn xi_triple_prime(&self) -> f64 {
        self.xi_ppp
    }

    /// `chi_2(1)`.
    pub fn chi2(&self) -> f64 {
        self.chi2
    }

    /// `chi_2'(1)`.
    pub fn chi2_prime(&self) -> f64 {
        self.chi2_p
    }

    /// `chi_3'(1)`.
    pub fn chi3_prime(&self) -> f64 {
        self.chi3_p
    }

    /// `eta(1)`.
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// `eta'(1)`.
    pub fn eta_prime(&self) -> f64 {
        self.eta_p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectator_selects_sector() {
        let params = Parameters::defaults();
        let ud = IsgurWiseParameters::new(&params, &Options::new()).unwrap();
        assert_eq!(ud.sector(), Sector::NonStrange);
        assert_eq!(ud.xi_prime(), -1.14);

        let s = IsgurWiseParameters::new(&params, &Options::new().with("q", "s")).unwrap();
        assert_eq!(s.sector(), Sector::Strange);
        assert_eq!(s.eta(), 0.72);

        let err = IsgurWiseParameters::new(&params, &Options::new().with("q", "c")).unwrap_err();
        assert_eq!(err.info().code, "option-unsupported");
    }
}
