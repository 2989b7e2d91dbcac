//! Fixed HQET inputs following the 1S mass scheme.

use serde::{Deserialize, Serialize};

fn default_alpha_s() -> f64 {
    0.26
}

fn default_m_b_1s() -> f64 {
    4.71
}

fn default_lambda_1() -> f64 {
    -0.30
}

fn default_mass_gap() -> f64 {
    3.40
}

fn default_mu() -> f64 {
    2.31
}

/// Physics inputs shared by the form factors and the BGL table.
///
/// The values are fixed for production use. They are injectable so that the
/// heavy-quark symmetry limit (`alpha_s = 0`, `LambdaBar = 0`) can be reached
/// in tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HqetConstants {
    /// Strong coupling at the matching scale.
    #[serde(default = "default_alpha_s")]
    pub alpha_s: f64,
    /// b-quark mass in the 1S scheme, in GeV.
    #[serde(default = "default_m_b_1s")]
    pub m_b_1s: f64,
    /// Kinetic-energy parameter lambda_1, in GeV^2.
    #[serde(default = "default_lambda_1")]
    pub lambda_1: f64,
    /// Pole-mass difference m_b - m_c, in GeV.
    #[serde(default = "default_mass_gap")]
    pub mass_gap: f64,
    /// Matching scale sqrt(m_b m_c), in GeV. Reported only.
    #[serde(default = "default_mu")]
    pub mu: f64,
}

impl Default for HqetConstants {
    fn default() -> Self {
        Self {
            alpha_s: default_alpha_s(),
            m_b_1s: default_m_b_1s(),
            lambda_1: default_lambda_1(),
            mass_gap: default_mass_gap(),
            mu: default_mu(),
        }
    }
}

impl HqetConstants {
    /// `alpha_s / pi`, the expansion parameter of the Wilson coefficients.
    pub fn alpha_s_over_pi(&self) -> f64 {
        self.alpha_s / std::f64::consts::PI
    }

    /// b-quark pole mass at one loop from the 1S mass.
    pub fn m_b_pole(&self) -> f64 {
        self.m_b_1s * (1.0 + 2.0 / 9.0 * self.alpha_s * self.alpha_s)
    }

    /// c-quark pole mass.
    pub fn m_c_pole(&self) -> f64 {
        self.m_b_pole() - self.mass_gap
    }

    /// Heavy-quark mass ratio `m_c / m_b` entering the Wilson coefficients.
    pub fn z_mass(&self) -> f64 {
        self.m_c_pole() / self.m_b_pole()
    }

    /// `LambdaBar = mBar - m_b + lambda_1 / (2 m_b^1S)`.
    pub fn lambda_bar(&self, m_bar: f64) -> f64 {
        m_bar - self.m_b_pole() + self.lambda_1 / (2.0 * self.m_b_1s)
    }

    /// Power-correction expansion parameters for a spin-averaged mass `m_bar`.
    pub fn power_corrections(&self, m_bar: f64) -> PowerCorrections {
        let lambda_bar = self.lambda_bar(m_bar);
        PowerCorrections {
            eps_b: lambda_bar / (2.0 * self.m_b_pole()),
            eps_c: lambda_bar / (2.0 * self.m_c_pole()),
        }
    }
}

/// The 1/m_b and 1/m_c expansion parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCorrections {
    /// `LambdaBar / (2 m_b)`.
    pub eps_b: f64,
    /// `LambdaBar / (2 m_c)`.
    pub eps_c: f64,
}

impl PowerCorrections {
    /// Both expansion parameters set to zero.
    pub const NONE: PowerCorrections = PowerCorrections {
        eps_b: 0.0,
        eps_c: 0.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pole_masses_follow_1s_scheme() {
        let constants = HqetConstants::default();
        assert!((constants.m_b_pole() - 4.780754666666667).abs() < 1e-12);
        assert!((constants.m_c_pole() - 1.3807546666666668).abs() < 1e-12);
        assert!((constants.z_mass() - 0.288815210764493).abs() < 1e-12);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let constants: HqetConstants = serde_json::from_str(r#"{"alpha_s": 0.0}"#).unwrap();
        assert_eq!(constants.alpha_s, 0.0);
        assert_eq!(constants.m_b_1s, 4.71);
    }
}
