//! Two-body kinematics and the conformal z map.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HqetError};

/// Källén function `lambda(a, b, c)`.
pub fn kallen(a: f64, b: f64, c: f64) -> f64 {
    a * a + b * b + c * c - 2.0 * (a * b + a * c + b * c)
}

/// Mass pair of an initial and a final hadron, in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    m1: f64,
    m2: f64,
}

impl Kinematics {
    /// Creates the map for initial mass `m1` and final mass `m2`.
    pub fn new(m1: f64, m2: f64) -> Result<Self, HqetError> {
        if !(m1.is_finite() && m2.is_finite() && m1 > 0.0 && m2 > 0.0) {
            return Err(HqetError::Kinematics(
                ErrorInfo::new("mass-invalid", "hadron masses must be finite and positive")
                    .with_context("m1", m1.to_string())
                    .with_context("m2", m2.to_string()),
            ));
        }
        Ok(Self { m1, m2 })
    }

    /// Initial-state mass.
    pub fn m1(&self) -> f64 {
        self.m1
    }

    /// Final-state mass.
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Mass ratio `m2 / m1`.
    pub fn ratio(&self) -> f64 {
        self.m2 / self.m1
    }

    /// Recoil `w(q^2) = (m1^2 + m2^2 - q^2) / (2 m1 m2)`.
    pub fn w(&self, q2: f64) -> f64 {
        (self.m1 * self.m1 + self.m2 * self.m2 - q2) / (2.0 * self.m1 * self.m2)
    }

    /// Momentum transfer `q^2(w) = m1^2 + m2^2 - 2 m1 m2 w`.
    pub fn q2(&self, w: f64) -> f64 {
        self.m1 * self.m1 + self.m2 * self.m2 - 2.0 * self.m1 * self.m2 * w
    }

    /// Zero-recoil endpoint `(m1 - m2)^2`.
    pub fn q2_max(&self) -> f64 {
        (self.m1 - self.m2) * (self.m1 - self.m2)
    }

    /// Returns `true` when `q2` maps to a physical recoil `w >= 1`.
    pub fn is_physical(&self, q2: f64) -> bool {
        self.w(q2) >= 1.0
    }

    /// `lambda(m1^2, m2^2, q^2)`.
    pub fn lambda(&self, q2: f64) -> f64 {
        kallen(self.m1 * self.m1, self.m2 * self.m2, q2)
    }
}

/// Conformal map `z(w) = (sqrt(w+1) - sqrt(2) a) / (sqrt(w+1) + sqrt(2) a)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZMap {
    a: f64,
}

impl ZMap {
    /// Creates the map for mapping parameter `a`.
    pub fn new(a: f64) -> Result<Self, HqetError> {
        if !a.is_finite() || a <= 0.0 {
            return Err(HqetError::Config(
                ErrorInfo::new("zmap-invalid-a", "z-map parameter must be finite and positive")
                    .with_context("a", a.to_string())
                    .with_hint("the IW expansion coefficients divide by powers of a"),
            ));
        }
        Ok(Self { a })
    }

    /// Mapping parameter `a`.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Evaluates `z(w)`.
    pub fn z(&self, w: f64) -> f64 {
        let s = (w + 1.0).sqrt();
        let t = std::f64::consts::SQRT_2 * self.a;
        (s - t) / (s + t)
    }

    /// Expansion point `z(1) = (1 - a) / (1 + a)`.
    pub fn z0(&self) -> f64 {
        (1.0 - self.a) / (1.0 + self.a)
    }

    /// Offset `z(w) - z(1)` used by every IW series.
    pub fn dz(&self, w: f64) -> f64 {
        self.z(w) - self.z0()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoil_and_momentum_transfer_invert() {
        let kin = Kinematics::new(5.27942, 1.86723).unwrap();
        assert!((kin.w(kin.q2(1.37)) - 1.37).abs() < 1e-14);
        assert!((kin.w(kin.q2_max()) - 1.0).abs() < 1e-14);
        assert!(!kin.is_physical(kin.q2_max() + 0.1));
        assert!(kin.lambda(kin.q2_max()).abs() < 1e-10);
    }

    #[test]
    fn invalid_inputs_fail_fast() {
        assert_eq!(
            Kinematics::new(0.0, 1.0).unwrap_err().info().code,
            "mass-invalid"
        );
        assert_eq!(ZMap::new(0.0).unwrap_err().info().code, "zmap-invalid-a");
        assert!(ZMap::new(-1.0).is_err());
        assert!(ZMap::new(f64::NAN).is_err());
    }

    #[test]
    fn z_vanishes_at_unit_a_and_zero_recoil() {
        let map = ZMap::new(1.0).unwrap();
        assert_eq!(map.z(1.0), 0.0);
        assert!((map.z(1.10) - 0.01219690).abs() < 1e-8);
        assert!((map.z(1.05) - 0.00617307).abs() < 1e-8);
    }
}
