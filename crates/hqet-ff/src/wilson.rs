//! One-loop matching coefficients of the heavy-heavy currents.

use serde::{Deserialize, Serialize};

use crate::special::{omega, r, wz};

/// Labels used in diagnostics dumps, in field order.
pub const WILSON_LABELS: [&str; 11] = [
    "C_{S  }", "C_{P  }", "C_{V_1}", "C_{V_2}", "C_{V_3}", "C_{A_1}", "C_{A_2}", "C_{A_3}",
    "C_{T_1}", "C_{T_2}", "C_{T_3}",
];

/// The eleven coefficients `C_X(w, z)` at one kinematic point.
///
/// `z` is the heavy-quark mass ratio `m_c / m_b`. The coefficients are
/// computed together because they share `r(w)`, `Omega(w, z)` and `ln z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WilsonCoefficients {
    /// Scalar current.
    pub cs: f64,
    /// Pseudoscalar current.
    pub cp: f64,
    /// Vector current, first structure.
    pub cv1: f64,
    /// Vector current, second structure.
    pub cv2: f64,
    /// Vector current, third structure.
    pub cv3: f64,
    /// Axial-vector current, first structure.
    pub ca1: f64,
    /// Axial-vector current, second structure.
    pub ca2: f64,
    /// Axial-vector current, third structure.
    pub ca3: f64,
    /// Tensor current, first structure.
    pub ct1: f64,
    /// Tensor current, second structure.
    pub ct2: f64,
    /// Tensor current, third structure.
    pub ct3: f64,
}

impl WilsonCoefficients {
    /// Evaluates all coefficients at recoil `w` and mass ratio `z`.
    pub fn at(w: f64, z: f64) -> Self {
        let z2 = z * z;
        let z3 = z2 * z;
        let w2 = w * w;
        let w_z = wz(z);
        let lnz = z.ln();
        let rw = r(w);
        let om = omega(w, z);

        let d1 = w - w_z;
        let d2 = d1 * d1;

        let cs = (2.0 * z * d1 * om - (w - 1.0) * (z + 1.0).powi(2) * rw + (z2 - 1.0) * lnz)
            / (3.0 * z * d1);
        let cp = (2.0 * z * d1 * om - (w + 1.0) * (z - 1.0).powi(2) * rw + (z2 - 1.0) * lnz)
            / (3.0 * z * d1);

        let cv1 = (2.0 * (w + 1.0) * ((3.0 * w - 1.0) * z - z2 - 1.0) * rw
            + (12.0 * z * (w_z - w) - (z2 - 1.0) * lnz)
            + 4.0 * z * d1 * om)
            / (6.0 * z * d1);
        let cv2 = -(((4.0 * w2 + 2.0 * w) * z2 - (2.0 * w2 + 5.0 * w - 1.0) * z
            - (1.0 + w) * z3
            + 2.0)
            * rw
            + z * (2.0 * (z - 1.0) * (w_z - w)
                + (z2 - (4.0 * w - 2.0) * z + (3.0 - 2.0 * w)) * lnz))
            / (6.0 * z2 * d2);
        let cv3 = ((-2.0 * z3 + (2.0 * w2 + 5.0 * w - 1.0) * z2 - (4.0 * w2 + 2.0 * w) * z
            + w
            + 1.0)
            * rw
            + 2.0 * z * (z - 1.0) * (w_z - w)
            + ((3.0 - 2.0 * w) * z2 + (2.0 - 4.0 * w) * z + 1.0) * lnz)
            / (6.0 * z * d2);

        let ca1 = (2.0 * (w - 1.0) * ((3.0 * w + 1.0) * z - z2 - 1.0) * rw
            + (12.0 * z * (w_z - w) - (z2 - 1.0) * lnz)
            + 4.0 * z * d1 * om)
            / (6.0 * z * d1);
        let ca2 = -(((4.0 * w2 - 2.0 * w) * z2 + (2.0 * w2 - 5.0 * w - 1.0) * z
            + (1.0 - w) * z3
            + 2.0)
            * rw
            + z * (2.0 * (z + 1.0) * (w_z - w)
                + (z2 - (4.0 * w + 2.0) * z + (2.0 * w + 3.0)) * lnz))
            / (6.0 * z2 * d2);
        let ca3 = ((2.0 * z3 + (2.0 * w2 - 5.0 * w - 1.0) * z2 + (4.0 * w2 - 2.0 * w) * z - w
            + 1.0)
            * rw
            + 2.0 * z * (z + 1.0) * (w_z - w)
            - ((2.0 * w + 3.0) * z2 - (4.0 * w + 2.0) * z + 1.0) * lnz)
            / (6.0 * z * d2);

        let ct1 = ((w - 1.0) * ((4.0 * w + 2.0) * z - z2 - 1.0) * rw + 6.0 * z * (w_z - w)
            - (z2 - 1.0) * lnz
            + 2.0 * z * d1 * om)
            / (3.0 * z * d1);
        let ct2 = 2.0 * ((1.0 - w * z) * rw + z * lnz) / (3.0 * z * d1);
        let ct3 = 2.0 * ((w - z) * rw + lnz) / (3.0 * d1);

        Self {
            cs,
            cp,
            cv1,
            cv2,
            cv3,
            ca1,
            ca2,
            ca3,
            ct1,
            ct2,
            ct3,
        }
    }

    /// Coefficients in [`WILSON_LABELS`] order.
    pub fn to_array(&self) -> [f64; 11] {
        [
            self.cs, self.cp, self.cv1, self.cv2, self.cv3, self.ca1, self.ca2, self.ca3,
            self.ct1, self.ct2, self.ct3,
        ]
    }

    /// Label-value pairs in [`WILSON_LABELS`] order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, f64)> {
        WILSON_LABELS.into_iter().zip(self.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_are_nan_below_zero_recoil() {
        let c = WilsonCoefficients::at(0.9, 0.25);
        assert!(c.to_array().iter().all(|value| value.is_nan()));
    }

    #[test]
    fn scalar_and_pseudoscalar_are_opposite_at_zero_recoil() {
        let c = WilsonCoefficients::at(1.0, 0.25);
        assert!((c.cs + c.cp).abs() < 1e-12);
    }
}
