//! Kinematic functions `r(w)` and `Omega(w, z)` of the one-loop matching.
//!
//! Both have a removable singularity at zero recoil and switch to their
//! analytic limits once `w - 1` drops below [`NEAR_THRESHOLD`]. Arguments with
//! `w < 1` are outside the physical region and yield NaN.

use hqet_core::{dilog, NEAR_THRESHOLD};

/// `w_z = (z + 1/z) / 2`, the recoil at which the matching denominators vanish.
pub fn wz(z: f64) -> f64 {
    0.5 * (z + 1.0 / z)
}

/// `r(w) = ln(w + sqrt(w^2 - 1)) / sqrt(w^2 - 1)`.
pub fn r(w: f64) -> f64 {
    if w.is_nan() || w < 1.0 {
        return f64::NAN;
    }
    if w - 1.0 < NEAR_THRESHOLD {
        r_limit(w)
    } else {
        r_closed(w)
    }
}

/// Closed form of `r(w)`; loses precision as `w -> 1`.
pub fn r_closed(w: f64) -> f64 {
    let root = (w * w - 1.0).sqrt();
    (w + root).ln() / root
}

/// Expansion of `r(w)` to first order in `w - 1`.
pub fn r_limit(w: f64) -> f64 {
    1.0 - (w - 1.0) / 3.0
}

/// `Omega(w, z)` built from four dilogarithms of `1 - w_pm z` and `1 - w_pm^2`.
pub fn omega(w: f64, z: f64) -> f64 {
    if w.is_nan() || w < 1.0 {
        return f64::NAN;
    }
    if w - 1.0 < NEAR_THRESHOLD {
        omega_limit(w, z)
    } else {
        omega_closed(w, z)
    }
}

/// Closed form of `Omega(w, z)`; loses precision as `w -> 1`.
pub fn omega_closed(w: f64, z: f64) -> f64 {
    let lnz = z.ln();
    let root = (w * w - 1.0).sqrt();
    let w_plus = w + root;
    let w_minus = w - root;

    let li2 = 2.0 * (dilog(1.0 - w_minus * z) - dilog(1.0 - w_plus * z))
        + dilog(1.0 - w_plus * w_plus)
        - dilog(1.0 - w_minus * w_minus);

    w / (2.0 * root) * li2 - w * r(w) * lnz + 1.0
}

/// Expansion of `Omega(w, z)` to first order in `w - 1`.
///
/// The zeroth order is `-1 - (1 + z) / (1 - z) ln z`; the slope keeps the
/// branch switch continuous to `O((w - 1)^2)`.
pub fn omega_limit(w: f64, z: f64) -> f64 {
    let lnz = z.ln();
    let at_one = -1.0 - (1.0 + z) / (1.0 - z) * lnz;
    let z2 = z * z;
    let z3 = z2 * z;
    let slope = 2.0 * (8.0 - 18.0 * z + 18.0 * z2 - 8.0 * z3 + 3.0 * (1.0 + z3) * lnz)
        / (9.0 * (z - 1.0).powi(3));
    at_one + (w - 1.0) * slope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unphysical_recoil_is_nan() {
        assert!(r(0.99).is_nan());
        assert!(omega(0.5, 0.25).is_nan());
    }

    #[test]
    fn limits_hold_at_zero_recoil() {
        assert_eq!(r(1.0), 1.0);
        let z: f64 = 0.25;
        assert_eq!(omega(1.0, z), -1.0 - (1.0 + z) / (1.0 - z) * z.ln());
    }

    #[test]
    fn wz_is_symmetric_under_inversion() {
        assert!((wz(0.25) - wz(4.0)).abs() < 1e-15);
        assert_eq!(wz(1.0), 1.0);
    }
}
