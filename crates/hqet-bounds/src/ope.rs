//! OPE susceptibilities of the `b -> c` currents.
//!
//! `chi_T(u)` is the transverse and `chi_L(u)` the longitudinal two-loop
//! susceptibility at `q^2 = 0`, each the sum of a perturbative part and the
//! quark- and gluon-condensate corrections. Channels of opposite parity are
//! obtained by flipping the sign of `u = m_c / m_b`.
//!
//! Both functions have removable singularities: at `u = 0` through the
//! `ln u^2` terms, and at `|u| = 1` where the perturbative part vanishes to
//! high order while the prefactor `(1 - u^2)^-n` blows up. Near either point
//! the closed form is replaced by its analytic limit.

use std::f64::consts::PI;

use hqet_core::parameters::{OPE_ALPHA_S, OPE_M_B, OPE_M_C};
use hqet_core::{dilog, HqetError, Parameters};
use tracing::{debug, info, warn};

use crate::channel::Channel;
use crate::report::{BoundEntry, BoundKind, BoundReport};

/// Quark condensate `<qbar q>` in GeV^3.
pub const QUARK_CONDENSATE: f64 = -0.02 / 12.0;
/// Gluon condensate `<alpha_s / pi G^2>` in GeV^4.
pub const GLUON_CONDENSATE: f64 = 0.02;

/// Below this `|u|` the `u = 0` values are used.
const SMALL_U: f64 = 1.0e-5;
/// Below this `1 - |u|` the perturbative parts use their series.
const NEAR_UNIT: f64 = 0.02;

/// `(k, c_0, c_1)`: the perturbative part is `sum (c_0 + c_1 a) e^k`.
type Series = [(i32, f64, f64)];

const T_PLUS: [(i32, f64, f64); 6] = [
    (5, 8.0 / 5.0, 656.0 / 81.0),
    (6, -12.0 / 5.0, -328.0 / 27.0),
    (7, 33.0 / 35.0, 619.0 / 162.0),
    (8, -1.0 / 14.0, 37.0 / 324.0),
    (9, 1.0 / 105.0, 4237.0 / 19845.0),
    (10, 1.0 / 210.0, 4237.0 / 39690.0),
];

const T_MINUS: [(i32, f64, f64); 6] = [
    (5, 4.0 / 5.0, 1378.0 / 405.0),
    (6, -6.0 / 5.0, -689.0 / 135.0),
    (7, 3.0 / 5.0, 10111.0 / 4050.0),
    (8, -1.0 / 10.0, -3221.0 / 8100.0),
    (9, -1.0 / 420.0, -18707.0 / 793800.0),
    (10, -1.0 / 840.0, -18707.0 / 1587600.0),
];

const L_PLUS: [(i32, f64, f64); 4] = [
    (5, 3.0 / 10.0, 77.0 / 54.0),
    (6, -3.0 / 20.0, -77.0 / 108.0),
    (7, -3.0 / 280.0, -943.0 / 5400.0),
    (8, -3.0 / 560.0, -943.0 / 10800.0),
];

const L_MINUS: [(i32, f64, f64); 6] = [
    (3, 2.0, 14.0 / 3.0),
    (4, -3.0, -7.0),
    (5, 6.0 / 5.0, 284.0 / 135.0),
    (6, -1.0 / 10.0, 31.0 / 270.0),
    (7, 3.0 / 280.0, 257.0 / 1512.0),
    (8, 3.0 / 560.0, 257.0 / 3024.0),
];

/// `pert / (1 - u^2)^n` from the series in `e = 1 - |u|`, using
/// `1 - u^2 = e (2 - e)`.
fn series_over(series: &Series, a: f64, e: f64, n: i32) -> f64 {
    let sum: f64 = series
        .iter()
        .map(|&(k, c0, c1)| (c0 + c1 * a) * e.powi(k - n))
        .sum();
    sum / (2.0 - e).powi(n)
}

/// OPE-side bounds of the four current channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeBounds {
    alpha_s_over_pi: f64,
    m_b: f64,
    m_c: f64,
}

impl OpeBounds {
    /// Reads `alpha_s(mu)` and the pole masses from `params`.
    pub fn new(params: &Parameters) -> Result<Self, HqetError> {
        let bounds = Self {
            alpha_s_over_pi: params.get(OPE_ALPHA_S)? / PI,
            m_b: params.get(OPE_M_B)?,
            m_c: params.get(OPE_M_C)?,
        };
        debug!(
            alpha_s_over_pi = bounds.alpha_s_over_pi,
            m_b = bounds.m_b,
            m_c = bounds.m_c,
            "bound OPE susceptibilities"
        );
        Ok(bounds)
    }

    /// Mass ratio `u = m_c / m_b`.
    pub fn u(&self) -> f64 {
        self.m_c / self.m_b
    }

    /// Transverse susceptibility `chi_T(u)`.
    pub fn chi_t(&self, u: f64) -> f64 {
        let (a, m_b) = (self.alpha_s_over_pi, self.m_b);
        let (qq, g2) = (QUARK_CONDENSATE, GLUON_CONDENSATE);
        if !(u.abs() < 1.0) {
            warn!(u, "chi_T is undefined for |u| >= 1");
            return f64::NAN;
        }
        if u.abs() < SMALL_U {
            let pert = 3.0 / 32.0 + a * (75.0 + 12.0 * PI * PI) / 576.0;
            let cond = -qq - g2 / (12.0 * m_b);
            return pert / (m_b * PI).powi(2) + cond / m_b.powi(5);
        }

        let (u2, u3, u4) = (u * u, u * u * u, u * u * u * u);
        let (u5, u6, u7) = (u4 * u, u4 * u2, u4 * u3);
        let v = 1.0 - u2;
        let ln = u2.ln();
        let cond = -qq / 2.0 * (2.0 - 3.0 * u + 2.0 * u2)
            - g2 / (24.0 * m_b * v * v)
                * (v * (2.0 - 104.0 * u + 148.0 * u2 - 270.0 * u3 + 145.0 * u4 - 104.0 * u5
                    + 5.0 * u6
                    - 2.0 * u7)
                    - 12.0
                        * u
                        * (3.0 - 5.0 * u + 17.0 * u2 - 15.0 * u3 + 17.0 * u4 - 5.0 * u5
                            + 3.0 * u6)
                        * ln);
        let cond = cond / (m_b * v).powi(5);

        let e = 1.0 - u.abs();
        let pert = if e < NEAR_UNIT {
            debug!(u, "chi_T near |u| = 1, using series");
            let series: &Series = if u > 0.0 { &T_PLUS } else { &T_MINUS };
            series_over(series, a, e, 5)
        } else {
            let one_loop = (v
                * (3.0 + 4.0 * u - 21.0 * u2 + 40.0 * u3 - 21.0 * u4 + 4.0 * u5 + 3.0 * u6)
                + 12.0 * u3 * (2.0 - 3.0 * u + 2.0 * u2) * ln)
                / 32.0;
            let two_loop = a / (576.0 * v)
                * (v * v
                    * (75.0 + 360.0 * u - 1031.0 * u2 + 1776.0 * u3 - 1031.0 * u4
                        + 360.0 * u5
                        + 75.0 * u6)
                    + 4.0
                        * u
                        * v
                        * (18.0 - 99.0 * u + 732.0 * u2 - 1010.0 * u3 + 732.0 * u4
                            - 99.0 * u5
                            + 18.0 * u6)
                        * ln
                    + 4.0
                        * u3
                        * (108.0 - 324.0 * u + 648.0 * u2 - 456.0 * u3 + 132.0 * u4
                            + 59.0 * u5
                            - 12.0 * u6
                            - 9.0 * u7)
                        * ln
                        * ln
                    + 8.0
                        * v.powi(3)
                        * (9.0 + 12.0 * u - 32.0 * u2 + 12.0 * u3 + 9.0 * u4)
                        * dilog(v));
            (one_loop + two_loop) / v.powi(5)
        };
        pert / (m_b * PI).powi(2) + cond
    }

    /// Longitudinal susceptibility `chi_L(u)`.
    pub fn chi_l(&self, u: f64) -> f64 {
        let (a, m_b) = (self.alpha_s_over_pi, self.m_b);
        let (qq, g2) = (QUARK_CONDENSATE, GLUON_CONDENSATE);
        if !(u.abs() < 1.0) {
            warn!(u, "chi_L is undefined for |u| >= 1");
            return f64::NAN;
        }
        if u.abs() < SMALL_U {
            let pert = 1.0 / 8.0 + a * (1.0 + 4.0 * PI * PI / 3.0) / 48.0;
            let cond = qq + g2 / (12.0 * m_b);
            return pert / (PI * PI) + cond / m_b.powi(3);
        }

        let (u2, u3, u4) = (u * u, u * u * u, u * u * u * u);
        let u5 = u4 * u;
        let v = 1.0 - u2;
        let ln = u2.ln();
        let cond = qq
            + g2 / (12.0 * m_b * v * v)
                * (v * (1.0 - 21.0 * u + 10.0 * u2 - 20.0 * u3 + u4 - u5)
                    - 3.0 * u * (3.0 - 2.0 * u + 8.0 * u2 - 2.0 * u3 + 3.0 * u4) * ln);
        let cond = cond / (m_b * v).powi(3);

        let e = 1.0 - u.abs();
        let pert = if e < NEAR_UNIT {
            debug!(u, "chi_L near |u| = 1, using series");
            let series: &Series = if u > 0.0 { &L_PLUS } else { &L_MINUS };
            series_over(series, a, e, 3)
        } else {
            let one_loop = (v * (1.0 + u + u2) * (1.0 - 4.0 * u + u2) - 6.0 * u3 * ln) / 8.0;
            let two_loop = a / (48.0 * v)
                * (v * v * (1.0 - 36.0 * u - 22.0 * u2 - 36.0 * u3 + u4)
                    - 2.0 * u * v * (9.0 + 4.0 * u + 66.0 * u2 + 4.0 * u3 + 9.0 * u4) * ln
                    - 4.0 * u3 * (9.0 + 18.0 * u2 - 2.0 * u3 - 3.0 * u4 + u5) * ln * ln
                    + 8.0 * v.powi(3) * (1.0 - 3.0 * u + u2) * dilog(v));
            (one_loop + two_loop) / v.powi(3)
        };
        pert / (PI * PI) + cond
    }

    /// Bound of `channel`; the tensor channels are not covered.
    pub fn bound(&self, channel: Channel) -> Option<f64> {
        let u = self.u();
        match channel {
            Channel::ZeroPlus => Some(self.chi_l(u)),
            Channel::ZeroMinus => Some(self.chi_l(-u)),
            Channel::OnePlus => Some(self.chi_t(-u)),
            Channel::OneMinus => Some(self.chi_t(u)),
            Channel::OneMinusTensor | Channel::OnePlusTensor => None,
        }
    }

    /// The four current channels.
    pub fn report(&self) -> BoundReport {
        let entries: Vec<BoundEntry> = Channel::CURRENTS
            .into_iter()
            .filter_map(|channel| {
                self.bound(channel)
                    .map(|value| BoundEntry { channel, value })
            })
            .collect();
        info!(u = self.u(), "OPE bounds evaluated");
        BoundReport {
            kind: BoundKind::Ope,
            z_order: None,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> OpeBounds {
        OpeBounds::new(&Parameters::defaults()).unwrap()
    }

    #[test]
    fn small_u_limit_joins_the_closed_form() {
        let ope = defaults();
        let chis: [fn(&OpeBounds, f64) -> f64; 2] = [OpeBounds::chi_t, OpeBounds::chi_l];
        for f in chis {
            let limit = f(&ope, 0.0);
            for u in [2.0e-5, -2.0e-5] {
                assert!(((f(&ope, u) - limit) / limit).abs() < 1e-3, "u = {u}");
            }
        }
    }

    #[test]
    fn unit_series_joins_the_closed_form() {
        let ope = defaults();
        let chis: [fn(&OpeBounds, f64) -> f64; 2] = [OpeBounds::chi_t, OpeBounds::chi_l];
        for f in chis {
            for u in [0.98_f64, -0.98] {
                let below = f(&ope, u - 1.0e-12 * u.signum());
                let above = f(&ope, u + 1.0e-12 * u.signum());
                assert!(((below - above) / above).abs() < 1e-6, "u = {u}");
            }
        }
    }

    #[test]
    fn unphysical_ratios_yield_nan() {
        let ope = defaults();
        for u in [1.0, -1.0, 1.5, f64::NAN] {
            assert!(ope.chi_t(u).is_nan());
            assert!(ope.chi_l(u).is_nan());
        }
    }
}
