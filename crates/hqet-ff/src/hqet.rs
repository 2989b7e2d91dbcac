//! Assembly of the HQET-basis form factors.
//!
//! [`HqetBase`] owns everything the four spin structures share: the mass pair,
//! the Isgur-Wise bank and the power-correction parameters. Evaluating it at a
//! momentum transfer yields an [`HqetPoint`], from which every h-function of
//! every spin structure follows algebraically.

use hqet_core::{
    hqet_key, HqetConstants, HqetError, Kinematics, Options, Parameters, PowerCorrections,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::iw::IsgurWiseBank;
use crate::process::Transition;
use crate::wilson::WilsonCoefficients;

/// Shared state of one transition's form factors.
#[derive(Debug, Clone, PartialEq)]
pub struct HqetBase {
    transition: Transition,
    kinematics: Kinematics,
    bank: IsgurWiseBank,
    constants: HqetConstants,
    corrections: PowerCorrections,
}

impl HqetBase {
    /// Binds `transition` to the given parameters and options.
    pub fn new(
        transition: Transition,
        params: &Parameters,
        options: &Options,
    ) -> Result<Self, HqetError> {
        Self::with_constants(transition, params, options, HqetConstants::default())
    }

    /// Like [`HqetBase::new`] with explicit HQET constants.
    pub fn with_constants(
        transition: Transition,
        params: &Parameters,
        options: &Options,
        constants: HqetConstants,
    ) -> Result<Self, HqetError> {
        let prefix = transition.sector().prefix();
        let kinematics = transition.kinematics(params)?;
        let bank = IsgurWiseBank::from_parameters(params, options, prefix)?;
        let m_bar = params.get(&hqet_key(prefix, "mBar"))?;
        let corrections = constants.power_corrections(m_bar);

        debug!(
            transition = %transition,
            prefix,
            model = ?bank.model(),
            z_order_lp = bank.orders().lp,
            z_order_slp = bank.orders().slp,
            z_order_sslp = bank.orders().sslp,
            eps_b = corrections.eps_b,
            eps_c = corrections.eps_c,
            "bound HQET form factors"
        );

        Ok(Self {
            transition,
            kinematics,
            bank,
            constants,
            corrections,
        })
    }

    /// The bound transition.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Mass pair of the transition.
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// The Isgur-Wise bank of the transition's sector.
    pub fn bank(&self) -> &IsgurWiseBank {
        &self.bank
    }

    /// HQET constants in use.
    pub fn constants(&self) -> &HqetConstants {
        &self.constants
    }

    /// `eps_b` and `eps_c` of the transition's sector.
    pub fn corrections(&self) -> PowerCorrections {
        self.corrections
    }

    /// Recoil at momentum transfer `q2`.
    pub fn w(&self, q2: f64) -> f64 {
        self.kinematics.w(q2)
    }

    /// Momentum transfer at recoil `w`.
    pub fn q2(&self, w: f64) -> f64 {
        self.kinematics.q2(w)
    }

    /// Conformal variable at momentum transfer `q2`.
    pub fn z(&self, q2: f64) -> f64 {
        self.bank.map().z(self.w(q2))
    }

    /// Leading Isgur-Wise function.
    pub fn xi(&self, q2: f64) -> f64 {
        self.bank.xi(self.w(q2))
    }

    /// Subleading function `chi_2`.
    pub fn chi2(&self, q2: f64) -> f64 {
        self.bank.chi2(self.w(q2))
    }

    /// Subleading function `chi_3`.
    pub fn chi3(&self, q2: f64) -> f64 {
        self.bank.chi3(self.w(q2))
    }

    /// Subleading function `eta`.
    pub fn eta(&self, q2: f64) -> f64 {
        self.bank.eta(self.w(q2))
    }

    /// Evaluates every input of the h-functions at `q2`.
    pub fn point(&self, q2: f64) -> HqetPoint {
        let w = self.w(q2);
        HqetPoint {
            w,
            xi: self.bank.xi(w),
            big_l: PowerCombinations::at(
                w,
                self.bank.chi2(w),
                self.bank.chi3(w),
                self.bank.eta(w),
            ),
            ssl: self.bank.l(w),
            wilson: WilsonCoefficients::at(w, self.constants.z_mass()),
            alpha_s: self.constants.alpha_s_over_pi(),
            eps_b: self.corrections.eps_b,
            eps_c: self.corrections.eps_c,
        }
    }
}

/// The combinations `L_1..L_6` of the subleading functions.
///
/// `chi_1` is absorbed into the definition of `xi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCombinations {
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
    pub l4: f64,
    pub l5: f64,
    pub l6: f64,
}

impl PowerCombinations {
    /// Builds the combinations at recoil `w`.
    pub fn at(w: f64, chi2: f64, chi3: f64, eta: f64) -> Self {
        Self {
            l1: -4.0 * (w - 1.0) * chi2 + 12.0 * chi3,
            l2: -4.0 * chi3,
            l3: 4.0 * chi2,
            l4: 2.0 * eta - 1.0,
            l5: -1.0,
            l6: -2.0 * (1.0 + eta) / (w + 1.0),
        }
    }
}

/// Inputs of the h-functions at one kinematic point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HqetPoint {
    /// Recoil.
    pub w: f64,
    /// `xi(w)`.
    pub xi: f64,
    /// Subleading combinations `L_1..L_6`.
    pub big_l: PowerCombinations,
    /// Subsubleading functions `l_1(w)..l_6(w)`.
    pub ssl: [f64; 6],
    /// Matching coefficients at `(w, m_c / m_b)`.
    pub wilson: WilsonCoefficients,
    /// `alpha_s / pi`.
    pub alpha_s: f64,
    /// `LambdaBar / (2 m_b)`.
    pub eps_b: f64,
    /// `LambdaBar / (2 m_c)`.
    pub eps_c: f64,
}

/// h-functions of a pseudoscalar to pseudoscalar transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PToPAmplitudes {
    pub h_plus: f64,
    pub h_minus: f64,
    pub h_s: f64,
    pub h_t: f64,
}

/// h-functions of a pseudoscalar to vector transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PToVAmplitudes {
    pub h_a1: f64,
    pub h_a2: f64,
    pub h_a3: f64,
    pub h_v: f64,
    pub h_t1: f64,
    pub h_t2: f64,
    pub h_t3: f64,
}

/// h-functions of a vector to pseudoscalar transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VToPAmplitudes {
    pub h_abar_1: f64,
    pub h_abar_2: f64,
    pub h_abar_3: f64,
    pub h_vbar: f64,
}

/// h-functions `h_1..h_10` of a vector to vector transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VToVAmplitudes {
    /// `h[k - 1]` holds `h_k`.
    pub h: [f64; 10],
}

impl PToPAmplitudes {
    /// Label-value pairs in diagnostics order.
    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("h_+", self.h_plus),
            ("h_-", self.h_minus),
            ("h_S", self.h_s),
            ("h_T", self.h_t),
        ]
    }
}

impl PToVAmplitudes {
    /// Label-value pairs in diagnostics order.
    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("h_A1", self.h_a1),
            ("h_A2", self.h_a2),
            ("h_A3", self.h_a3),
            ("h_V", self.h_v),
            ("h_T1", self.h_t1),
            ("h_T2", self.h_t2),
            ("h_T3", self.h_t3),
        ]
    }
}

impl VToPAmplitudes {
    /// Label-value pairs in diagnostics order.
    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("h_Abar1", self.h_abar_1),
            ("h_Abar2", self.h_abar_2),
            ("h_Abar3", self.h_abar_3),
            ("h_Vbar", self.h_vbar),
        ]
    }
}

const VTOV_LABELS: [&str; 10] = [
    "h_1", "h_2", "h_3", "h_4", "h_5", "h_6", "h_7", "h_8", "h_9", "h_10",
];

impl VToVAmplitudes {
    /// Label-value pairs in diagnostics order.
    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        VTOV_LABELS.into_iter().zip(self.h).collect()
    }
}

impl HqetPoint {
    /// `h_+`, `h_-`, `h_S` and `h_T`.
    pub fn p_to_p(&self) -> PToPAmplitudes {
        let Self {
            w,
            xi,
            alpha_s: a,
            eps_b: eb,
            eps_c: ec,
            ..
        } = *self;
        let c = &self.wilson;
        let big = &self.big_l;
        let [s1, _, _, s4, _, _] = self.ssl;
        let f = (w - 1.0) / (w + 1.0);

        let h_plus = 1.0
            + a * (c.cv1 + (w + 1.0) / 2.0 * (c.cv2 + c.cv3))
            + (ec + eb) * big.l1
            + ec * ec * s1;
        let h_minus = a * (w + 1.0) / 2.0 * (c.cv2 - c.cv3) + (ec - eb) * big.l4 + ec * ec * s4;
        let h_s = 1.0 + a * c.cs + (ec + eb) * (big.l1 - f * big.l4) + ec * ec * (s1 - f * s4);
        let h_t = 1.0 + a * (c.ct1 - c.ct2 + c.ct3) + (ec + eb) * (big.l1 - big.l4)
            + ec * ec * (s1 - s4);

        PToPAmplitudes {
            h_plus: xi * h_plus,
            h_minus: xi * h_minus,
            h_s: xi * h_s,
            h_t: xi * h_t,
        }
    }

    /// `h_A1..h_A3`, `h_V` and `h_T1..h_T3`.
    pub fn p_to_v(&self) -> PToVAmplitudes {
        let Self {
            w,
            xi,
            alpha_s: a,
            eps_b: eb,
            eps_c: ec,
            ..
        } = *self;
        let c = &self.wilson;
        let big = &self.big_l;
        let [_, s2, s3, _, s5, s6] = self.ssl;
        let f = (w - 1.0) / (w + 1.0);

        let h_a1 = 1.0
            + a * c.ca1
            + ec * (big.l2 - f * big.l5)
            + eb * (big.l1 - f * big.l4)
            + ec * ec * (s2 - f * s5);
        let h_a2 = a * c.ca2 + ec * (big.l3 + big.l6) + ec * ec * (s3 + s6);
        let h_a3 = 1.0
            + a * (c.ca1 + c.ca3)
            + ec * (big.l2 - big.l3 + big.l6 - big.l5)
            + eb * (big.l1 - big.l4)
            + ec * ec * (s2 - s3 + s6 - s5);
        let h_v = 1.0
            + a * c.cv1
            + ec * (big.l2 - big.l5)
            + eb * (big.l1 - big.l4)
            + ec * ec * (s2 - s5);
        let h_t1 = 1.0
            + a * (c.ct1 + (w - 1.0) / 2.0 * (c.ct2 - c.ct3))
            + ec * big.l2
            + eb * big.l1
            + ec * ec * s2;
        let h_t2 =
            a * (w + 1.0) / 2.0 * (c.ct2 + c.ct3) + ec * big.l5 - eb * big.l4 + ec * ec * s5;
        let h_t3 = a * c.ct2 + ec * (big.l6 - big.l3) + ec * ec * (s6 - s3);

        PToVAmplitudes {
            h_a1: xi * h_a1,
            h_a2: xi * h_a2,
            h_a3: xi * h_a3,
            h_v: xi * h_v,
            h_t1: xi * h_t1,
            h_t2: xi * h_t2,
            h_t3: xi * h_t3,
        }
    }

    /// `h_Abar1..h_Abar3` and `h_Vbar`.
    pub fn v_to_p(&self) -> VToPAmplitudes {
        let Self {
            w,
            xi,
            alpha_s: a,
            eps_b: eb,
            eps_c: ec,
            ..
        } = *self;
        let c = &self.wilson;
        let big = &self.big_l;
        let [s1, _, _, s4, _, _] = self.ssl;
        let f = (w - 1.0) / (w + 1.0);

        let h_abar_1 = 1.0
            + a * c.ca1
            + ec * (big.l1 - f * big.l4)
            + eb * (big.l2 - f * big.l5)
            + ec * ec * (s1 - f * s4);
        let h_abar_2 = -a * c.ca3 + eb * (big.l3 + big.l6);
        let h_abar_3 = 1.0
            + a * (c.ca1 - c.ca2)
            + eb * (big.l2 - big.l3 + big.l6 - big.l5)
            + ec * (big.l1 - big.l4)
            + ec * ec * (s1 - s4);
        let h_vbar = 1.0
            + a * c.cv1
            + eb * (big.l2 - big.l5)
            + ec * (big.l1 - big.l4)
            + ec * ec * (s1 - s4);

        VToPAmplitudes {
            h_abar_1: xi * h_abar_1,
            h_abar_2: xi * h_abar_2,
            h_abar_3: xi * h_abar_3,
            h_vbar: xi * h_vbar,
        }
    }

    /// `h_1..h_10`.
    pub fn v_to_v(&self) -> VToVAmplitudes {
        let Self {
            w,
            xi,
            alpha_s: a,
            eps_b: eb,
            eps_c: ec,
            ..
        } = *self;
        let c = &self.wilson;
        let big = &self.big_l;
        let [_, s2, s3, _, s5, s6] = self.ssl;
        let ec2 = ec * ec;

        let h = [
            1.0 + a * (c.cv1 + (w + 1.0) / 2.0 * (c.cv2 + c.cv3)) + (ec + eb) * big.l2 + ec2 * s2,
            a * (w + 1.0) / 2.0 * (c.cv2 - c.cv3) + (ec - eb) * big.l5 + ec2 * s5,
            1.0 + a * c.cv1
                + ec * (big.l2 + big.l5 + (w - 1.0) * big.l3 - (w + 1.0) * big.l6)
                + eb * (big.l2 - big.l5)
                + ec2 * (s2 + s5 + (w - 1.0) * s3 - (w + 1.0) * s6),
            1.0 + a * c.cv1
                + eb * (big.l2 + big.l5 + (w - 1.0) * big.l3 - (w + 1.0) * big.l6)
                + ec * (big.l2 - big.l5)
                + ec2 * (s2 - s5),
            -a * c.cv2 + ec * (big.l3 - big.l6) + ec2 * (s3 - s6),
            -a * c.cv3 + eb * (big.l3 - big.l6),
            1.0 + a * (c.ca1 + (w - 1.0) / 2.0 * (c.ca2 - c.ca3)) + (eb + ec) * big.l2 + ec2 * s2,
            a * (w + 1.0) / 2.0 * (c.ca2 + c.ca3) + (ec - eb) * big.l5 + ec2 * s5,
            -a * c.ca2 + ec * (big.l3 - big.l6) + ec2 * (s3 - s6),
            a * c.ca3 + eb * (big.l3 - big.l6),
        ];

        VToVAmplitudes {
            h: h.map(|value| xi * value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symmetric_point(w: f64) -> HqetPoint {
        HqetPoint {
            w,
            xi: 0.8,
            big_l: PowerCombinations::at(w, 0.1, 0.2, 0.3),
            ssl: [0.5; 6],
            wilson: WilsonCoefficients::at(w, 0.3),
            alpha_s: 0.0,
            eps_b: 0.0,
            eps_c: 0.0,
        }
    }

    #[test]
    fn symmetry_limit_leaves_only_xi() {
        let point = symmetric_point(1.3);
        let pp = point.p_to_p();
        assert_eq!(pp.h_plus, 0.8);
        assert_eq!(pp.h_minus, 0.0);
        let vv = point.v_to_v();
        assert_eq!(vv.h[0], 0.8);
        assert_eq!(vv.h[9], 0.0);
    }

    #[test]
    fn l5_is_constant() {
        assert_eq!(PowerCombinations::at(1.7, 3.0, -2.0, 9.0).l5, -1.0);
    }
}
