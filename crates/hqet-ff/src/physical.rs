//! Conventional form-factor bases of the four spin structures.
//!
//! Each wrapper evaluates the h-functions once per momentum transfer and
//! combines them with coefficients in `r = m2 / m1` and `w(q^2)`.

use hqet_core::{Diagnostics, HqetConstants, HqetError, Kinematics, Options, Parameters};

use crate::hqet::{HqetBase, PToPAmplitudes, PToVAmplitudes, VToPAmplitudes, VToVAmplitudes};
use crate::process::{SpinStructure, Transition};

/// Common interface of the spin-structure variants.
pub trait Assembler {
    /// Shared HQET state.
    fn base(&self) -> &HqetBase;

    /// The h-functions at `q2`, labelled as in diagnostics dumps.
    fn h_functions(&self, q2: f64) -> Vec<(&'static str, f64)>;

    /// The conventional form factors at `q2`.
    fn physical(&self, q2: f64) -> Vec<(&'static str, f64)>;

    /// Mass pair of the transition.
    fn kinematics(&self) -> &Kinematics {
        self.base().kinematics()
    }
}

/// `f_+`, `f_-`, `f_0`, `f_T` and `f_{+,T}` of a pseudoscalar target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PToPBasis {
    pub f_p: f64,
    pub f_m: f64,
    pub f_0: f64,
    pub f_t: f64,
    pub f_plus_t: f64,
}

/// Pseudoscalar to pseudoscalar form factors.
#[derive(Debug, Clone, PartialEq)]
pub struct PToPFormFactors {
    base: HqetBase,
}

impl PToPFormFactors {
    /// h-functions at `q2`.
    pub fn h(&self, q2: f64) -> PToPAmplitudes {
        self.base.point(q2).p_to_p()
    }

    /// All physical form factors at `q2`.
    pub fn basis(&self, q2: f64) -> PToPBasis {
        let h = self.h(q2);
        let kin = self.base.kinematics();
        let (m_b, m_p) = (kin.m1(), kin.m2());
        let r = kin.ratio();
        let norm = 2.0 * r.sqrt();

        let f_p = ((1.0 + r) * h.h_plus - (1.0 - r) * h.h_minus) / norm;
        let f_m = ((1.0 + r) * h.h_minus - (1.0 - r) * h.h_plus) / norm;
        // f_0 is built from f_+ and f_-, not from the scale-dependent h_S
        let f_0 = f_p + q2 / (m_b * m_b - m_p * m_p) * f_m;
        let f_t = (1.0 + r) / norm * h.h_t;

        PToPBasis {
            f_p,
            f_m,
            f_0,
            f_t,
            f_plus_t: f_t * q2 / m_b / (m_b + m_p),
        }
    }

    /// `f_+(q2)`.
    pub fn f_p(&self, q2: f64) -> f64 {
        self.basis(q2).f_p
    }

    /// `f_-(q2)`.
    pub fn f_m(&self, q2: f64) -> f64 {
        self.basis(q2).f_m
    }

    /// `f_0(q2)`.
    pub fn f_0(&self, q2: f64) -> f64 {
        self.basis(q2).f_0
    }

    /// `f_T(q2)`.
    pub fn f_t(&self, q2: f64) -> f64 {
        self.basis(q2).f_t
    }

    /// `f_{+,T}(q2) = f_T q2 / (m_B (m_B + m_P))`.
    pub fn f_plus_t(&self, q2: f64) -> f64 {
        self.basis(q2).f_plus_t
    }
}

impl Assembler for PToPFormFactors {
    fn base(&self) -> &HqetBase {
        &self.base
    }

    fn h_functions(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.h(q2).labelled()
    }

    fn physical(&self, q2: f64) -> Vec<(&'static str, f64)> {
        let b = self.basis(q2);
        vec![
            ("f_+", b.f_p),
            ("f_-", b.f_m),
            ("f_0", b.f_0),
            ("f_T", b.f_t),
            ("f_+_T", b.f_plus_t),
        ]
    }
}

/// Vector, axial and tensor form factors of a vector target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PToVBasis {
    pub v: f64,
    pub a_0: f64,
    pub a_1: f64,
    pub a_2: f64,
    pub a_3: f64,
    pub a_12: f64,
    pub t_1: f64,
    pub t_2: f64,
    pub t_3: f64,
    pub t_23: f64,
}

/// Pseudoscalar to vector form factors.
#[derive(Debug, Clone, PartialEq)]
pub struct PToVFormFactors {
    base: HqetBase,
}

impl PToVFormFactors {
    /// h-functions at `q2`.
    pub fn h(&self, q2: f64) -> PToVAmplitudes {
        self.base.point(q2).p_to_v()
    }

    /// All non-vanishing physical form factors at `q2`.
    pub fn basis(&self, q2: f64) -> PToVBasis {
        let h = self.h(q2);
        let kin = self.base.kinematics();
        let (m_b, m_v) = (kin.m1(), kin.m2());
        let (m_b2, m_v2) = (m_b * m_b, m_v * m_v);
        let lambda = kin.lambda(q2);
        let r = kin.ratio();
        let w = kin.w(q2);
        let norm = 2.0 * r.sqrt();

        let v = (1.0 + r) / norm * h.h_v;
        let a_0 = ((1.0 + w) * h.h_a1 + (r * w - 1.0) * h.h_a2 + (r - w) * h.h_a3) / norm;
        let a_1 = r.sqrt() * (1.0 + w) / (1.0 + r) * h.h_a1;
        let a_2 = (1.0 + r) / norm * (r * h.h_a2 + h.h_a3);
        let a_3 = ((1.0 + r) * a_1 - (1.0 - r) * a_2) / (2.0 * r);
        let a_12 = ((m_b + m_v) * (m_b + m_v) * (m_b2 - m_v2 - q2) * a_1 - lambda * a_2)
            / (16.0 * m_b * m_v2 * (m_b + m_v));

        let t_1 = ((1.0 + r) * h.h_t1 - (1.0 - r) * h.h_t2) / norm;
        let t_2 = (2.0 * r * (w + 1.0) / (1.0 + r) * h.h_t1
            - 2.0 * r * (w - 1.0) / (1.0 - r) * h.h_t2)
            / norm;
        let t_3 = ((1.0 - r) * h.h_t1 - (1.0 + r) * h.h_t2 + (1.0 - r * r) * h.h_t3) / norm;
        let t_23 = ((m_b2 - m_v2) * (m_b2 + 3.0 * m_v2 - q2) * t_2 - lambda * t_3)
            / (8.0 * m_b * m_v2 * (m_b - m_v));

        PToVBasis {
            v,
            a_0,
            a_1,
            a_2,
            a_3,
            a_12,
            t_1,
            t_2,
            t_3,
            t_23,
        }
    }

    /// `V(q2)`.
    pub fn v(&self, q2: f64) -> f64 {
        self.basis(q2).v
    }

    /// `A_0(q2)`.
    pub fn a_0(&self, q2: f64) -> f64 {
        self.basis(q2).a_0
    }

    /// `A_1(q2)`.
    pub fn a_1(&self, q2: f64) -> f64 {
        self.basis(q2).a_1
    }

    /// `A_2(q2)`.
    pub fn a_2(&self, q2: f64) -> f64 {
        self.basis(q2).a_2
    }

    /// `A_3(q2)`.
    pub fn a_3(&self, q2: f64) -> f64 {
        self.basis(q2).a_3
    }

    /// `A_12(q2)`.
    pub fn a_12(&self, q2: f64) -> f64 {
        self.basis(q2).a_12
    }

    /// `T_1(q2)`.
    pub fn t_1(&self, q2: f64) -> f64 {
        self.basis(q2).t_1
    }

    /// `T_2(q2)`.
    pub fn t_2(&self, q2: f64) -> f64 {
        self.basis(q2).t_2
    }

    /// `T_3(q2)`.
    pub fn t_3(&self, q2: f64) -> f64 {
        self.basis(q2).t_3
    }

    /// `T_23(q2)`.
    pub fn t_23(&self, q2: f64) -> f64 {
        self.basis(q2).t_23
    }

    /// Helicity form factors are not provided by this parametrisation.
    pub fn f_perp(&self, _q2: f64) -> f64 {
        0.0
    }

    pub fn f_para(&self, _q2: f64) -> f64 {
        0.0
    }

    pub fn f_long(&self, _q2: f64) -> f64 {
        0.0
    }

    pub fn f_perp_t(&self, _q2: f64) -> f64 {
        0.0
    }

    pub fn f_para_t(&self, _q2: f64) -> f64 {
        0.0
    }

    pub fn f_long_t(&self, _q2: f64) -> f64 {
        0.0
    }

    pub fn f_long_t_normalized(&self, _q2: f64) -> f64 {
        0.0
    }
}

impl Assembler for PToVFormFactors {
    fn base(&self) -> &HqetBase {
        &self.base
    }

    fn h_functions(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.h(q2).labelled()
    }

    fn physical(&self, q2: f64) -> Vec<(&'static str, f64)> {
        let b = self.basis(q2);
        vec![
            ("V", b.v),
            ("A_0", b.a_0),
            ("A_1", b.a_1),
            ("A_2", b.a_2),
            ("A_3", b.a_3),
            ("A_12", b.a_12),
            ("T_1", b.t_1),
            ("T_2", b.t_2),
            ("T_3", b.t_3),
            ("T_23", b.t_23),
            ("f_perp", 0.0),
            ("f_para", 0.0),
            ("f_long", 0.0),
            ("f_perp_T", 0.0),
            ("f_para_T", 0.0),
            ("f_long_T", 0.0),
            ("f_long_T_Normalized", 0.0),
        ]
    }
}

/// Vector to pseudoscalar form factors. The h-functions are the basis.
#[derive(Debug, Clone, PartialEq)]
pub struct VToPFormFactors {
    base: HqetBase,
}

impl VToPFormFactors {
    /// h-functions at `q2`.
    pub fn h(&self, q2: f64) -> VToPAmplitudes {
        self.base.point(q2).v_to_p()
    }

    /// `h_Abar1(q2)`.
    pub fn h_abar_1(&self, q2: f64) -> f64 {
        self.h(q2).h_abar_1
    }

    /// `h_Abar2(q2)`.
    pub fn h_abar_2(&self, q2: f64) -> f64 {
        self.h(q2).h_abar_2
    }

    /// `h_Abar3(q2)`.
    pub fn h_abar_3(&self, q2: f64) -> f64 {
        self.h(q2).h_abar_3
    }

    /// `h_Vbar(q2)`.
    pub fn h_vbar(&self, q2: f64) -> f64 {
        self.h(q2).h_vbar
    }
}

impl Assembler for VToPFormFactors {
    fn base(&self) -> &HqetBase {
        &self.base
    }

    fn h_functions(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.h(q2).labelled()
    }

    fn physical(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.h_functions(q2)
    }
}

/// Vector to vector form factors. The h-functions are the basis.
#[derive(Debug, Clone, PartialEq)]
pub struct VToVFormFactors {
    base: HqetBase,
}

impl VToVFormFactors {
    /// h-functions at `q2`.
    pub fn h(&self, q2: f64) -> VToVAmplitudes {
        self.base.point(q2).v_to_v()
    }

    /// `h_k(q2)` for `k` in 1..=10; any other `k` yields NaN.
    pub fn h_k(&self, k: usize, q2: f64) -> f64 {
        match k {
            1..=10 => self.h(q2).h[k - 1],
            _ => f64::NAN,
        }
    }
}

impl Assembler for VToVFormFactors {
    fn base(&self) -> &HqetBase {
        &self.base
    }

    fn h_functions(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.h(q2).labelled()
    }

    fn physical(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.h_functions(q2)
    }
}

/// Form factors of one transition, variant selected by its spin structure.
#[derive(Debug, Clone, PartialEq)]
pub enum FormFactors {
    /// Pseudoscalar to pseudoscalar.
    PToP(PToPFormFactors),
    /// Pseudoscalar to vector.
    PToV(PToVFormFactors),
    /// Vector to pseudoscalar.
    VToP(VToPFormFactors),
    /// Vector to vector.
    VToV(VToVFormFactors),
}

impl FormFactors {
    /// Binds `transition` with the fixed HQET constants.
    pub fn new(
        transition: Transition,
        params: &Parameters,
        options: &Options,
    ) -> Result<Self, HqetError> {
        Ok(Self::from_base(HqetBase::new(transition, params, options)?))
    }

    /// Binds `transition` with explicit HQET constants.
    pub fn with_constants(
        transition: Transition,
        params: &Parameters,
        options: &Options,
        constants: HqetConstants,
    ) -> Result<Self, HqetError> {
        Ok(Self::from_base(HqetBase::with_constants(
            transition, params, options, constants,
        )?))
    }

    fn from_base(base: HqetBase) -> Self {
        match base.transition().spin_structure() {
            SpinStructure::PToP => FormFactors::PToP(PToPFormFactors { base }),
            SpinStructure::PToV => FormFactors::PToV(PToVFormFactors { base }),
            SpinStructure::VToP => FormFactors::VToP(VToPFormFactors { base }),
            SpinStructure::VToV => FormFactors::VToV(VToVFormFactors { base }),
        }
    }

    /// The variant as a trait object.
    pub fn assembler(&self) -> &dyn Assembler {
        match self {
            FormFactors::PToP(inner) => inner,
            FormFactors::PToV(inner) => inner,
            FormFactors::VToP(inner) => inner,
            FormFactors::VToV(inner) => inner,
        }
    }

    /// The bound transition.
    pub fn transition(&self) -> Transition {
        self.assembler().base().transition()
    }

    /// Shared HQET state.
    pub fn base(&self) -> &HqetBase {
        self.assembler().base()
    }

    /// Labelled h-functions at `q2`.
    pub fn h_functions(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.assembler().h_functions(q2)
    }

    /// Labelled physical form factors at `q2`.
    pub fn physical(&self, q2: f64) -> Vec<(&'static str, f64)> {
        self.assembler().physical(q2)
    }

    /// Regression dump of the bound transition.
    pub fn diagnostics(&self) -> Diagnostics {
        crate::diagnostics::dump(self.assembler())
    }

    /// The pseudoscalar to pseudoscalar variant, if selected.
    pub fn as_p_to_p(&self) -> Option<&PToPFormFactors> {
        match self {
            FormFactors::PToP(inner) => Some(inner),
            _ => None,
        }
    }

    /// The pseudoscalar to vector variant, if selected.
    pub fn as_p_to_v(&self) -> Option<&PToVFormFactors> {
        match self {
            FormFactors::PToV(inner) => Some(inner),
            _ => None,
        }
    }

    /// The vector to pseudoscalar variant, if selected.
    pub fn as_v_to_p(&self) -> Option<&VToPFormFactors> {
        match self {
            FormFactors::VToP(inner) => Some(inner),
            _ => None,
        }
    }

    /// The vector to vector variant, if selected.
    pub fn as_v_to_v(&self) -> Option<&VToVFormFactors> {
        match self {
            FormFactors::VToV(inner) => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_follows_spin_structure() {
        let params = Parameters::defaults();
        let options = Options::new();
        for transition in Transition::ALL {
            let ff = FormFactors::new(transition, &params, &options).unwrap();
            let matches = match transition.spin_structure() {
                SpinStructure::PToP => ff.as_p_to_p().is_some(),
                SpinStructure::PToV => ff.as_p_to_v().is_some(),
                SpinStructure::VToP => ff.as_v_to_p().is_some(),
                SpinStructure::VToV => ff.as_v_to_v().is_some(),
            };
            assert!(matches, "{transition}");
            assert_eq!(ff.transition(), transition);
        }
    }

    #[test]
    fn helicity_form_factors_are_exact_zero() {
        let ff = FormFactors::new(Transition::BToDstar, &Parameters::defaults(), &Options::new())
            .unwrap();
        let pv = ff.as_p_to_v().unwrap();
        assert_eq!(pv.f_perp(3.0), 0.0);
        assert_eq!(pv.f_long_t_normalized(3.0), 0.0);
    }
}
