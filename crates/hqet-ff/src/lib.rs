//! HQET form factors of `B(*) -> D(*)` and `B_s(*) -> D_s(*)` transitions.
//!
//! The crate is layered leaves first: the Isgur-Wise bank ([`iw`]), the
//! kinematic functions `r` and `Omega` ([`special`]), the one-loop matching
//! coefficients ([`wilson`]), the HQET assembler ([`hqet`]) and the physical
//! bases per spin structure ([`physical`]).

pub mod diagnostics;
pub mod hqet;
pub mod iw;
pub mod physical;
pub mod process;
pub mod special;
pub mod wilson;
pub mod zero_recoil;

pub use diagnostics::dump;
pub use hqet::{
    HqetBase, HqetPoint, PToPAmplitudes, PToVAmplitudes, PowerCombinations, VToPAmplitudes,
    VToVAmplitudes,
};
pub use iw::{IsgurWiseBank, IwInputs, LpModel, ZOrders, ZeroRecoil};
pub use physical::{
    Assembler, FormFactors, PToPBasis, PToPFormFactors, PToVBasis, PToVFormFactors,
    VToPFormFactors, VToVFormFactors,
};
pub use process::{MassSource, SpinStructure, Transition};
pub use special::{omega, r, wz};
pub use wilson::{WilsonCoefficients, WILSON_LABELS};
pub use zero_recoil::IsgurWiseParameters;
