//! BGL coefficients and unitarity bounds of `b -> c` transitions.
//!
//! [`BglCoefficients`] evaluates the HQET prediction for the first three
//! coefficients of the BGL z-expansion of 34 form factors in each spectator
//! sector. Three estimators then bound the saturation of each `J^P` channel:
//!
//! * [`HqetUnitarityBounds`] sums the squared HQET coefficients,
//! * [`OpeBounds`] evaluates the OPE susceptibilities,
//! * [`BglParametrisationBounds`] sums externally fitted coefficients.
//!
//! Every estimator reports through a serialisable [`BoundReport`].

pub mod bgl;
pub mod bgl_param;
pub mod channel;
pub mod hqet;
pub mod ope;
pub mod report;

pub use bgl::{BglCoefficients, BglEntry, BglFormFactor, SectorInputs};
pub use bgl_param::BglParametrisationBounds;
pub use channel::{saturation, z_order_bound, Channel};
pub use hqet::HqetUnitarityBounds;
pub use ope::{OpeBounds, GLUON_CONDENSATE, QUARK_CONDENSATE};
pub use report::{BoundEntry, BoundKind, BoundReport};
