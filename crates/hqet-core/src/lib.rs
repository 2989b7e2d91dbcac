#![deny(missing_docs)]
#![doc = "Shared building blocks of the HQET form-factor engine: the error taxonomy, parameter and option stores, fixed HQET inputs, kinematics and the real dilogarithm."]

pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod hash;
pub mod kinematics;
pub mod options;
pub mod parameters;
pub mod polylog;
pub mod sector;

pub use constants::{HqetConstants, PowerCorrections};
pub use diagnostics::{DiagnosticEntry, Diagnostics};
pub use errors::{ErrorInfo, HqetError};
pub use hash::{round_f64, stable_hash_string, to_canonical_json_bytes};
pub use kinematics::{kallen, Kinematics, ZMap};
pub use options::{OptionSpec, Options};
pub use parameters::Parameters;
pub use polylog::dilog;
pub use sector::{hqet_key, Sector};

/// Recoil distance from zero recoil below which `r(w)` and `Omega(w, z)`
/// switch to their analytic limits.
pub const NEAR_THRESHOLD: f64 = 1.0e-5;
