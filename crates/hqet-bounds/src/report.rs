use hqet_core::{stable_hash_string, to_canonical_json_bytes, HqetError};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// Which estimator produced a [`BoundReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundKind {
    /// Saturation by the HQET-predicted BGL coefficients.
    Hqet,
    /// Perturbative and condensate OPE susceptibilities.
    Ope,
    /// Saturation by externally fitted BGL coefficients.
    Bgl,
}

/// Value of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundEntry {
    /// The channel.
    pub channel: Channel,
    /// Bound value.
    pub value: f64,
}

/// Channel values of one estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundReport {
    /// Estimator.
    pub kind: BoundKind,
    /// Highest z power summed, absent for the OPE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_order: Option<usize>,
    /// One entry per channel in canonical order.
    pub entries: Vec<BoundEntry>,
}

impl BoundReport {
    /// Value of `channel`, if the estimator covers it.
    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.channel == channel)
            .map(|entry| entry.value)
    }

    /// Canonical JSON encoding.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, HqetError> {
        to_canonical_json_bytes(self)
    }

    /// SHA-256 of the canonical encoding.
    pub fn fingerprint(&self) -> Result<String, HqetError> {
        stable_hash_string(self)
    }
}
