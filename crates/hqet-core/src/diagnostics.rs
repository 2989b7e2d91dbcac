//! Ordered named evaluations used for regression checks.

use serde::{Deserialize, Serialize};

use crate::errors::HqetError;
use crate::hash::stable_hash_string;

/// A single named scalar evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// What was evaluated, including its kinematic point.
    pub description: String,
    /// The evaluated value.
    pub value: f64,
}

/// Ordered list of diagnostic entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<DiagnosticEntry>,
}

impl Diagnostics {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add(&mut self, value: f64, description: impl Into<String>) {
        self.entries.push(DiagnosticEntry {
            description: description.into(),
            value,
        });
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    /// Value of the first entry with the given description.
    pub fn get(&self, description: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.description == description)
            .map(|entry| entry.value)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable SHA-256 fingerprint of the canonical JSON encoding.
    pub fn fingerprint(&self) -> Result<String, HqetError> {
        stable_hash_string(self)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticEntry;
    type IntoIter = std::slice::Iter<'a, DiagnosticEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
