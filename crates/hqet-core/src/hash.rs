//! Canonical JSON encoding and stable fingerprints of reports.

use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::Serialize;
use serde_json::{Map, Number, Value};
use sha2::{Digest, Sha256};

use crate::errors::{ErrorInfo, HqetError};

fn serde_error(code: &str, err: impl ToString) -> HqetError {
    HqetError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Rounds a floating point value to the precision used by fingerprints.
pub fn round_f64(value: f64) -> f64 {
    let scaled = (value * 1e9).round();
    scaled / 1e9
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ordered = BTreeMap::new();
            for (key, val) in map {
                ordered.insert(key, canonicalize(val));
            }
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        Value::Number(number) if number.is_f64() => number
            .as_f64()
            .and_then(|raw| Number::from_f64(round_f64(raw)))
            .map(Value::Number)
            .unwrap_or(Value::Null),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with sorted keys and rounded floats.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, HqetError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    serde_json::to_vec(&canonical).map_err(|err| serde_error("json-encode", err))
}

/// Computes a stable hexadecimal SHA-256 digest of the canonical JSON encoding.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, HqetError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(format!("{:x}", Sha256::digest(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_ignores_sub_nanounit_noise() {
        let a = stable_hash_string(&vec![("x", 0.1 + 0.2)]).unwrap();
        let b = stable_hash_string(&vec![("x", 0.3)]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        let c = stable_hash_string(&vec![("x", 0.3001)]).unwrap();
        assert_ne!(a, c);
    }
}
