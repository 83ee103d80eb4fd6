//! JSON marshal/unmarshal helpers.
//!
//! Request bodies and typed response decoding both go through these two
//! functions so the codec is swapped in one place.

use serde::{de::DeserializeOwned, Serialize};

/// Serialize `value` to JSON bytes.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

/// Serialize `value` to a JSON string.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Deserialize a `T` from JSON bytes.
pub fn from_json_bytes<T: DeserializeOwned>(data: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(data)
}
