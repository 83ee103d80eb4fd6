//! Response wrapper and the two ways of decoding its body.
//!
//! # Design
//! Both decoders take the [`Response`] by value, so a body can be consumed
//! exactly once and is released when the decoder returns, whichever path it
//! takes. `decode` is strict: it checks the status and reports every
//! failure. `decode_to_map` is lenient: it ignores the status and turns any
//! failure into `None`.

use std::fmt;
use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use ureq::http::HeaderMap;

use crate::error::DecodeError;
use crate::json::from_json_bytes;

/// A received response whose body has not been read yet.
pub struct Response {
    status: u16,
    headers: HeaderMap,
    body: Box<dyn Read>,
}

impl Response {
    pub fn new(status: u16, headers: HeaderMap, body: impl Read + 'static) -> Self {
        Self {
            status,
            headers,
            body: Box::new(body),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Give up the decoders and take the raw body stream.
    pub fn into_reader(self) -> Box<dyn Read> {
        self.body
    }
}

impl From<ureq::http::Response<ureq::Body>> for Response {
    fn from(response: ureq::http::Response<ureq::Body>) -> Self {
        let (parts, body) = response.into_parts();
        Response::new(parts.status.as_u16(), parts.headers, body.into_reader())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Decode a 200 response body into a `T`.
pub fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DecodeError> {
    let bytes = read_ok_body(response)?;
    from_json_bytes(&bytes).map_err(DecodeError::Unmarshal)
}

/// Decode a 200 response body into `target`, overwriting it on success.
///
/// `target` is left untouched when an error is returned.
pub fn decode_into<T: DeserializeOwned>(
    response: Response,
    target: &mut T,
) -> Result<(), DecodeError> {
    *target = decode(response)?;
    Ok(())
}

/// Decode the body as a JSON object, whatever the status.
///
/// Only the first JSON value is read; anything after it is ignored.
/// Returns `None` if the body cannot be read or does not start with a JSON
/// object.
pub fn decode_to_map(response: Response) -> Option<Map<String, Value>> {
    let status = response.status;
    let mut deserializer = serde_json::Deserializer::from_reader(response.body);
    match Map::deserialize(&mut deserializer) {
        Ok(map) => Some(map),
        Err(err) => {
            log::debug!("discarding undecodable body of {status} response: {err}");
            None
        }
    }
}

fn read_ok_body(mut response: Response) -> Result<Vec<u8>, DecodeError> {
    if response.status != 200 {
        return Err(DecodeError::Status {
            status: response.status,
        });
    }
    let mut bytes = Vec::new();
    response.body.read_to_end(&mut bytes).map_err(DecodeError::Read)?;
    Ok(bytes)
}
