//! Error types for request dispatch and response decoding.
//!
//! # Design
//! Dispatch failures (`CallError`) and decode failures (`DecodeError`) are
//! kept apart because they surface from different calls: a `CallError` means
//! no usable response exists, a `DecodeError` means a response arrived but
//! its body could not be turned into the requested value.

use thiserror::Error;

/// Errors returned by [`call`](crate::call) before or while the request is
/// on the wire.
#[derive(Debug, Error)]
pub enum CallError {
    /// The method string is not a valid HTTP method token.
    #[error("invalid HTTP method `{0}`")]
    InvalidMethod(String),

    /// The target URL could not be parsed as an absolute URL.
    #[error("malformed request URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header name or value is not valid on the wire.
    #[error("invalid header `{name}`")]
    InvalidHeader { name: String },

    /// The request could not be assembled from its validated parts.
    #[error("request could not be built: {0}")]
    Request(#[from] ureq::http::Error),

    /// The JSON body could not be serialized. Only reachable through a
    /// `Serialize` impl that reports an error.
    #[error("request body could not be serialized to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Connecting, sending or receiving failed.
    #[error("request transport failed: {0}")]
    Transport(#[from] ureq::Error),
}

/// Errors returned by [`decode`](crate::decode) and
/// [`decode_into`](crate::decode_into).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The server answered with something other than 200.
    #[error("request status code not 200, actual status code is {status}")]
    Status { status: u16 },

    /// The body stream failed before it was fully read.
    #[error("read from response body failed: {0}")]
    Read(#[source] std::io::Error),

    /// The body is not valid JSON for the target type.
    #[error("unmarshal response body failed: {0}")]
    Unmarshal(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_code() {
        let err = DecodeError::Status { status: 404 };
        assert_eq!(
            err.to_string(),
            "request status code not 200, actual status code is 404"
        );
    }

    #[test]
    fn invalid_url_keeps_the_parse_error_as_source() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = CallError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("malformed request URL `not a url`"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
