//! Helpers for building and sending single-shot HTTP test requests.
//!
//! # Overview
//! - [`assemble`] joins a host, a base path and path segments into an
//!   `https://` URL.
//! - [`call`] applies a list of options (headers, cookies, timeout, query
//!   parameters, JSON or raw body) to a fresh request and sends it.
//! - [`decode`] / [`decode_into`] turn a 200 response into a typed value;
//!   [`decode_to_map`] turns any response into a JSON object or `None`.
//!
//! ```no_run
//! use http_caller::{assemble_url, call, decode_to_map, with_params, with_timeout};
//! use std::time::Duration;
//!
//! let url = assemble_url!("api.example.com", "/users", 42);
//! let response = call(
//!     "get",
//!     &url,
//!     vec![with_params([("fields", "name")]), with_timeout(Duration::from_secs(1))],
//! )?;
//! let _user = decode_to_map(response);
//! # Ok::<(), http_caller::CallError>(())
//! ```
//!
//! # Design
//! - Every call is one blocking round trip; nothing is retried.
//! - Construction and transport failures are returned as [`CallError`]
//!   rather than aborting.
//! - The timeout set on a request is enforced for the whole call.

pub mod client;
pub mod error;
pub mod http;
pub mod json;
pub mod options;
pub mod path;
pub mod response;

pub use client::{call, call_with};
pub use error::{CallError, DecodeError};
pub use http::{Cookie, RequestDescriptor, DEFAULT_TIMEOUT};
pub use json::{from_json_bytes, to_json_bytes, to_json_string};
pub use options::{
    with_cookies, with_headers, with_json_body, with_params, with_string_body, with_timeout,
    RequestOption,
};
pub use path::assemble;
pub use response::{decode, decode_into, decode_to_map, Response};
