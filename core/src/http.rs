//! Request descriptor and the plain-data types it is built from.
//!
//! # Design
//! A `RequestDescriptor` is created fresh for every call, mutated by the
//! caller's options in order, then turned into wire-level pieces (final URL,
//! method, header map) right before dispatch. Every field is owned so the
//! descriptor can be handed to options without lifetime concerns.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use ureq::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use ureq::http::Method;
use url::Url;

use crate::error::CallError;
use crate::options::RequestOption;

/// Timeout applied to a call when no `with_timeout` option is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// A cookie sent with the request, rendered as `name=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// The mutable, not-yet-sent form of a request.
///
/// `params` holds an already-encoded query string and `post_body` the raw
/// body; both default to `""`.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub cookies: Vec<Cookie>,
    pub timeout: Duration,
    pub params: String,
    pub post_body: String,
}

impl RequestDescriptor {
    /// A descriptor with the method uppercased, a 3 second timeout and a
    /// JSON content type.
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            method: method.to_uppercase(),
            url: url.to_string(),
            headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            cookies: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            params: String::new(),
            post_body: String::new(),
        }
    }

    /// Apply `options` in order. Stops at the first failing option.
    pub fn apply<I>(&mut self, options: I) -> Result<(), CallError>
    where
        I: IntoIterator<Item = RequestOption>,
    {
        for option in options {
            option(self)?;
        }
        Ok(())
    }

    /// The method as a wire token. Any valid token is accepted, standard
    /// or not.
    pub fn http_method(&self) -> Result<Method, CallError> {
        Method::from_bytes(self.method.as_bytes())
            .map_err(|_| CallError::InvalidMethod(self.method.clone()))
    }

    /// The parsed target URL with its query replaced by `params`.
    ///
    /// An empty `params` removes any query the URL string carried.
    pub fn target_url(&self) -> Result<Url, CallError> {
        let mut url = Url::parse(&self.url).map_err(|source| CallError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;
        url.set_query((!self.params.is_empty()).then_some(self.params.as_str()));
        Ok(url)
    }

    /// Headers as they go on the wire, with the cookie list folded into a
    /// single `Cookie` header after any caller-supplied one.
    pub fn header_map(&self) -> Result<HeaderMap, CallError> {
        let mut map = HeaderMap::with_capacity(self.headers.len() + 1);
        for (name, value) in &self.headers {
            let invalid = || CallError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.insert(header_name, header_value);
        }

        if !self.cookies.is_empty() {
            let mut cookie = map
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
                .unwrap_or_default();
            for c in &self.cookies {
                if !cookie.is_empty() {
                    cookie.push_str("; ");
                }
                cookie.push_str(&c.to_string());
            }
            let value = HeaderValue::from_str(&cookie).map_err(|_| CallError::InvalidHeader {
                name: header::COOKIE.to_string(),
            })?;
            map.insert(header::COOKIE, value);
        }
        Ok(map)
    }
}
