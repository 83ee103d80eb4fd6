//! Option constructors that configure a [`RequestDescriptor`] before dispatch.
//!
//! Each constructor does its encoding work up front and returns a boxed
//! closure that only assigns the result. Options replace whole fields:
//! applying `with_headers` twice leaves only the second map.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use serde::Serialize;

use crate::error::CallError;
use crate::http::{Cookie, RequestDescriptor};
use crate::json::to_json_string;

/// One unit of request configuration.
pub type RequestOption = Box<dyn FnOnce(&mut RequestDescriptor) -> Result<(), CallError> + Send>;

/// Replace the header map.
pub fn with_headers<I, K, V>(headers: I) -> RequestOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let headers: HashMap<String, String> = headers
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    Box::new(move |req| {
        req.headers = headers;
        Ok(())
    })
}

/// Set the per-call timeout covering the whole round trip.
pub fn with_timeout(timeout: Duration) -> RequestOption {
    Box::new(move |req| {
        req.timeout = timeout;
        Ok(())
    })
}

/// Replace the cookie list.
pub fn with_cookies<I>(cookies: I) -> RequestOption
where
    I: IntoIterator<Item = Cookie>,
{
    let cookies: Vec<Cookie> = cookies.into_iter().collect();
    Box::new(move |req| {
        req.cookies = cookies;
        Ok(())
    })
}

/// Set the query string from key/value pairs.
///
/// Pairs are form-urlencoded and sorted by key; a repeated key keeps its
/// last value.
pub fn with_params<I, K, V>(params: I) -> RequestOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let params: BTreeMap<String, String> = params
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&params)
        .finish();
    Box::new(move |req| {
        req.params = encoded;
        Ok(())
    })
}

/// Set the body to a JSON object built from key/value pairs.
///
/// A value whose `Serialize` impl fails makes the call fail with
/// [`CallError::Serialization`] before anything is sent.
pub fn with_json_body<I, K, V>(data: I) -> RequestOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Serialize,
{
    let data: BTreeMap<String, V> = data.into_iter().map(|(k, v)| (k.into(), v)).collect();
    let body = to_json_string(&data);
    Box::new(move |req| {
        req.post_body = body?;
        Ok(())
    })
}

/// Set the body verbatim, e.g. a form-urlencoded or pre-serialized payload.
pub fn with_string_body(body: impl Into<String>) -> RequestOption {
    let body = body.into();
    Box::new(move |req| {
        req.post_body = body;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::ser::Error as _;
    use serde::Serializer;
    use serde_json::{json, Value};

    use super::*;

    fn applied(options: Vec<RequestOption>) -> RequestDescriptor {
        let mut req = RequestDescriptor::new("post", "https://api.example.com/v1");
        req.apply(options).unwrap();
        req
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn second_headers_option_replaces_first() {
        let req = applied(vec![
            with_headers([("X-First", "1"), ("X-Shared", "a")]),
            with_headers([("X-Second", "2")]),
        ]);
        assert_eq!(
            req.headers,
            HashMap::from([("X-Second".to_string(), "2".to_string())])
        );
    }

    #[test]
    fn timeout_option_overrides_default() {
        let req = applied(vec![with_timeout(Duration::from_millis(250))]);
        assert_eq!(req.timeout, Duration::from_millis(250));
    }

    #[test]
    fn cookies_option_keeps_order() {
        let req = applied(vec![with_cookies([
            Cookie::new("b", "2"),
            Cookie::new("a", "1"),
        ])]);
        assert_eq!(req.cookies, vec![Cookie::new("b", "2"), Cookie::new("a", "1")]);
    }

    #[test]
    fn params_are_sorted_and_encoded() {
        let req = applied(vec![with_params([
            ("q", "rust lang"),
            ("a", "1&2"),
            ("z", "é"),
        ])]);
        assert_eq!(req.params, "a=1%262&q=rust+lang&z=%C3%A9");
    }

    #[test]
    fn params_round_trip_through_form_decoding() {
        let req = applied(vec![with_params([("a", "1"), ("b", "2")])]);
        let decoded: HashMap<String, String> = url::form_urlencoded::parse(req.params.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            decoded,
            HashMap::from([
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ])
        );
    }

    #[test]
    fn empty_params_encode_to_empty_string() {
        let req = applied(vec![with_params(Vec::<(String, String)>::new())]);
        assert!(req.params.is_empty());
    }

    #[test]
    fn json_body_round_trips() {
        let req = applied(vec![with_json_body([("k", "v")])]);
        let body: Value = serde_json::from_str(&req.post_body).unwrap();
        assert_eq!(body, json!({"k": "v"}));
    }

    #[test]
    fn json_body_accepts_mixed_values() {
        let req = applied(vec![with_json_body([
            ("id", json!(7)),
            ("tags", json!(["a", "b"])),
            ("active", json!(true)),
        ])]);
        let body: Value = serde_json::from_str(&req.post_body).unwrap();
        assert_eq!(body, json!({"id": 7, "tags": ["a", "b"], "active": true}));
    }

    #[test]
    fn json_body_serialization_failure_is_an_error() {
        let mut req = RequestDescriptor::new("post", "https://api.example.com/v1");
        let err = req
            .apply(vec![with_json_body([("bad", Unserializable)])])
            .unwrap_err();
        assert!(matches!(err, CallError::Serialization(_)));
        assert!(req.post_body.is_empty());
    }

    #[test]
    fn string_body_is_stored_verbatim() {
        let req = applied(vec![with_string_body("user=bob&pass=a b")]);
        assert_eq!(req.post_body, "user=bob&pass=a b");
    }

    #[test]
    fn later_body_option_wins() {
        let req = applied(vec![
            with_json_body([("k", "v")]),
            with_string_body("raw"),
        ]);
        assert_eq!(req.post_body, "raw");
    }

    #[test]
    fn params_and_body_are_independent() {
        let req = applied(vec![with_params([("a", "1")]), with_string_body("x")]);
        assert_eq!(req.params, "a=1");
        assert_eq!(req.post_body, "x");
    }
}
