//! Synchronous request dispatch.
//!
//! # Design
//! `call` builds a fresh [`RequestDescriptor`], applies the caller's options
//! in order, resolves the final URL, method and headers, then performs one
//! blocking round trip. Non-2xx responses are returned as data; only
//! construction and transport failures are errors. Requests go through a
//! lazily created process-wide `ureq::Agent` so connections are pooled
//! across calls; `call_with` takes an explicit agent instead.

use std::sync::LazyLock;
use std::time::Duration;

use ureq::http::{HeaderMap, Method, Request};
use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, Body, RequestBuilder};

use crate::error::CallError;
use crate::http::RequestDescriptor;
use crate::options::RequestOption;
use crate::response::Response;

static DEFAULT_AGENT: LazyLock<Agent> = LazyLock::new(|| {
    Agent::config_builder()
        .http_status_as_error(false)
        .allow_non_standard_methods(true)
        .build()
        .new_agent()
});

/// Send one request through the shared agent.
///
/// `method` may be any HTTP method token and is uppercased before sending.
/// The configured timeout bounds the whole round trip.
pub fn call(method: &str, url: &str, options: Vec<RequestOption>) -> Result<Response, CallError> {
    call_with(&DEFAULT_AGENT, method, url, options)
}

/// Send one request through `agent`.
///
/// The agent should be built with `http_status_as_error(false)`; otherwise
/// 4xx/5xx responses come back as [`CallError::Transport`]. Extension
/// methods such as `PURGE` also need `allow_non_standard_methods(true)`.
pub fn call_with(
    agent: &Agent,
    method: &str,
    url: &str,
    options: Vec<RequestOption>,
) -> Result<Response, CallError> {
    let mut request = RequestDescriptor::new(method, url);
    request.apply(options)?;
    send(agent, &request)
}

fn send(agent: &Agent, request: &RequestDescriptor) -> Result<Response, CallError> {
    let target = request.target_url()?;
    let method = request.http_method()?;
    let headers = request.header_map()?;
    let body = request.post_body.as_bytes();
    let timeout = request.timeout;

    log::debug!("{method} {target} ({} body bytes)", body.len());

    let uri = target.as_str();
    let response = match method.as_str() {
        "GET" => send_without_body(prepare(agent.get(uri), &headers, timeout), body)?,
        "HEAD" => send_without_body(prepare(agent.head(uri), &headers, timeout), body)?,
        "OPTIONS" => send_without_body(prepare(agent.options(uri), &headers, timeout), body)?,
        "DELETE" => send_without_body(prepare(agent.delete(uri), &headers, timeout), body)?,
        "POST" => prepare(agent.post(uri), &headers, timeout).send(body)?,
        "PUT" => prepare(agent.put(uri), &headers, timeout).send(body)?,
        "PATCH" => prepare(agent.patch(uri), &headers, timeout).send(body)?,
        _ => run(agent, method.clone(), uri, &headers, timeout, body)?,
    };

    log::debug!("{method} {target} -> {}", response.status());
    Ok(Response::from(response))
}

fn prepare<B>(
    builder: RequestBuilder<B>,
    headers: &HeaderMap,
    timeout: Duration,
) -> RequestBuilder<B> {
    headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name.clone(), value.clone()))
        .config()
        .timeout_global(Some(timeout))
        .build()
}

/// Bodiless methods only carry a body when one was explicitly set.
fn send_without_body(
    builder: RequestBuilder<WithoutBody>,
    body: &[u8],
) -> Result<ureq::http::Response<Body>, ureq::Error> {
    if body.is_empty() {
        builder.call()
    } else {
        let builder: RequestBuilder<WithBody> = builder.force_send_body();
        builder.send(body)
    }
}

/// Methods without a dedicated builder (TRACE, CONNECT, extension tokens)
/// go out as a plain `http::Request`.
fn run(
    agent: &Agent,
    method: Method,
    uri: &str,
    headers: &HeaderMap,
    timeout: Duration,
    body: &[u8],
) -> Result<ureq::http::Response<Body>, CallError> {
    let builder = headers.iter().fold(
        Request::builder().method(method).uri(uri),
        |builder, (name, value)| builder.header(name.clone(), value.clone()),
    );
    let response = if body.is_empty() {
        let request = builder.body(())?;
        agent.run(agent.configure_request(request).timeout_global(Some(timeout)).build())
    } else {
        let request = builder.body(body.to_vec())?;
        agent.run(agent.configure_request(request).timeout_global(Some(timeout)).build())
    };
    Ok(response?)
}
