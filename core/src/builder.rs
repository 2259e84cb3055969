//! Request Builder: turns a verb, URL and payload into an `HttpRequest`.
//!
//! # Design
//! The builder never validates the URL or the payload. A malformed URL is
//! surfaced by the transport, and a payload is sent as JSON whether or not
//! it parses as JSON.

use crate::http::{HttpMethod, HttpRequest};
use crate::params::RequestSpec;

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// Build a request for `method`. `payload` is used only for POST and PUT,
/// where it is sent as `application/json`; it is ignored otherwise.
pub fn build_request(method: HttpMethod, url: &str, payload: Option<&str>) -> HttpRequest {
    match method {
        HttpMethod::Get | HttpMethod::Delete => HttpRequest {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        },
        HttpMethod::Post | HttpMethod::Put => HttpRequest {
            method,
            url: url.to_string(),
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body: Some(payload.unwrap_or_default().to_string()),
        },
    }
}

/// Build the unauthenticated request described by `spec`.
pub fn build_from_spec(spec: &RequestSpec) -> HttpRequest {
    build_request(spec.verb(), spec.url(), spec.payload())
}
