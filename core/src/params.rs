//! Call parameters: the raw string form callers supply and the validated
//! `RequestSpec` the executor consumes.
//!
//! # Design
//! `CallParams` mirrors the flags and JSON config keys one-to-one and keeps
//! every field a string, empty meaning "not set". `RequestSpec::from_params`
//! is the single place those strings are validated; past it, the verb and the
//! expected status are closed types.
//!
//! Any integer is accepted as an expected status, even one no server can
//! return (`"70000"`, `"-1"`); such a call ends in a status mismatch. Only a
//! non-integer such as `"abc"` is a build failure.

use serde::{Deserialize, Serialize};

use crate::auth::Auth;
use crate::error::CallError;
use crate::http::HttpMethod;

/// Raw, string-typed call parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bearer_token: String,
    /// Used for basic auth when no bearer token is set.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// One of `GET`, `POST`, `PUT`, `DELETE`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload: String,
    /// Decimal status code; empty selects the default 2xx policy.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expected_response_code: String,
}

impl CallParams {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Overlay every field the overrides set. `Some("")` clears a field.
    pub fn apply(mut self, overrides: ParamOverrides) -> Self {
        fn pick(base: &mut String, overlay: Option<String>) {
            if let Some(value) = overlay {
                *base = value;
            }
        }
        pick(&mut self.url, overrides.url);
        pick(&mut self.bearer_token, overrides.bearer_token);
        pick(&mut self.username, overrides.username);
        pick(&mut self.password, overrides.password);
        pick(&mut self.request_type, overrides.request_type);
        pick(&mut self.payload, overrides.payload);
        pick(&mut self.expected_response_code, overrides.expected_response_code);
        self
    }
}

/// Per-field replacements for `CallParams`, e.g. from command-line flags.
/// `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamOverrides {
    pub url: Option<String>,
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub request_type: Option<String>,
    pub payload: Option<String>,
    pub expected_response_code: Option<String>,
}

/// Immutable description of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    verb: HttpMethod,
    url: String,
    payload: Option<String>,
    auth: Auth,
    expected_status: Option<i64>,
}

impl RequestSpec {
    pub fn new(verb: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            verb,
            url: url.into(),
            payload: None,
            auth: Auth::None,
            expected_status: None,
        }
    }

    /// Payload is kept only for verbs that carry a body.
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = self.verb.has_body().then(|| payload.into());
        self
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    pub fn expect_status(mut self, status: i64) -> Self {
        self.expected_status = Some(status);
        self
    }

    /// Validate raw parameters.
    ///
    /// ## Errors
    ///
    /// Returns `CallError::BuildFailed` if the request type is not one of the
    /// supported verbs or the expected response code is not an integer.
    pub fn from_params(params: &CallParams) -> Result<Self, CallError> {
        let verb: HttpMethod = params.request_type.parse().map_err(|_| {
            CallError::BuildFailed(format!(
                "unsupported request type {:?}, expected GET, POST, PUT or DELETE",
                params.request_type
            ))
        })?;
        let expected_status = parse_expected_status(&params.expected_response_code)?;
        let auth = Auth::from_credentials(&params.bearer_token, &params.username, &params.password);

        let mut spec = RequestSpec::new(verb, params.url.clone())
            .with_payload(params.payload.clone())
            .with_auth(auth);
        spec.expected_status = expected_status;
        Ok(spec)
    }

    pub fn verb(&self) -> HttpMethod {
        self.verb
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn expected_status(&self) -> Option<i64> {
        self.expected_status
    }
}

fn parse_expected_status(raw: &str) -> Result<Option<i64>, CallError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>().map(Some).map_err(|e| {
        CallError::BuildFailed(format!("invalid expected response code {raw:?}: {e}"))
    })
}
