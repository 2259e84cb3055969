//! Request execution and response classification for a single REST call.
//!
//! # Overview
//! Builds an `HttpRequest` from declarative parameters, attaches bearer or
//! basic credentials, dispatches it through a caller-supplied `Transport`,
//! and classifies the response into success or a typed `CallError`.
//!
//! # Design
//! - The core performs no I/O; the host injects a `Transport`, which keeps
//!   the executor deterministic under test (`CannedTransport`).
//! - Raw string parameters (`CallParams`) are validated once into a
//!   `RequestSpec`; past that point the verb and expected status are closed
//!   types.
//! - One request per execution. No retries, no timeouts, no streaming; the
//!   response body is buffered in full.

pub mod auth;
pub mod builder;
pub mod error;
pub mod executor;
pub mod http;
pub mod params;
pub mod status;
pub mod transport;

pub use auth::Auth;
pub use builder::build_request;
pub use error::CallError;
pub use executor::{CallExecutor, Outcome};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use params::{CallParams, ParamOverrides, RequestSpec};
pub use status::StatusKind;
pub use transport::{CannedTransport, Transport, TransportFailure};
