//! Call Executor: attaches credentials, dispatches through a `Transport`, and
//! classifies the response.
//!
//! # Design
//! Classification runs in a fixed order once the transport returns:
//!
//! 1. A transport failure short-circuits everything, including an explicit
//!    expected status.
//! 2. No response at all is `EmptyResponse`.
//! 3. With an explicit expected status, only exact equality succeeds. A
//!    caller expecting 404 gets success on 404 and a mismatch on 200.
//! 4. Without one, any 2xx succeeds and anything else is mapped through
//!    `StatusKind::from_status`.
//!
//! Rules 3 and 4 are deliberately distinct policies; the expected status
//! overrides the 2xx convention rather than narrowing it.

use tracing::{debug, instrument, warn};

use crate::builder::build_from_spec;
use crate::error::CallError;
use crate::http::HttpResponse;
use crate::params::{CallParams, RequestSpec};
use crate::status::StatusKind;
use crate::transport::Transport;

/// Result of one call: the full response or a classified failure.
pub type Outcome = Result<HttpResponse, CallError>;

/// Executes `RequestSpec`s against an injected transport. Holds no state
/// besides the transport itself.
#[derive(Debug, Clone)]
pub struct CallExecutor<T> {
    transport: T,
}

impl<T: Transport> CallExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate raw parameters, then execute them.
    pub fn execute_params(&self, params: &CallParams) -> Outcome {
        let spec = RequestSpec::from_params(params)?;
        self.execute(&spec)
    }

    #[instrument(skip_all, fields(verb = %spec.verb(), url = %spec.url()))]
    pub fn execute(&self, spec: &RequestSpec) -> Outcome {
        let mut request = build_from_spec(spec);
        spec.auth().apply(&mut request);
        debug!(auth = spec.auth().scheme(), "dispatching request");

        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(failure) => {
                warn!(error = %failure.message, "transport failure");
                return Err(CallError::Transport {
                    message: failure.message,
                    response: failure.response,
                });
            }
        };

        classify(response, spec.expected_status())
    }
}

/// Classify a transport result against the caller's expectation.
pub fn classify(response: Option<HttpResponse>, expected_status: Option<i64>) -> Outcome {
    let Some(response) = response else {
        warn!("response was empty");
        return Err(CallError::EmptyResponse);
    };

    match expected_status {
        Some(expected) if i64::from(response.status) != expected => {
            warn!(expected, actual = response.status, "unexpected status code");
            Err(CallError::StatusMismatch {
                expected,
                actual: response.status,
                response,
            })
        }
        Some(_) => Ok(response),
        None if response.is_success() => Ok(response),
        None => {
            let kind = StatusKind::from_status(response.status);
            warn!(status = response.status, %kind, "response code was not 200-299");
            Err(CallError::Status { kind, response })
        }
    }
}
