//! The boundary between the executor and the network stack.
//!
//! # Design
//! The core never opens a socket. A host supplies a `Transport` and the
//! executor hands it fully-built requests. `CannedTransport` replays a fixed
//! result so tests run deterministically and in parallel.

use std::sync::Mutex;

use crate::http::{HttpRequest, HttpResponse};

/// A failure reported by the transport. A response may still accompany it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub message: String,
    pub response: Option<HttpResponse>,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    pub fn with_response(mut self, response: HttpResponse) -> Self {
        self.response = Some(response);
        self
    }
}

/// Sends one request and returns the raw response.
///
/// `Ok(None)` means the round-trip reported no error yet produced no
/// response. Implementations block until the exchange completes; any
/// deadline is theirs to impose.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<Option<HttpResponse>, TransportFailure>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<Option<HttpResponse>, TransportFailure> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<Option<HttpResponse>, TransportFailure> {
        (**self).send(request)
    }
}

/// Test double that answers every request with the same canned result and
/// remembers what it was sent.
#[derive(Debug)]
pub struct CannedTransport {
    result: Result<Option<HttpResponse>, TransportFailure>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl CannedTransport {
    pub fn respond(response: HttpResponse) -> Self {
        Self::with_result(Ok(Some(response)))
    }

    pub fn empty() -> Self {
        Self::with_result(Ok(None))
    }

    pub fn fail(failure: TransportFailure) -> Self {
        Self::with_result(Err(failure))
    }

    pub fn with_result(result: Result<Option<HttpResponse>, TransportFailure>) -> Self {
        Self {
            result,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Requests dispatched so far, oldest first.
    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.sent().pop()
    }
}

impl Transport for CannedTransport {
    fn send(&self, request: &HttpRequest) -> Result<Option<HttpResponse>, TransportFailure> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request.clone());
        }
        self.result.clone()
    }
}
