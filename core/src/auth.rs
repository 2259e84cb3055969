//! Credentials attached to an outgoing request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::http::HttpRequest;

pub const AUTHORIZATION: &str = "authorization";

/// Authentication scheme for a single call.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Auth {
    #[default]
    None,
    Bearer(String),
    Basic { username: String, password: String },
}

impl Auth {
    /// Pick the scheme from raw credentials. A non-empty bearer token wins
    /// over a username; the password may be empty.
    pub fn from_credentials(bearer_token: &str, username: &str, password: &str) -> Self {
        if !bearer_token.is_empty() {
            Auth::Bearer(bearer_token.to_string())
        } else if !username.is_empty() {
            Auth::Basic {
                username: username.to_string(),
                password: password.to_string(),
            }
        } else {
            Auth::None
        }
    }

    /// Scheme name, safe to log.
    pub fn scheme(&self) -> &'static str {
        match self {
            Auth::None => "none",
            Auth::Bearer(_) => "bearer",
            Auth::Basic { .. } => "basic",
        }
    }

    /// Value of the `Authorization` header, or `None` for no auth.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Auth::None => None,
            Auth::Bearer(token) => Some(format!("Bearer {token}")),
            Auth::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
        }
    }

    /// Set the `Authorization` header on `request`. `Auth::None` leaves the
    /// request untouched.
    pub fn apply(&self, request: &mut HttpRequest) {
        if let Some(value) = self.header_value() {
            request.set_header(AUTHORIZATION, value);
        }
    }
}

// Credentials never reach logs through `{:?}`.
impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::None => write!(f, "Auth::None"),
            Auth::Bearer(_) => write!(f, "Auth::Bearer(***)"),
            Auth::Basic { username, .. } => {
                write!(f, "Auth::Basic {{ username: {username:?}, password: *** }}")
            }
        }
    }
}
