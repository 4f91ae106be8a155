use serde::Serialize;

use super::SignupEmail;

/// Tags every submission so the form provider can tell this page's signups
/// apart from other forms on the same account.
pub const SIGNUP_SOURCE: &str = "visionary-early-access";

/// The JSON body sent to the form provider: `{email, name, source}`.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    email: SignupEmail,
    /// May be empty; the provider gets whatever the visitor typed.
    name: String,
    source: &'static str,
}

impl SignupRequest {
    pub fn new(
        email: SignupEmail,
        name: String,
    ) -> Self {
        Self {
            email,
            name,
            source: SIGNUP_SOURCE,
        }
    }

    pub fn email(&self) -> &SignupEmail { &self.email }
}
