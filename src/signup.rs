//! The signup form controller: field state, the ordered checks, and the single
//! forward to the form provider.
//!
//! ```text
//! Idle --submit--> Submitting --2xx--> Success
//!   |                   \--other--> Error --submit--> Submitting ...
//!   \--email/consent check fails--> Error
//!   \--honeypot filled--> Success
//! ```

use crate::domain::SignupEmail;
use crate::domain::SignupRequest;
use crate::form_client::FormSubmitter;
use crate::form_client::SubmitError;
use crate::marker::MarkerStore;
use crate::marker::MARKER_KEY;
use crate::marker::MARKER_VALUE;

pub const JOINED_MESSAGE: &str = "You're on the list. We'll be in touch soon.";
/// What a bot gets told. Deliberately indistinguishable from a real signup on
/// the rendered page.
pub const HONEYPOT_MESSAGE: &str = "Thanks!";

/// Everything the visitor can get wrong, worded for the visitor. The
/// underlying cause of `SubmissionFailed` only goes to the logs.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    #[error("Please enter a valid email.")]
    InvalidEmail,
    #[error("Please agree to be contacted about early access.")]
    MissingConsent,
    #[error("Something went wrong. Please try again.")]
    SubmissionFailed,
}

impl SignupError {
    /// Caught before anything left the server.
    pub fn is_validation(&self) -> bool { !matches!(self, Self::SubmissionFailed) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    /// The one outstanding request; the submit control is disabled.
    Submitting,
    Success(&'static str),
    Error(SignupError),
}

impl FormStatus {
    /// User-facing text for the current state, if it has any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Success(msg) => Some(msg.to_string()),
            Self::Error(e) => Some(e.to_string()),
        }
    }
}

/// One visitor's form, as posted. Lives for a single request.
#[derive(Debug)]
pub struct SignupAttempt {
    name: String,
    email: String,
    agree_to_contact: bool,
    honeypot: String,
    status: FormStatus,
}

/// A fresh, untouched form: consent pre-ticked.
impl Default for SignupAttempt {
    fn default() -> Self { Self::new(String::new(), String::new(), true, String::new()) }
}

impl SignupAttempt {
    pub fn new(
        name: String,
        email: String,
        agree_to_contact: bool,
        honeypot: String,
    ) -> Self {
        Self {
            name,
            email,
            agree_to_contact,
            honeypot,
            status: FormStatus::Idle,
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn email(&self) -> &str { &self.email }

    pub fn agree_to_contact(&self) -> bool { self.agree_to_contact }

    pub fn status(&self) -> &FormStatus { &self.status }

    /// Run the checks and, if a request has to be made, move to `Submitting`
    /// and hand back its body. `None` means the attempt already reached its
    /// final state without touching the network.
    ///
    /// Checks run in order (email, consent, honeypot) and stop at the first
    /// one that decides the outcome.
    pub fn begin_submission(&mut self) -> Option<SignupRequest> {
        let email = match SignupEmail::parse(self.email.clone()) {
            Ok(email) => email,
            Err(_) => {
                self.status = FormStatus::Error(SignupError::InvalidEmail);
                return None;
            }
        };

        if !self.agree_to_contact {
            self.status = FormStatus::Error(SignupError::MissingConsent);
            return None;
        }

        if !self.honeypot.is_empty() {
            tracing::info!("honeypot filled, dropping submission");
            self.status = FormStatus::Success(HONEYPOT_MESSAGE);
            return None;
        }

        self.status = FormStatus::Submitting;
        Some(SignupRequest::new(email, self.name.clone()))
    }

    /// Map the provider's answer onto the form. Only meaningful while
    /// `Submitting`; otherwise the outcome is discarded.
    pub fn complete_submission(
        &mut self,
        outcome: Result<(), SubmitError>,
        markers: &mut impl MarkerStore,
    ) {
        if self.status != FormStatus::Submitting {
            tracing::warn!(status = ?self.status, "no submission in flight, ignoring outcome");
            return;
        }

        match outcome {
            Ok(()) => {
                self.status = FormStatus::Success(JOINED_MESSAGE);
                self.name.clear();
                self.email.clear();
                if let Err(e) = markers.set_item(MARKER_KEY, MARKER_VALUE) {
                    tracing::debug!(error.message = %e, "success marker not stored");
                }
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "signup submission failed"
                );
                self.status = FormStatus::Error(SignupError::SubmissionFailed);
            }
        }
    }

    /// Validate, then forward at most once. Never retries.
    #[tracing::instrument(
        name = "Submitting waitlist signup",
        skip_all,
        fields(signup_email = %self.email, signup_name = %self.name)
    )]
    pub async fn submit(
        &mut self,
        submitter: &impl FormSubmitter,
        markers: &mut impl MarkerStore,
    ) {
        let Some(request) = self.begin_submission() else {
            return;
        };
        let outcome = submitter.submit(&request).await;
        self.complete_submission(outcome, markers);
    }
}
