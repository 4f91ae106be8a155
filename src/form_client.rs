use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use secrecy::Secret;

use crate::domain::SignupRequest;
use crate::utils::error_chain_fmt;

/// Why a forwarded signup did not land. Never shown to the visitor, who only
/// ever sees one generic retry message; logged with its cause chain.
#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("Form endpoint answered {0}")]
    Rejected(StatusCode),
    /// Unreachable host, refused connection, timeout, ...
    #[error("Could not reach form endpoint")]
    Transport(#[source] reqwest::Error),
}

impl Debug for SubmitError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Anything that can take a validated signup off our hands. One call, one
/// request; implementations must not retry.
pub trait FormSubmitter {
    fn submit(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// HTTP client for the hosted form provider.
///
/// Build once and share via `web::Data`, so every worker reuses the same
/// connection pool.
pub struct FormClient {
    http_client: Client,
    endpoint: Secret<String>,
}

impl FormClient {
    /// `timeout: None` leaves the request unbounded.
    pub fn new(
        endpoint: Secret<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            endpoint,
        })
    }
}

impl FormSubmitter for FormClient {
    /// `POST {endpoint}` with a JSON body. Any 2xx is a success.
    #[tracing::instrument(
        name = "Forwarding signup to form endpoint",
        skip_all,
        fields(signup_email = %request.email().as_ref())
    )]
    async fn submit(
        &self,
        request: &SignupRequest,
    ) -> Result<(), SubmitError> {
        let resp = self
            .http_client
            .post(self.endpoint.expose_secret())
            // sets `Content-Type: application/json`
            .json(request)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        match resp.status() {
            s if s.is_success() => Ok(()),
            s => Err(SubmitError::Rejected(s)),
        }
    }
}
