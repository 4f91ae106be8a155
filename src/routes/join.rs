use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;

use crate::configuration::MarkerSettings;
use crate::form_client::FormClient;
use crate::marker::CookieMarkerStore;
use crate::routes::landing::render_page;
use crate::signup::FormStatus;
use crate::signup::SignupAttempt;

/// The signup form as browsers post it. Every field is optional on the wire:
/// a missing email is a validation error shown on the page, not an extractor
/// 400.
#[derive(Deserialize)]
pub struct JoinFormData {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    /// Checkbox: absent when unticked, `on` when ticked.
    #[serde(default)]
    agree: Option<String>,
    /// Honeypot
    #[serde(default)]
    website: String,
}

fn is_checked(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(v.to_lowercase().as_str(), "" | "off" | "false" | "0"),
    }
}

impl From<JoinFormData> for SignupAttempt {
    fn from(form: JoinFormData) -> Self {
        let agree = is_checked(form.agree.as_deref());
        SignupAttempt::new(form.name, form.email, agree, form.website)
    }
}

/// `POST /join`
///
/// Runs the signup and answers with the landing page in the resulting state:
/// 200 on success (including a caught bot), 400 when the input was rejected,
/// 500 when the form provider could not take the signup.
///
/// ```sh
///     curl -v --data 'name=Alex&email=alex%40example.com&agree=on' http://127.0.0.1:8000/join
/// ```
#[tracing::instrument(
    name = "Joining the waitlist",
    skip(form, form_client, marker_settings),
    fields(signup_email = %form.email)
)]
pub async fn join(
    form: web::Form<JoinFormData>,
    form_client: web::Data<FormClient>,
    marker_settings: web::Data<MarkerSettings>,
) -> HttpResponse {
    let mut attempt: SignupAttempt = form.into_inner().into();
    let mut markers = CookieMarkerStore::new(&marker_settings);

    attempt.submit(form_client.get_ref(), &mut markers).await;

    let status = match attempt.status() {
        FormStatus::Error(e) if e.is_validation() => StatusCode::BAD_REQUEST,
        FormStatus::Error(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };

    let mut resp = HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_page(&attempt));
    markers.attach(&mut resp);
    resp
}
