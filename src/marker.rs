use actix_web::cookie::time;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::HttpResponse;

use crate::configuration::MarkerSettings;

/// Left behind after a successful signup so the page can avoid prompting the
/// same visitor again. Nothing in this crate reads it back.
pub const MARKER_KEY: &str = "visionary_waitlist";
pub const MARKER_VALUE: &str = "1";

#[derive(thiserror::Error, Debug)]
pub enum MarkerError {
    #[error("Marker storage is disabled")]
    Disabled,
    #[error("Not a storable item: {0:?}")]
    InvalidItem(String),
}

/// Key/value storage on the visitor's side. Writes are best-effort: callers
/// log failures and move on.
pub trait MarkerStore {
    fn set_item(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), MarkerError>;
}

/// Stores items as persistent cookies on the outgoing response.
///
/// Items are collected during the request and only land on the response in
/// `attach`.
pub struct CookieMarkerStore {
    enabled: bool,
    max_age: time::Duration,
    cookies: Vec<Cookie<'static>>,
}

impl CookieMarkerStore {
    pub fn new(settings: &MarkerSettings) -> Self {
        Self {
            enabled: settings.enabled,
            max_age: settings.max_age(),
            cookies: Vec::new(),
        }
    }

    /// Copy the collected cookies onto `resp`. A cookie that cannot be encoded
    /// as a header is dropped; the response is sent regardless.
    pub fn attach(
        self,
        resp: &mut HttpResponse,
    ) {
        for cookie in self.cookies {
            if let Err(e) = resp.add_cookie(&cookie) {
                tracing::warn!(
                    error.message = %e,
                    cookie = cookie.name(),
                    "could not attach marker cookie"
                );
            }
        }
    }
}

/// Cookie names and values must stay within visible ASCII, minus the
/// separators.
fn is_cookie_safe(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_graphic() && !b"\"(),/:;<=>?@[\\]{}".contains(&b))
}

impl MarkerStore for CookieMarkerStore {
    fn set_item(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), MarkerError> {
        if !self.enabled {
            return Err(MarkerError::Disabled);
        }
        for item in [key, value] {
            if !is_cookie_safe(item) {
                return Err(MarkerError::InvalidItem(item.to_string()));
            }
        }
        let cookie = Cookie::build(key.to_owned(), value.to_owned())
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(self.max_age)
            .finish();
        self.cookies.push(cookie);
        Ok(())
    }
}
