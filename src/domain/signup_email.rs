use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `local@domain.tld`: one `@`, no whitespace anywhere, a non-empty label on
/// each side of the last `.` after the `@`. U+FEFF counts as whitespace, as it
/// does in browsers.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("email pattern is valid")
});

/// Shape check only; deliverability is the form provider's problem.
pub fn is_email_shaped(s: &str) -> bool { EMAIL_SHAPE.is_match(s) }

/// An email address that has passed `is_email_shaped`. Serializes as a plain
/// string.
#[derive(Debug, Clone, Serialize)]
pub struct SignupEmail(String);

impl SignupEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        match is_email_shaped(&email) {
            true => Ok(Self(email)),
            false => Err(format!("Invalid email: {email:?}")),
        }
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
