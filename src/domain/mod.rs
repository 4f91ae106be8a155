mod signup_email;
mod signup_request;
// allow external `use` statements to skip `signup_email` etc
pub use signup_email::is_email_shaped;
pub use signup_email::SignupEmail;
pub use signup_request::SignupRequest;
pub use signup_request::SIGNUP_SOURCE;
