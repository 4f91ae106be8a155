//! VISIONARY early-access landing page: static marketing content plus one
//! waitlist signup form, forwarded to a hosted form provider.

pub mod configuration;
pub mod domain;
pub mod form_client;
pub mod marker;
pub mod routes;
pub mod signup;
pub mod startup;
pub mod telemetry;
pub mod utils;
