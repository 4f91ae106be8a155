use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use actix_web::cookie::time;
use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::form_client::FormClient;

/// Global configuration, loaded from `configuration/*.yaml`. See
/// `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub form_endpoint: FormEndpointSettings,
    pub marker: MarkerSettings,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Where waitlist signups are forwarded to.
///
/// There is no retry setting: a failed submission is reported to the visitor
/// once, and it is up to them to try again.
#[derive(Deserialize, Clone)]
pub struct FormEndpointSettings {
    /// The hosted form URL embeds the provider's form id, so it is kept out of
    /// `Debug` output.
    pub url: Secret<String>,

    /// Unset (the default) means no client-side timeout at all; a hung
    /// upstream holds the visitor's request until the transport gives up.
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl FormEndpointSettings {
    pub fn timeout(&self) -> Option<Duration> { self.timeout_milliseconds.map(Duration::from_millis) }

    pub fn client(&self) -> Result<FormClient, reqwest::Error> {
        FormClient::new(self.url.clone(), self.timeout())
    }
}

/// The "already joined" marker left in the visitor's browser after a
/// successful signup.
#[derive(Deserialize, Clone)]
pub struct MarkerSettings {
    /// When `false`, the store behaves like disabled browser storage: every
    /// write fails, and the failure is ignored.
    pub enabled: bool,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_age_days: i64,
}

impl MarkerSettings {
    pub fn max_age(&self) -> time::Duration { time::Duration::days(self.max_age_days) }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid environment: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`:
/// `base.yaml`, then `{APP_ENVIRONMENT}.yaml` (`local` if unset), then `APP_`
/// env vars.
///
/// `APP_FORM_ENDPOINT__URL=https://...` -> `Settings.form_endpoint.url`
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    tracing::info!("loading config for {env} env");

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are always strings; numeric fields go through `serde-aux`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
