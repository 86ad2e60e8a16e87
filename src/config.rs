//! Environment-driven configuration for the relay binary.
//!
//! Every value is read through a lookup function so tests can supply a
//! fixed map instead of mutating the process environment. Blank values
//! are treated as unset.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FROM_NUMBER: &str = "whatsapp:+14155238886";
const DEFAULT_TWILIO_BASE_URL: &str = "https://api.twilio.com";
const DEFAULT_GOOGLE_BASE_URL: &str = "https://translation.googleapis.com";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("required environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// A variable is set to a value that cannot be used.
    #[error("environment variable {variable} has invalid value '{value}': {reason}")]
    InvalidValue {
        /// Variable name.
        variable: &'static str,
        /// Rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Which detection provider backs the language resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorChoice {
    /// Google Cloud Translation detection.
    Google,
    /// Offline Indonesian marker vocabulary.
    Vocabulary,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_address: IpAddr,
    /// TCP port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the socket address to listen on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Twilio Messages API settings.
#[derive(Clone, PartialEq, Eq)]
pub struct TwilioConfig {
    /// Account SID, also the basic-auth user name.
    pub account_sid: String,
    /// Auth token, the basic-auth password.
    pub auth_token: String,
    /// Sender address replies are sent from.
    pub from_number: String,
    /// API origin, overridable for local stubs.
    pub base_url: String,
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Google Cloud Translation settings.
#[derive(Clone, PartialEq, Eq)]
pub struct GoogleConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Cloud project, reported in logs only.
    pub project_id: Option<String>,
    /// API origin, overridable for local stubs.
    pub base_url: String,
}

impl fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Complete relay configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Delivery provider settings.
    pub twilio: TwilioConfig,
    /// Detection and translation provider settings.
    pub google: GoogleConfig,
    /// Detection provider selection.
    pub detector: DetectorChoice,
    /// Timeout applied to every outbound provider request.
    pub provider_timeout: Duration,
}

impl RelayConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Lookup(lookup);

        let server = ServerConfig {
            bind_address: env.parsed("BIND_ADDRESS", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: env.parsed("PORT", DEFAULT_PORT)?,
        };

        let twilio = TwilioConfig {
            account_sid: env.required("TWILIO_ACCOUNT_SID")?,
            auth_token: env.required("TWILIO_AUTH_TOKEN")?,
            from_number: env.or_default("TWILIO_WHATSAPP_NUMBER", DEFAULT_FROM_NUMBER),
            base_url: env.or_default("TWILIO_API_BASE_URL", DEFAULT_TWILIO_BASE_URL),
        };

        let google = GoogleConfig {
            api_key: env.required("GOOGLE_TRANSLATE_API_KEY")?,
            project_id: env.optional("GOOGLE_CLOUD_PROJECT_ID"),
            base_url: env.or_default("GOOGLE_TRANSLATE_BASE_URL", DEFAULT_GOOGLE_BASE_URL),
        };

        let detector = env
            .optional("LANGUAGE_DETECTOR")
            .map_or(Ok(DetectorChoice::Google), |value| parse_detector(&value))?;

        let timeout_secs: u64 = env.parsed("PROVIDER_TIMEOUT_SECS", DEFAULT_PROVIDER_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                variable: "PROVIDER_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: "timeout must be at least one second".to_owned(),
            });
        }

        Ok(Self {
            server,
            twilio,
            google,
            detector,
            provider_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_detector(value: &str) -> Result<DetectorChoice, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "google" => Ok(DetectorChoice::Google),
        "vocabulary" => Ok(DetectorChoice::Vocabulary),
        _ => Err(ConfigError::InvalidValue {
            variable: "LANGUAGE_DETECTOR",
            value: value.to_owned(),
            reason: "expected google or vocabulary".to_owned(),
        }),
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.optional(name).ok_or(ConfigError::MissingVariable(name))
    }

    fn or_default(&self, name: &str, default: &str) -> String {
        self.optional(name).unwrap_or_else(|| default.to_owned())
    }

    fn parsed<T>(&self, name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: fmt::Display,
    {
        let Some(value) = self.optional(name) else {
            return Ok(default);
        };
        let parsed = value.parse::<T>();
        parsed.map_err(|err| ConfigError::InvalidValue {
            variable: name,
            reason: err.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DetectorChoice, RelayConfig};
    use rstest::rstest;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("TWILIO_ACCOUNT_SID", "AC123"),
        ("TWILIO_AUTH_TOKEN", "secret-token"),
        ("GOOGLE_TRANSLATE_API_KEY", "google-key"),
    ];

    fn with_required(extra: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
        REQUIRED.iter().copied().chain(extra.iter().copied()).collect()
    }

    #[rstest]
    fn defaults_apply_when_only_credentials_are_set() {
        let config =
            RelayConfig::from_lookup(lookup_from(&REQUIRED)).expect("config should load");

        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.twilio.from_number, "whatsapp:+14155238886");
        assert_eq!(config.twilio.base_url, "https://api.twilio.com");
        assert_eq!(config.google.base_url, "https://translation.googleapis.com");
        assert_eq!(config.google.project_id, None);
        assert_eq!(config.detector, DetectorChoice::Google);
        assert_eq!(config.provider_timeout, Duration::from_secs(10));
    }

    #[rstest]
    #[case("TWILIO_ACCOUNT_SID")]
    #[case("TWILIO_AUTH_TOKEN")]
    #[case("GOOGLE_TRANSLATE_API_KEY")]
    fn missing_credentials_are_named(#[case] missing: &'static str) {
        let entries: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(key, _)| *key != missing)
            .collect();

        let result = RelayConfig::from_lookup(lookup_from(&entries));

        assert_eq!(result, Err(ConfigError::MissingVariable(missing)));
    }

    #[rstest]
    fn blank_values_count_as_unset() {
        let entries = [
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "   "),
            ("GOOGLE_TRANSLATE_API_KEY", "google-key"),
        ];

        let result = RelayConfig::from_lookup(lookup_from(&entries));

        assert_eq!(result, Err(ConfigError::MissingVariable("TWILIO_AUTH_TOKEN")));
    }

    #[rstest]
    fn overrides_are_applied() {
        let entries = with_required(&[
            ("BIND_ADDRESS", "127.0.0.1"),
            ("PORT", "8080"),
            ("TWILIO_WHATSAPP_NUMBER", "whatsapp:+628111"),
            ("GOOGLE_CLOUD_PROJECT_ID", "translator-bot"),
            ("LANGUAGE_DETECTOR", "Vocabulary"),
            ("PROVIDER_TIMEOUT_SECS", "3"),
        ]);

        let config = RelayConfig::from_lookup(lookup_from(&entries)).expect("config should load");

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.twilio.from_number, "whatsapp:+628111");
        assert_eq!(config.google.project_id.as_deref(), Some("translator-bot"));
        assert_eq!(config.detector, DetectorChoice::Vocabulary);
        assert_eq!(config.provider_timeout, Duration::from_secs(3));
    }

    #[rstest]
    #[case("PORT", "http")]
    #[case("PORT", "70000")]
    #[case("BIND_ADDRESS", "localhost")]
    #[case("LANGUAGE_DETECTOR", "azure")]
    #[case("PROVIDER_TIMEOUT_SECS", "0")]
    fn invalid_values_are_rejected(#[case] variable: &'static str, #[case] value: &'static str) {
        let entries = with_required(&[(variable, value)]);

        let result = RelayConfig::from_lookup(lookup_from(&entries));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { variable: name, .. }) if name == variable
        ));
    }

    #[rstest]
    fn debug_output_redacts_secrets() {
        let config =
            RelayConfig::from_lookup(lookup_from(&REQUIRED)).expect("config should load");

        let rendered = format!("{config:?}");

        assert!(!rendered.contains("secret-token"));
        assert!(!rendered.contains("google-key"));
        assert!(rendered.contains("AC123"));
    }
}
