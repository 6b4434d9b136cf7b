//! Configuration management for the contact form.
//!
//! Every setting has a sensible default so the form works without any
//! environment. `Config::from_env` lets a deployment override the hand-off
//! target, the greeting and the timings, reading a `.env` file if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Greeting placed at the top of every outbound message.
pub const DEFAULT_GREETING: &str =
    "Hi Anandhi, I'm interested in your life coaching services. I'd like to schedule a consultation.";

/// Messaging deep link the encoded message is appended to.
pub const DEFAULT_HANDOFF_URL: &str = "https://wa.me/";

/// Identifiers of the page elements the form controller drives.
///
/// Field inputs and their error holders are fixed by [`crate::form::Field`];
/// the container elements below vary between page templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormElements {
    /// The form container
    pub form: String,

    /// The submit control
    pub submit_button: String,

    /// Id given to the success notice appended after a hand-off
    pub success_notice: String,
}

impl Default for FormElements {
    fn default() -> Self {
        FormElements {
            form: "contactForm".to_string(),
            submit_button: "contactSubmit".to_string(),
            success_notice: "contactSuccess".to_string(),
        }
    }
}

/// Configuration for the contact form.
#[derive(Debug, Clone)]
pub struct Config {
    /// Messaging link base, e.g. `https://wa.me/`
    pub handoff_base_url: String,

    /// Opening line of the outbound message
    pub greeting: String,

    /// Delay before the hand-off link is opened, in milliseconds (default: 1000)
    pub redirect_delay_ms: u64,

    /// How long the success notice stays visible, in milliseconds (default: 5000)
    pub success_notice_ttl_ms: u64,

    /// Page element identifiers
    pub elements: FormElements,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACT_HANDOFF_URL`: messaging link base (must contain `://`)
    /// - `CONTACT_GREETING`: greeting line
    /// - `CONTACT_REDIRECT_DELAY_MS`: hand-off delay (default: 1000)
    /// - `CONTACT_SUCCESS_TTL_MS`: success notice lifetime (default: 5000)
    /// - `CONTACT_FORM_ID`: form element id (default: "contactForm")
    /// - `CONTACT_SUBMIT_ID`: submit button id (default: "contactSubmit")
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print anything, and a missing file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let handoff_base_url =
            env::var("CONTACT_HANDOFF_URL").unwrap_or(defaults.handoff_base_url);
        if !handoff_base_url.contains("://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_HANDOFF_URL".to_string(),
                reason: format!("Must be an absolute link, got: {}", handoff_base_url),
            });
        }

        let greeting = env::var("CONTACT_GREETING").unwrap_or(defaults.greeting);
        if greeting.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_GREETING".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let redirect_delay_ms =
            Self::parse_env_u64("CONTACT_REDIRECT_DELAY_MS", defaults.redirect_delay_ms)?;
        let success_notice_ttl_ms =
            Self::parse_env_u64("CONTACT_SUCCESS_TTL_MS", defaults.success_notice_ttl_ms)?;

        let elements = FormElements {
            form: Self::parse_env_id("CONTACT_FORM_ID", defaults.elements.form)?,
            submit_button: Self::parse_env_id(
                "CONTACT_SUBMIT_ID",
                defaults.elements.submit_button,
            )?,
            success_notice: defaults.elements.success_notice,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            handoff_base_url,
            greeting,
            redirect_delay_ms,
            success_notice_ttl_ms,
            elements,
            log_level,
        })
    }

    /// Delay before the hand-off completes.
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// Lifetime of the success notice.
    pub fn success_notice_ttl(&self) -> Duration {
        Duration::from_millis(self.success_notice_ttl_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Read an element id, rejecting blanks and whitespace.
    fn parse_env_id(var_name: &str, default: String) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.is_empty() || val.chars().any(char::is_whitespace) => {
                Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a single element id, got: {:?}", val),
                })
            }
            Ok(val) => Ok(val),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            handoff_base_url: DEFAULT_HANDOFF_URL.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            redirect_delay_ms: 1000,
            success_notice_ttl_ms: 5000,
            elements: FormElements::default(),
            log_level: "info".to_string(),
        }
    }
}
