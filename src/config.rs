//! Configuration types.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::channels::codec::DEFAULT_MAX_MESSAGE_LENGTH;
use crate::error::ConfigError;

/// Where sessions are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    /// Process-local map, lost on restart.
    Memory,
    /// The `sessions` table of the libSQL database.
    Database,
}

impl FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "db" | "database" | "libsql" => Ok(Self::Database),
            other => Err(format!("expected memory or db, got {other:?}")),
        }
    }
}

/// Twilio webhook settings.
#[derive(Debug, Clone, Default)]
pub struct TwilioConfig {
    pub auth_token: Option<SecretString>,
    /// Reject requests whose `X-Twilio-Signature` does not verify.
    pub validate_signature: bool,
    /// Public URL Twilio posts to. Signatures are computed over it; when
    /// unset, the URL is rebuilt from the request's `Host` header and path.
    pub webhook_url: Option<String>,
}

/// Server and dialog configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub port: u16,
    pub dataset_dir: PathBuf,
    /// libSQL file for the document store. `None` keeps documents in memory.
    pub db_path: Option<PathBuf>,
    pub session_backend: SessionBackend,
    /// Characters per outbound message.
    pub max_message_len: usize,
    /// Idle time after which a session starts over. `None` disables expiry.
    pub session_idle_ttl: Option<Duration>,
    pub session_sweep_interval: Duration,
    pub twilio: TwilioConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            dataset_dir: PathBuf::from("./data"),
            db_path: None,
            session_backend: SessionBackend::Memory,
            max_message_len: DEFAULT_MAX_MESSAGE_LENGTH,
            session_idle_ttl: Some(Duration::from_secs(24 * 60 * 60)),
            session_sweep_interval: Duration::from_secs(300),
            twilio: TwilioConfig::default(),
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

impl BotConfig {
    /// Build config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse(&lookup, "AGRI_ASSIST_PORT", defaults.port)?;
        let dataset_dir = non_empty("AGRI_ASSIST_DATASET_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_dir);
        let db_path = non_empty("AGRI_ASSIST_DB_PATH").map(PathBuf::from);
        let session_backend = parse(&lookup, "AGRI_ASSIST_SESSION_BACKEND", defaults.session_backend)?;

        let max_message_len = parse(&lookup, "AGRI_ASSIST_MAX_MESSAGE_LEN", defaults.max_message_len)?;
        if max_message_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "AGRI_ASSIST_MAX_MESSAGE_LEN".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let idle_secs: u64 = parse(&lookup, "AGRI_ASSIST_SESSION_IDLE_SECS", 24 * 60 * 60)?;
        let sweep_secs: u64 = parse(&lookup, "AGRI_ASSIST_SESSION_SWEEP_SECS", 300)?;
        if sweep_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "AGRI_ASSIST_SESSION_SWEEP_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let twilio = TwilioConfig {
            auth_token: non_empty("TWILIO_AUTH_TOKEN").map(SecretString::from),
            validate_signature: parse(&lookup, "TWILIO_VALIDATE_SIGNATURE", false)?,
            webhook_url: non_empty("TWILIO_WEBHOOK_URL"),
        };
        if twilio.validate_signature && twilio.auth_token.is_none() {
            return Err(ConfigError::MissingEnvVar("TWILIO_AUTH_TOKEN".to_string()));
        }

        Ok(Self {
            port,
            dataset_dir,
            db_path,
            session_backend,
            max_message_len,
            session_idle_ttl: (idle_secs > 0).then(|| Duration::from_secs(idle_secs)),
            session_sweep_interval: Duration::from_secs(sweep_secs),
            twilio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.dataset_dir, PathBuf::from("./data"));
        assert!(cfg.db_path.is_none());
        assert_eq!(cfg.session_backend, SessionBackend::Memory);
        assert_eq!(cfg.max_message_len, 1600);
        assert_eq!(cfg.session_idle_ttl, Some(Duration::from_secs(86_400)));
        assert!(!cfg.twilio.validate_signature);
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config(&[
            ("AGRI_ASSIST_PORT", "8080"),
            ("AGRI_ASSIST_DB_PATH", "/tmp/agri.db"),
            ("AGRI_ASSIST_SESSION_BACKEND", "DB"),
            ("AGRI_ASSIST_SESSION_IDLE_SECS", "0"),
            ("TWILIO_AUTH_TOKEN", "secret"),
            ("TWILIO_VALIDATE_SIGNATURE", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.db_path, Some(PathBuf::from("/tmp/agri.db")));
        assert_eq!(cfg.session_backend, SessionBackend::Database);
        assert!(cfg.session_idle_ttl.is_none());
        assert!(cfg.twilio.validate_signature);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(
            config(&[("AGRI_ASSIST_PORT", "eighty")]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config(&[("AGRI_ASSIST_SESSION_BACKEND", "redis")]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config(&[("AGRI_ASSIST_MAX_MESSAGE_LEN", "0")]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn signature_validation_needs_token() {
        assert!(matches!(
            config(&[("TWILIO_VALIDATE_SIGNATURE", "true")]),
            Err(ConfigError::MissingEnvVar(_))
        ));
    }
}
