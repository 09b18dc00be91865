use secrecy::SecretString;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for manual generation.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Clone)]
pub struct ManualConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Absent keys are reported per request, not at startup.
    pub api_key: Option<SecretString>,
    pub model: String,
    pub api_base: String,
    /// No timeout unless explicitly configured.
    pub timeout: Option<Duration>,
}

impl ManualConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::new);

        let timeout = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(ManualConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key,
                model: get_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: get_env("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                timeout,
            },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_TIMEOUT_SECS must be a positive integer, got '{}'",
                raw
            ))
        })
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_accepts_positive_seconds() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout(" 5 ").unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert!(matches!(parse_timeout("0"), Err(AppError::ConfigError(_))));
        assert!(matches!(parse_timeout("soon"), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn get_env_falls_back_to_default() {
        assert_eq!(
            get_env("MANUAL_SERVICE_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
