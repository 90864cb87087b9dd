//! Process-wide settings, read once at startup and handed to each component.

use std::path::PathBuf;
use std::str::FromStr;

use crate::AgentError;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,
}

/// Provider endpoint and response shape for the weather lookup.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub units: String,
    pub status_field: String,
    pub success_code: i64,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub sender: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub dir: PathBuf,
    pub keep_files: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub weather: WeatherConfig,
    pub mail: MailConfig,
    pub report: ReportConfig,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AgentError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required =
            |key: &str| get(key).ok_or_else(|| AgentError::Config(format!("{key} not set")));
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            llm: LlmConfig {
                api_key: required("OPENAI_API_KEY")?,
                model: or("OPENAI_MODEL", "gpt-4o"),
                api_base: get("OPENAI_API_BASE"),
            },
            weather: WeatherConfig {
                api_key: required("OWM_API_KEY")?,
                base_url: or(
                    "OWM_BASE_URL",
                    "http://api.openweathermap.org/data/2.5/weather",
                ),
                units: or("OWM_UNITS", "metric"),
                status_field: or("OWM_STATUS_FIELD", "cod"),
                success_code: parse(&get, "OWM_SUCCESS_CODE", 200)?,
            },
            mail: MailConfig {
                host: or("SMTP_HOST", "smtp.gmail.com"),
                port: parse(&get, "SMTP_PORT", 465)?,
                sender: required("SENDER_EMAIL")?,
                password: required("SENDER_PASSWORD")?,
            },
            report: ReportConfig {
                dir: get("REPORT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(std::env::temp_dir),
                keep_files: parse(&get, "REPORT_KEEP_FILES", false)?,
            },
            bind_addr: or("BIND_ADDR", "0.0.0.0:8000"),
        })
    }
}

fn parse<T, G>(get: &G, key: &str, default: T) -> Result<T, AgentError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AgentError::Config(format!("{key}={raw}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("OPENAI_API_KEY", "sk-test"),
        ("OWM_API_KEY", "owm-test"),
        ("SENDER_EMAIL", "bot@example.com"),
        ("SENDER_PASSWORD", "app-token"),
    ];

    #[test]
    fn defaults_fill_optional_settings() {
        let config = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();

        assert_eq!(config.llm.model, "gpt-4o");
        assert!(config.llm.api_base.is_none());
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.weather.status_field, "cod");
        assert_eq!(config.weather.success_code, 200);
        assert_eq!(config.mail.host, "smtp.gmail.com");
        assert_eq!(config.mail.port, 465);
        assert!(!config.report.keep_files);
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&REQUIRED[1..])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn blank_required_key_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SENDER_PASSWORD", "   "));
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }

    #[test]
    fn overrides_are_parsed() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("SMTP_PORT", "587"),
            ("OWM_SUCCESS_CODE", "0"),
            ("OWM_STATUS_FIELD", "status"),
            ("REPORT_KEEP_FILES", "true"),
            ("REPORT_DIR", "/srv/reports"),
        ]);
        let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.mail.port, 587);
        assert_eq!(config.weather.success_code, 0);
        assert_eq!(config.weather.status_field, "status");
        assert!(config.report.keep_files);
        assert_eq!(config.report.dir, PathBuf::from("/srv/reports"));
    }

    #[test]
    fn bad_number_is_an_error() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SMTP_PORT", "not-a-port"));
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(err.to_string().contains("SMTP_PORT"));
    }
}
