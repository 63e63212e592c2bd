use crate::alert::AlertRouting;
use crate::error::MonitorError;
use crate::log_sink::LogSinkConfig;
use crate::severity::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(30_000);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_ALERT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_LOG_DIRECTORY: &str = "./";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Settings shared by every monitored group.
///
/// Values stay loosely typed until a group is built from them: a missing or
/// malformed value only affects the groups that need it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    pub burrow: BurrowSettings,
    pub log: LogSettings,
    pub telegram: TelegramSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BurrowSettings {
    pub host: Option<String>,
    pub port: Option<String>,
    pub base_path: Option<String>,
    pub check_interval_secs: Option<String>,
    pub request_timeout_secs: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub path: Option<PathBuf>,
    pub level: Option<String>,
    pub error_file: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramSettings {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<String>,
    /// Recipients per group, `;` or `|` separated.
    pub chat_ids: HashMap<String, String>,
}

impl BurrowSettings {
    pub fn lag_url(&self, group: &str) -> Result<String, MonitorError> {
        let host = required(&self.host, "burrow.host")?;
        let port = required(&self.port, "burrow.port")?;
        let base_path = required(&self.base_path, "burrow.base_path")?;

        Ok(format!("http://{host}:{port}{base_path}{group}/lag"))
    }

    pub fn poll_interval(&self) -> Duration {
        parse_secs(self.check_interval_secs.as_deref()).unwrap_or(DEFAULT_POLL_INTERVAL)
    }

    pub fn request_timeout(&self) -> Duration {
        parse_secs(self.request_timeout_secs.as_deref()).unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }
}

impl LogSettings {
    pub fn directory(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIRECTORY))
    }

    pub fn min_severity(&self) -> Severity {
        let Some(level) = self.level.as_deref() else {
            return Severity::Info;
        };

        level.parse().unwrap_or_else(|e| {
            warn!("Falling back to INFO log level: {e}");
            Severity::Info
        })
    }

    pub fn sink_config(&self, name: &str) -> LogSinkConfig {
        LogSinkConfig::new(name, self.directory())
            .with_min_severity(self.min_severity())
            .with_error_file(self.error_file.unwrap_or(true))
    }
}

impl TelegramSettings {
    /// Routing for `group`, or `None` when alerting is not configured for it.
    pub fn routing_for(&self, group: &str) -> Option<AlertRouting> {
        let token = self.token.as_deref()?;
        let chat_ids = self
            .chat_ids
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(group))
            .map(|(_, value)| value.as_str())?;

        AlertRouting::parse(token, chat_ids)
    }

    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_TELEGRAM_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        parse_secs(self.timeout_secs.as_deref()).unwrap_or(DEFAULT_ALERT_TIMEOUT)
    }
}

fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str, MonitorError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| MonitorError::missing_setting(key))
}

fn parse_secs(value: Option<&str>) -> Option<Duration> {
    value?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
