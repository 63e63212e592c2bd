use crate::alert::AlertRouting;
use crate::error::MonitorError;
use crate::log_sink::LogSinkConfig;
use crate::settings::MonitorSettings;
use getset::Getters;
use tracing::info;

#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct GroupConfig {
    name: String,
    url: String,
    log: LogSinkConfig,
    alert_routing: Option<AlertRouting>,
}

impl GroupConfig {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        log: LogSinkConfig,
        alert_routing: Option<AlertRouting>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            log,
            alert_routing,
        }
    }

    /// Missing alert routing only disables alerting; missing lag service
    /// settings fail the group.
    pub fn from_settings(name: &str, settings: &MonitorSettings) -> Result<Self, MonitorError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MonitorError::Config("consumer group name is empty".to_owned()));
        }

        let url = settings.burrow.lag_url(name)?;
        let alert_routing = settings.telegram.routing_for(name);
        if alert_routing.is_none() {
            info!("Alerting is disabled for consumer group {name}");
        }

        Ok(Self::new(
            name,
            url,
            settings.log.sink_config(name),
            alert_routing,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{BurrowSettings, TelegramSettings};
    use std::collections::HashMap;

    fn settings() -> MonitorSettings {
        MonitorSettings {
            burrow: BurrowSettings {
                host: Some("burrow".to_owned()),
                port: Some("8000".to_owned()),
                base_path: Some("/v3/kafka/local/consumer/".to_owned()),
                ..Default::default()
            },
            telegram: TelegramSettings {
                token: Some("token".to_owned()),
                chat_ids: HashMap::from([("ECR".to_owned(), "1;2".to_owned())]),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn builds_from_settings() {
        let config = GroupConfig::from_settings("ECR", &settings()).unwrap();

        assert_eq!(config.name(), "ECR");
        assert_eq!(config.url(), "http://burrow:8000/v3/kafka/local/consumer/ECR/lag");
        assert_eq!(config.log().name, "ECR");
        assert_eq!(config.alert_routing().as_ref().unwrap().recipients().len(), 2);
    }

    #[test]
    fn group_without_recipients_is_kept_without_alerting() {
        let config = GroupConfig::from_settings("ECR_QA", &settings()).unwrap();

        assert!(config.alert_routing().is_none());
    }

    #[test]
    fn missing_lag_service_setting_fails() {
        let mut settings = settings();
        settings.burrow.port = None;

        assert!(matches!(
            GroupConfig::from_settings("ECR", &settings),
            Err(MonitorError::Config(_))
        ));
    }
}
