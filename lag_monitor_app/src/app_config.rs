use anyhow::Context;
use config::Config;
use lag_monitor::settings::{BurrowSettings, LogSettings, MonitorSettings, TelegramSettings};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

pub const ENV_PREFIX: &str = "LAG_MONITOR";

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct AppConfig {
    pub groups: Vec<String>,
    pub burrow: BurrowSettings,
    pub log: LogSettings,
    pub telegram: TelegramSettings,
}

impl AppConfig {
    /// Reads `path` and applies `LAG_MONITOR_<SECTION>__<KEY>` overrides on top.
    pub fn build(path: &Path) -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("groups"),
            )
            .build()
            .context("While building config")?;

        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!(
            "App config: groups {:?}, {:?}, {:?}, alert chats configured for {:?}",
            deserialized_config.groups,
            deserialized_config.burrow,
            deserialized_config.log,
            deserialized_config.telegram.chat_ids.keys().collect::<Vec<_>>()
        );

        Ok(deserialized_config)
    }

    pub fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings {
            burrow: self.burrow.clone(),
            log: self.log.clone(),
            telegram: self.telegram.clone(),
        }
    }
}
