use crate::registry::{ConsumerEntry, GroupConfig};
use crate::settings::MonitorSettings;
use tracing::{info, warn};

/// Active consumer groups in registration order.
pub struct ConsumerRegistry {
    entries: Vec<ConsumerEntry>,
}

impl ConsumerRegistry {
    /// Builds one entry per usable name. Names that fail validation or repeat
    /// an earlier name are left out; an empty registry is up to the caller.
    pub fn build(names: &[String], settings: &MonitorSettings) -> Self {
        let mut configs: Vec<GroupConfig> = Vec::with_capacity(names.len());

        for name in names {
            match GroupConfig::from_settings(name, settings) {
                Ok(config) if configs.iter().any(|c| c.name() == config.name()) => {
                    warn!("Consumer group {} is listed twice, ignoring repeat", config.name());
                }
                Ok(config) => configs.push(config),
                Err(e) => warn!("Consumer group {name:?} dropped: {e}"),
            }
        }

        Self::from_configs(configs)
    }

    pub fn from_configs(configs: Vec<GroupConfig>) -> Self {
        let entries = configs
            .into_iter()
            .map(ConsumerEntry::start)
            .collect::<Vec<_>>();

        info!(
            "Monitoring consumer groups: {:?}",
            entries.iter().map(|e| e.name()).collect::<Vec<_>>()
        );

        Self { entries }
    }

    pub fn find(&self, name: &str) -> Option<&ConsumerEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ConsumerEntry> {
        self.entries.iter_mut().find(|entry| entry.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConsumerEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ConsumerEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub async fn terminate_all(self) {
        for entry in self.entries {
            entry.terminate().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{BurrowSettings, LogSettings, TelegramSettings};
    use std::collections::HashMap;
    use std::path::Path;

    fn settings(log_dir: &Path) -> MonitorSettings {
        MonitorSettings {
            burrow: BurrowSettings {
                host: Some("burrow".to_owned()),
                port: Some("8000".to_owned()),
                base_path: Some("/v3/kafka/local/consumer/".to_owned()),
                ..Default::default()
            },
            log: LogSettings {
                path: Some(log_dir.to_path_buf()),
                ..Default::default()
            },
            telegram: TelegramSettings {
                token: Some("token".to_owned()),
                chat_ids: HashMap::from([("ECR".to_owned(), "1".to_owned())]),
                ..Default::default()
            },
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn keeps_registration_order_and_finds_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ConsumerRegistry::build(
            &names(&["ECR", "ECR_QA", "ECR_DEV"]),
            &settings(dir.path()),
        );

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["ECR", "ECR_QA", "ECR_DEV"]
        );
        assert!(registry.find("ECR").unwrap().alerting_enabled());
        assert!(!registry.find("ECR_QA").unwrap().alerting_enabled());
        assert!(registry.find("OTHER").is_none());

        registry.terminate_all().await;
    }

    #[tokio::test]
    async fn drops_invalid_and_repeated_names() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ConsumerRegistry::build(
            &names(&["ECR", " ", "ECR", "ECR_QA"]),
            &settings(dir.path()),
        );

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["ECR", "ECR_QA"]);

        registry.terminate_all().await;
    }

    #[tokio::test]
    async fn missing_shared_setting_drops_every_group() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings(dir.path());
        settings.burrow.host = None;

        let registry = ConsumerRegistry::build(&names(&["ECR", "ECR_QA"]), &settings);

        assert!(registry.is_empty());
        registry.terminate_all().await;
    }

    #[tokio::test]
    async fn find_mut_exposes_tracker() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = ConsumerRegistry::build(&names(&["ECR"]), &settings(dir.path()));

        registry.find_mut("ECR").unwrap().tracker_mut().observe("t", 0, 3);

        assert_eq!(registry.find("ECR").unwrap().tracker().len(), 1);
        registry.terminate_all().await;
    }
}
