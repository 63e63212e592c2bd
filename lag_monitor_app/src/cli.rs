use clap::Parser;
use std::path::PathBuf;

/// Watches consumer group lag and alerts when groups fall behind.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the settings file
    pub config: PathBuf,

    /// Consumer groups to monitor, e.g. ECR ECR_QA. Falls back to `groups` from the settings file
    pub groups: Vec<String>,
}

impl Cli {
    pub fn groups_or(&self, configured: &[String]) -> Vec<String> {
        let groups = if self.groups.is_empty() {
            configured
        } else {
            &self.groups
        };

        groups.iter().map(|group| normalize_group(group)).collect()
    }
}

pub fn normalize_group(group: &str) -> String {
    group.trim().to_uppercase()
}
