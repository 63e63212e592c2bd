use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("{0:#}")]
    Fetch(anyhow::Error),
    #[error("malformed lag report: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("log file write failed: {0}")]
    SinkIo(#[from] std::io::Error),
}

impl MonitorError {
    pub fn missing_setting(key: &str) -> Self {
        Self::Config(format!("setting `{key}` is missing"))
    }
}
