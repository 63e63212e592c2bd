use crate::severity::Severity;
use chrono::{DateTime, Local};
use getset::{CopyGetters, Getters};

pub const RECORD_TIME_FORMAT: &str = "%Y%m%d %H:%M:%S%.3f";

#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct LogRecord {
    #[getset(get_copy = "pub")]
    severity: Severity,
    #[getset(get = "pub")]
    timestamp: DateTime<Local>,
    #[getset(get = "pub")]
    message: String,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self::with_timestamp(severity, Local::now(), message)
    }

    pub fn with_timestamp(
        severity: Severity,
        timestamp: DateTime<Local>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            timestamp,
            message: message.into(),
        }
    }

    /// Renders the record the way it lands in a log file, without the trailing newline.
    pub fn line(&self) -> String {
        format!(
            "{} [{}] {}",
            self.timestamp.format(RECORD_TIME_FORMAT),
            self.severity,
            self.message
        )
    }
}
