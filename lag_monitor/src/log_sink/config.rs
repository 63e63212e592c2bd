use crate::severity::Severity;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const LOG_FILE_DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone)]
pub struct LogSinkConfig {
    pub name: String,
    pub directory: PathBuf,
    pub min_severity: Severity,
    /// File receiving a copy of every ERROR+ line, relative to `directory`.
    pub error_file: Option<String>,
}

impl LogSinkConfig {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            min_severity: Severity::Info,
            error_file: None,
        }
    }

    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    pub fn with_error_file(mut self, enabled: bool) -> Self {
        self.error_file = enabled.then(|| format!("{}.error.log", self.name));
        self
    }

    pub fn log_file_name(&self, date: NaiveDate) -> String {
        format!("{}.{}.log", self.name, date.format(LOG_FILE_DATE_FORMAT))
    }
}
