use crate::error::MonitorError;
use crate::severity::Severity;
use serde::Deserialize;

/// Top-level fields of a lag report. Error responses usually come without
/// a status block, so these are read on their own first.
#[derive(Debug, Deserialize)]
pub struct ReportHeader {
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReportHeader {
    pub fn parse(body: &str) -> Result<Self, MonitorError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The report's message when its `error` flag is set.
    pub fn error_message(&self) -> Option<&str> {
        self.error.then(|| self.message.as_deref().unwrap_or_default())
    }
}

/// Body of `GET <base-path><group>/lag` as served by the lag-reporting service.
#[derive(Debug, Deserialize)]
pub struct LagReport {
    #[serde(flatten)]
    pub header: ReportHeader,
    pub status: LagStatus,
}

#[derive(Debug, Deserialize)]
pub struct LagStatus {
    pub cluster: String,
    pub group: String,
    pub status: String,
    #[serde(rename = "totallag")]
    pub total_lag: i64,
    pub partitions: Vec<PartitionLag>,
}

#[derive(Debug, Deserialize)]
pub struct PartitionLag {
    pub topic: String,
    pub partition: i32,
    pub current_lag: i64,
}

impl LagReport {
    pub fn parse(body: &str) -> Result<Self, MonitorError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsumerStatus {
    Ok,
    Warn,
    Stall,
    Error,
    Unrecognized(String),
}

impl ConsumerStatus {
    /// `STALL` is benign here: a lag that stopped moving is not an error on its own.
    pub fn severity(&self) -> Severity {
        match self {
            ConsumerStatus::Ok | ConsumerStatus::Stall => Severity::Info,
            ConsumerStatus::Warn => Severity::Warn,
            ConsumerStatus::Error | ConsumerStatus::Unrecognized(_) => Severity::Error,
        }
    }
}

impl From<&str> for ConsumerStatus {
    fn from(value: &str) -> Self {
        match value {
            "OK" => ConsumerStatus::Ok,
            "WARN" => ConsumerStatus::Warn,
            "STALL" => ConsumerStatus::Stall,
            "ERROR" => ConsumerStatus::Error,
            other => ConsumerStatus::Unrecognized(other.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_report() {
        let body = r#"{
            "error": false,
            "message": "consumer status returned",
            "status": {
                "cluster": "local",
                "group": "ECR",
                "status": "WARN",
                "complete": 1.0,
                "totallag": 120,
                "partitions": [
                    {"topic": "orders", "partition": 0, "current_lag": 100, "status": "WARN"},
                    {"topic": "orders", "partition": 1, "current_lag": 20, "status": "OK"}
                ]
            },
            "request": {"url": "/v3/kafka/local/consumer/ECR/lag", "host": "burrow"}
        }"#;

        let report = LagReport::parse(body).unwrap();

        assert_eq!(report.header.error_message(), None);
        assert_eq!(
            report.header.message.as_deref(),
            Some("consumer status returned")
        );
        assert_eq!(report.status.group, "ECR");
        assert_eq!(report.status.total_lag, 120);
        assert_eq!(report.status.partitions.len(), 2);
        assert_eq!(report.status.partitions[1].current_lag, 20);
    }

    #[test]
    fn header_of_error_report_without_status_block() {
        let body = r#"{"error": true, "message": "cluster not found", "request": {}}"#;

        let header = ReportHeader::parse(body).unwrap();
        assert_eq!(header.error_message(), Some("cluster not found"));

        let error = LagReport::parse(body).unwrap_err();
        assert!(matches!(error, MonitorError::Parse(_)));
    }

    #[test]
    fn error_flag_without_message_yields_empty_message() {
        let header = ReportHeader::parse(r#"{"error": true}"#).unwrap();

        assert_eq!(header.error_message(), Some(""));
    }

    #[test]
    fn header_requires_error_flag() {
        assert!(ReportHeader::parse(r#"{"message": "no flag"}"#).is_err());
        assert!(ReportHeader::parse("not json").is_err());
    }

    #[test]
    fn wrongly_typed_lag_is_a_parse_error() {
        let body = r#"{"error": false, "status": {"cluster": "c", "group": "g", "status": "OK",
            "totallag": "many", "partitions": []}}"#;

        assert!(LagReport::parse(body).is_err());
    }

    #[test]
    fn status_text_maps_to_severity() {
        assert_eq!(ConsumerStatus::from("OK").severity(), Severity::Info);
        assert_eq!(ConsumerStatus::from("STALL").severity(), Severity::Info);
        assert_eq!(ConsumerStatus::from("WARN").severity(), Severity::Warn);
        assert_eq!(ConsumerStatus::from("ERROR").severity(), Severity::Error);
        assert_eq!(ConsumerStatus::from("").severity(), Severity::Error);
        assert_eq!(
            ConsumerStatus::from("ok"),
            ConsumerStatus::Unrecognized("ok".to_owned())
        );
    }
}
