use crate::partitions::PartitionTracker;
use crate::report::{ConsumerStatus, LagReport};
use crate::severity::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub severity: Severity,
    pub summary: String,
}

impl Classification {
    pub fn should_alert(&self) -> bool {
        self.severity.is_alerting()
    }
}

/// Folds the report's partitions into `tracker` and derives severity and summary.
///
/// The summary lists every tracked partition in tracking order, including
/// partitions missing from this particular report.
pub fn classify(report: &LagReport, tracker: &mut PartitionTracker) -> Classification {
    let status = &report.status;
    for partition in &status.partitions {
        tracker.observe(&partition.topic, partition.partition, partition.current_lag);
    }

    let severity = ConsumerStatus::from(status.status.as_str()).severity();

    let mut summary = format!(
        "cluster : {}, consumer : {}, status : {}, totalLag : {}",
        status.cluster, status.group, status.status, status.total_lag
    );
    for observation in tracker.iter() {
        summary.push_str(", ");
        summary.push_str(&observation.to_string());
    }

    Classification {
        severity,
        summary,
    }
}
