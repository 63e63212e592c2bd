use crate::alert::AlertNotifier;
use crate::log_sink::LogSink;
use crate::partitions::PartitionTracker;
use crate::registry::GroupConfig;
use crate::severity::Severity;

/// One monitored group: its configuration, partition lags and log stream.
pub struct ConsumerEntry {
    config: GroupConfig,
    tracker: PartitionTracker,
    sink: LogSink,
}

impl ConsumerEntry {
    pub fn start(config: GroupConfig) -> Self {
        let sink = LogSink::start(config.log().clone());

        Self {
            config,
            tracker: PartitionTracker::new(),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn url(&self) -> &str {
        self.config.url()
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    pub fn tracker(&self) -> &PartitionTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut PartitionTracker {
        &mut self.tracker
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn alerting_enabled(&self) -> bool {
        self.config.alert_routing().is_some()
    }

    /// Sends `[<group>] [<severity>] <message>` to every recipient of the group.
    pub async fn alert<N>(&self, notifier: &N, severity: Severity, message: &str)
    where
        N: AlertNotifier + ?Sized,
    {
        let Some(routing) = self.config.alert_routing() else {
            return;
        };

        let text = format!("[{}] [{}] {}", self.name(), severity, message);
        notifier.send(routing, severity, &text).await;
    }

    pub async fn terminate(self) {
        self.sink.terminate().await
    }
}
