use crate::alert::AlertNotifier;
use crate::classifier::classify;
use crate::error::MonitorError;
use crate::log_sink::{LogRecord, LogSink};
use crate::registry::{ConsumerEntry, ConsumerRegistry};
use crate::report::{LagReport, ReportHeader};
use crate::severity::Severity;
use crate::source::LagReportSource;
use std::time::Duration;
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Stream name of the scheduler's own log sink.
pub const SCHEDULER_STREAM: &str = "LagMonitor";

pub struct PollScheduler<S, N> {
    registry: ConsumerRegistry,
    source: S,
    notifier: N,
    sink: LogSink,
    interval: Duration,
}

impl<S, N> PollScheduler<S, N>
where
    S: LagReportSource,
    N: AlertNotifier,
{
    pub fn new(
        registry: ConsumerRegistry,
        source: S,
        notifier: N,
        sink: LogSink,
        interval: Duration,
    ) -> Self {
        Self {
            registry,
            source,
            notifier,
            sink,
            interval,
        }
    }

    pub fn registry(&self) -> &ConsumerRegistry {
        &self.registry
    }

    /// Polls every group once per interval until `cancellation_token` fires,
    /// then shuts every sink down.
    pub async fn run(mut self, cancellation_token: CancellationToken) {
        self.sink.info("Lag monitor started");
        for entry in self.registry.iter() {
            entry.sink().info(format!("{} run", entry.name()));
        }

        loop {
            if cancellation_token.is_cancelled() {
                break;
            }

            self.poll_cycle().await;

            select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = cancellation_token.cancelled() => {
                    info!("Polling was cancelled");
                    break;
                }
            }
        }

        self.shutdown().await;
    }

    /// One pass over all groups in registration order.
    pub async fn poll_cycle(&mut self) {
        debug!("Polling {} consumer groups", self.registry.len());

        for entry in self.registry.iter_mut() {
            poll_consumer(&self.source, &self.notifier, &self.sink, entry).await;
        }
    }

    pub async fn shutdown(self) {
        self.sink.info("Lag monitor stopped");
        self.registry.terminate_all().await;
        self.sink.terminate().await;
        info!("All log sinks terminated");
    }
}

async fn poll_consumer<S, N>(source: &S, notifier: &N, sink: &LogSink, entry: &mut ConsumerEntry)
where
    S: LagReportSource,
    N: AlertNotifier,
{
    let name = entry.name().to_owned();

    let body = match source.fetch(entry.url()).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Lag report request for {name} failed: {e}");
            let message = format!("Lag report request failed. consumer : {name}, {e}");
            sink.error(message.clone());
            entry.sink().error(message);
            entry
                .alert(notifier, Severity::Error, "Lag report request failed.")
                .await;
            return;
        }
    };

    sink.info(format!("Lag report received. consumer : {name}"));
    entry.sink().info(body.clone());

    let header = match ReportHeader::parse(&body) {
        Ok(header) => header,
        Err(e) => return parsing_failed(notifier, sink, entry, e).await,
    };

    if let Some(error_message) = header.error_message() {
        sink.error(format!(
            "Burrow ERROR! consumer : {name}, errorMsg : {error_message}, report : {body}"
        ));
        let message = format!("Burrow ERROR! errorMsg : {error_message}, report : {body}");
        entry.sink().error(message.clone());
        entry.alert(notifier, Severity::Error, &message).await;
    }

    let report = match LagReport::parse(&body) {
        Ok(report) => report,
        Err(e) => return parsing_failed(notifier, sink, entry, e).await,
    };

    let classification = classify(&report, entry.tracker_mut());

    sink.submit(LogRecord::new(
        classification.severity,
        classification.summary.clone(),
    ));
    entry.sink().submit(LogRecord::new(
        classification.severity,
        classification.summary.clone(),
    ));

    if classification.should_alert() {
        entry
            .alert(notifier, classification.severity, &classification.summary)
            .await;
    }
}

async fn parsing_failed<N>(
    notifier: &N,
    sink: &LogSink,
    entry: &ConsumerEntry,
    e: MonitorError,
) where
    N: AlertNotifier,
{
    let name = entry.name();
    warn!("Lag report for {name} is malformed: {e}");
    let message = format!("Lag report parsing failed. consumer : {name}, {e}");
    sink.error(message.clone());
    entry.sink().error(message);
    entry
        .alert(notifier, Severity::Error, "Lag report parsing failed.")
        .await;
}
