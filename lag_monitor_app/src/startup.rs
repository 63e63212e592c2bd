use crate::app_config::AppConfig;
use anyhow::{bail, Context};
use lag_monitor::alert::TelegramNotifier;
use lag_monitor::log_sink::LogSink;
use lag_monitor::registry::ConsumerRegistry;
use lag_monitor::scheduler::{PollScheduler, SCHEDULER_STREAM};
use lag_monitor::source::HttpLagReportSource;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run_until_stopped(
    config: AppConfig,
    groups: Vec<String>,
    cancellation_token: CancellationToken,
) -> Result<(), anyhow::Error> {
    if groups.is_empty() {
        bail!("No consumer groups to monitor")
    }

    let settings = config.monitor_settings();
    let source = HttpLagReportSource::new(settings.burrow.request_timeout())
        .context("While creating lag report source")?;
    let notifier = TelegramNotifier::new(settings.telegram.api_url(), settings.telegram.timeout())
        .context("While creating telegram notifier")?;

    let registry = ConsumerRegistry::build(&groups, &settings);
    if registry.is_empty() {
        bail!("None of the consumer groups {groups:?} could be configured")
    }

    let interval = settings.burrow.poll_interval();
    info!(
        "Polling {} consumer groups every {:?}",
        registry.len(),
        interval
    );

    let sink = LogSink::start(settings.log.sink_config(SCHEDULER_STREAM));
    let scheduler = PollScheduler::new(registry, source, notifier, sink, interval);
    scheduler.run(cancellation_token).await;

    info!("Lag monitor stopped");
    Ok(())
}
