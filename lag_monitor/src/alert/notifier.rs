use crate::alert::AlertRouting;
use crate::severity::Severity;
use async_trait::async_trait;

/// Best-effort outbound alert channel.
///
/// Implementations deliver `message` once per recipient in `routing` and
/// swallow delivery failures.
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    async fn send(&self, routing: &AlertRouting, severity: Severity, message: &str);
}
