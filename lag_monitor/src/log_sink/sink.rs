use crate::log_sink::worker::{SinkCommand, SinkWorker};
use crate::log_sink::{LogRecord, LogSinkConfig};
use crate::severity::Severity;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::error;

/// Asynchronous writer for one named log stream.
///
/// Records are queued without blocking and written by a single background
/// task in submission order. [`LogSink::terminate`] flushes whatever is still
/// queued before the task exits.
pub struct LogSink {
    name: String,
    sender: UnboundedSender<SinkCommand>,
    worker: JoinHandle<()>,
}

impl LogSink {
    /// Spawns the draining task, so it must be called inside a tokio runtime.
    pub fn start(config: LogSinkConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let name = config.name.clone();
        let worker = tokio::task::spawn(SinkWorker::new(config, receiver).run());

        Self {
            name,
            sender,
            worker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn submit(&self, record: LogRecord) {
        if let Err(e) = self.sender.send(SinkCommand::Write(record)) {
            error!("Log sink {} is closed, dropping {:?}", self.name, e.0);
        }
    }

    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.submit(LogRecord::new(severity, message))
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message)
    }

    pub async fn terminate(self) {
        let _ = self.sender.send(SinkCommand::Terminate);

        if let Err(e) = self.worker.await {
            error!("Log sink {} worker failed: {e:?}", self.name);
        }
    }
}
