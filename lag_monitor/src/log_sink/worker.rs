use crate::error::MonitorError;
use crate::log_sink::{LogRecord, LogSinkConfig};
use crate::severity::Severity;
use chrono::Local;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error};

#[derive(Debug)]
pub(super) enum SinkCommand {
    Write(LogRecord),
    Terminate,
}

pub(super) struct SinkWorker {
    config: LogSinkConfig,
    receiver: UnboundedReceiver<SinkCommand>,
}

impl SinkWorker {
    pub(super) fn new(config: LogSinkConfig, receiver: UnboundedReceiver<SinkCommand>) -> Self {
        Self { config, receiver }
    }

    pub(super) async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            let mut batch = Vec::new();
            let mut terminate = collect(command, &mut batch);

            while !terminate {
                match self.receiver.try_recv() {
                    Ok(command) => terminate = collect(command, &mut batch),
                    Err(_) => break,
                }
            }

            if let Err(e) = self.flush(&batch).await {
                error!(
                    "Log sink {} failed to write {} records: {e}",
                    self.config.name,
                    batch.len()
                );
            }

            if terminate {
                break;
            }
        }

        debug!("Log sink {} stopped", self.config.name);
    }

    async fn flush(&self, batch: &[LogRecord]) -> Result<(), MonitorError> {
        let mut lines = String::new();
        let mut error_lines = String::new();

        for record in batch
            .iter()
            .filter(|record| record.severity() >= self.config.min_severity)
        {
            let line = record.line();
            debug!("[{}] {line}", self.config.name);

            if record.severity() >= Severity::Error {
                error_lines.push_str(&line);
                error_lines.push('\n');
            }
            lines.push_str(&line);
            lines.push('\n');
        }

        if lines.is_empty() {
            return Ok(());
        }

        tokio::fs::create_dir_all(&self.config.directory).await?;

        let file_name = self.config.log_file_name(Local::now().date_naive());
        append(&self.config.directory.join(file_name), &lines).await?;

        if let Some(error_file) = &self.config.error_file {
            if !error_lines.is_empty() {
                append(&self.config.directory.join(error_file), &error_lines).await?;
            }
        }

        Ok(())
    }
}

fn collect(command: SinkCommand, batch: &mut Vec<LogRecord>) -> bool {
    match command {
        SinkCommand::Write(record) => {
            batch.push(record);
            false
        }
        SinkCommand::Terminate => true,
    }
}

async fn append(path: &Path, content: &str) -> Result<(), MonitorError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
